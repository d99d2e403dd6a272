//! Log capture for the in-app log pane.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::style::Theme;

/// Install `tui-logger` as the global logger, recording at `level`.
///
/// Records are buffered until the storefront's event loop moves them into
/// the log pane.
pub fn init_logging(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(LevelFilter::Trace)
		.map_err(|err| anyhow!("failed to install logger: {err:?}"))?;
	tui_logger::set_default_level(level);
	Ok(())
}

/// Toggleable pane showing captured log records.
pub(crate) struct LogPane {
	visible: bool,
	widget: TuiWidgetState,
}

impl LogPane {
	pub(crate) fn new() -> Self {
		Self {
			visible: false,
			widget: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
		}
	}

	pub(crate) fn is_visible(&self) -> bool {
		self.visible
	}

	pub(crate) fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	/// Forward pane navigation keys to the widget. Returns whether the key
	/// was consumed.
	pub(crate) fn handle_key(&self, key: KeyEvent) -> bool {
		let event = match key.code {
			KeyCode::Char('h') => TuiWidgetEvent::HideKey,
			KeyCode::Char('+') => TuiWidgetEvent::PlusKey,
			KeyCode::Char('-') => TuiWidgetEvent::MinusKey,
			KeyCode::Left => TuiWidgetEvent::LeftKey,
			KeyCode::Right => TuiWidgetEvent::RightKey,
			KeyCode::Char(' ') => TuiWidgetEvent::SpaceKey,
			_ => return false,
		};
		self.widget.transition(event);
		true
	}

	pub(crate) fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}
		let widget = TuiLoggerSmartWidget::default()
			.title_log("Runtime log")
			.title_target("Targets")
			.border_style(theme.border_style())
			.highlight_style(theme.row_highlight)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.state(&self.widget);
		frame.render_widget(widget, area);
	}
}
