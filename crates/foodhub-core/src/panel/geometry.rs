use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Logical resting state of the panel.
///
/// The state is the source of truth; every pixel (or row) value the panel
/// renders is derived from it through [`SnapMetrics::snap_zone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
	/// Pushed below the viewport edge.
	#[default]
	Closed,
	/// Seated at the viewport edge with the collapsed height.
	HalfOpen,
	/// Seated at the viewport edge with the expanded height.
	FullOpen,
}

impl PanelState {
	/// Human readable name used in logs and summaries.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Closed => "closed",
			Self::HalfOpen => "half-open",
			Self::FullOpen => "full-open",
		}
	}

	/// Whether the state is one of the two open snap points.
	#[must_use]
	pub fn is_open(self) -> bool {
		!matches!(self, Self::Closed)
	}
}

/// Height and vertical offset of the panel.
///
/// `bottom == 0` seats the panel on the viewport's bottom edge. Negative
/// values push it below the edge, hiding `-bottom` units of its height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
	pub height: f32,
	pub bottom: f32,
}

impl Geometry {
	#[must_use]
	pub const fn new(height: f32, bottom: f32) -> Self {
		Self { height, bottom }
	}

	/// Linear interpolation between two geometries, `t` clamped to `0..=1`.
	#[must_use]
	pub fn lerp(from: Self, to: Self, t: f32) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			height: from.height + (to.height - from.height) * t,
			bottom: from.bottom + (to.bottom - from.bottom) * t,
		}
	}

	/// Portion of the panel that sits above the viewport's bottom edge.
	#[must_use]
	pub fn visible_height(&self) -> f32 {
		(self.height + self.bottom).clamp(0.0, self.height.max(0.0))
	}

	#[must_use]
	pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
		(self.height - other.height).abs() <= epsilon && (self.bottom - other.bottom).abs() <= epsilon
	}
}

/// Size configuration for the three snap zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMetrics {
	/// Height shared by the closed and half-open zones.
	pub collapsed_height: f32,
	/// Height of the full-open zone. Always greater than `collapsed_height`.
	pub expanded_height: f32,
	/// Elastic give past the nominal bounds, allowed only while dragging.
	pub overdrag: f32,
	/// Fixed chrome (handle, header, expand toggle, footer) subtracted from
	/// the panel height to get the content region.
	pub chrome_height: f32,
}

impl SnapMetrics {
	pub const DEFAULT_OVERDRAG: f32 = 50.0;

	/// Build metrics for the given collapsed and expanded heights.
	///
	/// An expanded height that does not exceed the collapsed one is raised to
	/// `collapsed + 1` so the full-open zone stays distinct.
	#[must_use]
	pub fn new(collapsed_height: f32, expanded_height: f32) -> Self {
		let collapsed_height = collapsed_height.max(1.0);
		let expanded_height = if expanded_height > collapsed_height {
			expanded_height
		} else {
			collapsed_height + 1.0
		};
		Self {
			collapsed_height,
			expanded_height,
			overdrag: Self::DEFAULT_OVERDRAG,
			chrome_height: 0.0,
		}
	}

	#[must_use]
	pub fn with_overdrag(mut self, overdrag: f32) -> Self {
		self.overdrag = overdrag.max(0.0);
		self
	}

	#[must_use]
	pub fn with_chrome_height(mut self, chrome_height: f32) -> Self {
		self.chrome_height = chrome_height.max(0.0);
		self
	}

	/// Derive metrics for a viewport of `viewport_height` units.
	#[must_use]
	pub fn for_viewport(viewport_height: f32, tuning: &SheetTuning) -> Self {
		let viewport_height = viewport_height.max(1.0);
		let collapsed = (viewport_height * tuning.collapsed_ratio).round();
		let expanded = (viewport_height * tuning.expanded_ratio).round();
		Self::new(collapsed, expanded)
			.with_overdrag(tuning.overdrag)
			.with_chrome_height(tuning.chrome_height)
	}

	/// Map a logical state to the geometry the panel rests at.
	///
	/// When the host has closed the panel, every state maps below the
	/// viewport so a closing panel keeps its height while sliding away.
	#[must_use]
	pub fn snap_zone(&self, state: PanelState, open: bool) -> Geometry {
		let height = match state {
			PanelState::FullOpen => self.expanded_height,
			PanelState::HalfOpen | PanelState::Closed => self.collapsed_height,
		};
		let bottom = if open && state.is_open() { 0.0 } else { -height };
		Geometry::new(height, bottom)
	}

	/// Height available to the content region for a panel of `height`.
	#[must_use]
	pub fn content_height(&self, height: f32) -> f32 {
		(height - self.chrome_height).max(0.0)
	}

	fn max_height(&self) -> f32 {
		self.expanded_height + self.overdrag
	}

	fn min_bottom(&self) -> f32 {
		-(self.collapsed_height + self.overdrag)
	}
}

/// Release thresholds used to classify a drag's final geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapThresholds {
	/// Fraction of the collapsed height the panel must sink below the edge
	/// before a release closes it.
	pub close_fraction: f32,
	/// Fraction of the collapsed→expanded traversal that commits to
	/// expansion.
	pub expand_bias: f32,
	/// Distance from the edge still treated as seated.
	pub bottom_tolerance: f32,
}

impl Default for SnapThresholds {
	fn default() -> Self {
		Self {
			close_fraction: 0.35,
			expand_bias: 0.5,
			bottom_tolerance: 2.0,
		}
	}
}

impl SnapThresholds {
	#[must_use]
	pub fn close_threshold(&self, metrics: &SnapMetrics) -> f32 {
		-metrics.collapsed_height * self.close_fraction
	}

	#[must_use]
	pub fn expand_threshold(&self, metrics: &SnapMetrics) -> f32 {
		let span = metrics.expanded_height - metrics.collapsed_height;
		metrics.collapsed_height + span * self.expand_bias
	}

	/// Classify a release position into exactly one target state.
	///
	/// The same rules apply whichever state the drag started from.
	#[must_use]
	pub fn resolve(&self, geometry: Geometry, metrics: &SnapMetrics) -> PanelState {
		if geometry.bottom < self.close_threshold(metrics) {
			PanelState::Closed
		} else if geometry.height > self.expand_threshold(metrics)
			&& geometry.bottom >= -self.bottom_tolerance
		{
			PanelState::FullOpen
		} else {
			PanelState::HalfOpen
		}
	}
}

/// Map a drag displacement onto the geometry captured at drag start.
///
/// `delta_y` is positive when the pointer moved up. Moving up first lifts a
/// panel that sits below the edge back to `bottom == 0` and spends the rest
/// on height, capped at `expanded + overdrag`. Moving down first shrinks the
/// height toward the collapsed height and spends the rest on lowering the
/// bottom, floored at `-(collapsed + overdrag)`.
#[must_use]
pub fn drag_geometry(origin: Geometry, delta_y: f32, metrics: &SnapMetrics) -> Geometry {
	let mut height = origin.height;
	let mut bottom = origin.bottom;

	if delta_y > 0.0 {
		let lift = (-origin.bottom).max(0.0).min(delta_y);
		bottom += lift;
		height += delta_y - lift;
	} else if delta_y < 0.0 {
		let travel = -delta_y;
		let shrink = (origin.height - metrics.collapsed_height)
			.max(0.0)
			.min(travel);
		height -= shrink;
		bottom -= travel - shrink;
	}

	// An origin captured mid-animation may already sit past the nominal
	// bounds; the floor never pulls it back up.
	let min_height = origin.height.min(metrics.collapsed_height);
	let min_bottom = origin.bottom.min(metrics.min_bottom());
	Geometry {
		height: height.clamp(min_height, metrics.max_height().max(origin.height)),
		bottom: bottom.clamp(min_bottom, 0.0),
	}
}

/// User-facing knobs for the sheet, resolved from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTuning {
	/// Collapsed height as a fraction of the viewport.
	pub collapsed_ratio: f32,
	/// Expanded height as a fraction of the viewport.
	pub expanded_ratio: f32,
	pub overdrag: f32,
	pub chrome_height: f32,
	pub animation: Duration,
	pub thresholds: SnapThresholds,
}

impl Default for SheetTuning {
	fn default() -> Self {
		Self {
			collapsed_ratio: 0.5,
			expanded_ratio: 0.85,
			overdrag: 2.0,
			chrome_height: 0.0,
			animation: Duration::from_millis(300),
			thresholds: SnapThresholds {
				bottom_tolerance: 1.0,
				..SnapThresholds::default()
			},
		}
	}
}
