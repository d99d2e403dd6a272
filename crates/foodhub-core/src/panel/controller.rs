use std::mem;
use std::time::{Duration, Instant};

use log::debug;

use super::geometry::{
	Geometry, PanelState, SheetTuning, SnapMetrics, SnapThresholds, drag_geometry,
};
use super::transition::Transition;

/// Notification produced when a transition completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
	/// The panel came to rest at the given state.
	Settled(PanelState),
	/// The panel came to rest closed while the host still considers it open.
	/// The host is expected to answer with `set_open(false)`.
	CloseRequested,
}

/// Ephemeral record of one continuous pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
	origin_y: f32,
	origin: Geometry,
	origin_state: PanelState,
	live: Geometry,
}

impl DragSession {
	fn has_net_movement(&self) -> bool {
		!self.live.approx_eq(&self.origin, f32::EPSILON)
	}
}

/// What the panel is doing right now. Dragging and animating are mutually
/// exclusive, and replacing this value is the only way to cancel either.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
	Idle,
	Animating(Transition),
	Dragging(DragSession),
}

/// State machine behind the draggable filter sheet.
///
/// The controller translates the host's boolean open flag and direct pointer
/// gestures into one of three [`PanelState`]s. Every state change plays a
/// fixed-duration eased [`Transition`]; [`SnapPanel::tick`] completes it and
/// reports the outcome exactly once.
///
/// Operations that are not valid in the current state are ignored. They
/// come from ordinary UI races (a second click mid-transition, a stray
/// release) rather than programmer error.
#[derive(Debug, Clone)]
pub struct SnapPanel {
	metrics: SnapMetrics,
	thresholds: SnapThresholds,
	duration: Duration,
	state: PanelState,
	open: bool,
	resting: Geometry,
	motion: Motion,
}

impl SnapPanel {
	pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

	/// Create a closed panel with default thresholds and duration.
	#[must_use]
	pub fn new(metrics: SnapMetrics) -> Self {
		Self {
			metrics,
			thresholds: SnapThresholds::default(),
			duration: Self::DEFAULT_DURATION,
			state: PanelState::Closed,
			open: false,
			resting: metrics.snap_zone(PanelState::Closed, false),
			motion: Motion::Idle,
		}
	}

	/// Create a closed panel sized for a viewport of `viewport_height` units.
	#[must_use]
	pub fn from_tuning(viewport_height: f32, tuning: &SheetTuning) -> Self {
		Self::new(SnapMetrics::for_viewport(viewport_height, tuning))
			.with_thresholds(tuning.thresholds)
			.with_duration(tuning.animation)
	}

	#[must_use]
	pub fn with_thresholds(mut self, thresholds: SnapThresholds) -> Self {
		self.thresholds = thresholds;
		self
	}

	#[must_use]
	pub fn with_duration(mut self, duration: Duration) -> Self {
		self.duration = duration;
		self
	}

	#[must_use]
	pub fn state(&self) -> PanelState {
		self.state
	}

	/// The host's open flag as last reported through [`SnapPanel::set_open`].
	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	#[must_use]
	pub fn metrics(&self) -> &SnapMetrics {
		&self.metrics
	}

	#[must_use]
	pub fn duration(&self) -> Duration {
		self.duration
	}

	#[must_use]
	pub fn is_dragging(&self) -> bool {
		matches!(self.motion, Motion::Dragging(_))
	}

	#[must_use]
	pub fn is_animating(&self) -> bool {
		matches!(self.motion, Motion::Animating(_))
	}

	/// Target of the in-flight transition, if any.
	#[must_use]
	pub fn animation_target(&self) -> Option<PanelState> {
		match self.motion {
			Motion::Animating(transition) => Some(transition.target),
			_ => None,
		}
	}

	/// Geometry as rendered at `now`, including mid-animation and drag
	/// positions.
	#[must_use]
	pub fn geometry(&self, now: Instant) -> Geometry {
		match self.motion {
			Motion::Idle => self.resting,
			Motion::Animating(transition) => transition.sample(now),
			Motion::Dragging(session) => session.live,
		}
	}

	/// Height left for the content region after the fixed chrome.
	#[must_use]
	pub fn content_height(&self, now: Instant) -> f32 {
		self.metrics.content_height(self.geometry(now).height)
	}

	/// Whether the panel belongs in the render tree.
	///
	/// A closed panel stays present while the host still has it open or an
	/// animation is in flight, so close animations can run.
	#[must_use]
	pub fn is_present(&self) -> bool {
		self.state.is_open() || self.open || !matches!(self.motion, Motion::Idle)
	}

	/// Mirror the host's open flag.
	///
	/// Opening enters [`PanelState::HalfOpen`] from the current geometry.
	/// Closing animates below the viewport; once the animation completes the
	/// panel leaves the render tree. Repeating the current value does nothing.
	pub fn set_open(&mut self, open: bool, now: Instant) {
		if self.open == open {
			return;
		}
		self.open = open;

		if open {
			self.snap_to(PanelState::HalfOpen, now);
			return;
		}

		if let Motion::Dragging(session) = self.motion {
			self.resting = session.live;
			self.motion = Motion::Idle;
		}
		if self.state.is_open() || self.is_animating() {
			self.snap_to(PanelState::Closed, now);
		} else {
			self.resting = self.metrics.snap_zone(PanelState::Closed, false);
			debug!("panel: host closed a panel that was already at rest");
		}
	}

	/// Close from an explicit UI action (close button, backdrop, Escape).
	///
	/// The close notification is delivered as [`PanelEvent::CloseRequested`]
	/// when the animation settles. A drag in progress is abandoned where the pointer left it.
	pub fn request_close(&mut self, now: Instant) -> bool {
		if !self.open || !self.state.is_open() {
			return false;
		}
		if let Motion::Dragging(session) = self.motion {
			self.resting = session.live;
			self.motion = Motion::Idle;
		}
		self.snap_to(PanelState::Closed, now);
		true
	}

	/// Switch between the half-open and full-open snap points.
	pub fn toggle_expand(&mut self, now: Instant) -> bool {
		if !matches!(self.motion, Motion::Idle) {
			return false;
		}
		let target = match self.state {
			PanelState::HalfOpen => PanelState::FullOpen,
			PanelState::FullOpen => PanelState::HalfOpen,
			PanelState::Closed => return false,
		};
		self.snap_to(target, now);
		true
	}

	/// Begin a drag session at `pointer_y`.
	///
	/// The drag origin is the rendered geometry at `now`, so grabbing the panel
	/// mid-animation does not make it jump. Any in-flight transition is
	/// abandoned without completing.
	pub fn drag_start(&mut self, pointer_y: f32, now: Instant) -> bool {
		if !self.open || !self.state.is_open() || self.is_dragging() {
			return false;
		}
		let origin = self.geometry(now);
		self.motion = Motion::Dragging(DragSession {
			origin_y: pointer_y,
			origin,
			origin_state: self.state,
			live: origin,
		});
		debug!(
			"panel: drag started from {} at height {:.1}, bottom {:.1}",
			self.state.label(),
			origin.height,
			origin.bottom
		);
		true
	}

	/// Track the pointer 1:1 while a drag is in progress.
	pub fn drag_move(&mut self, pointer_y: f32) -> bool {
		let Motion::Dragging(session) = &mut self.motion else {
			return false;
		};
		let delta_y = session.origin_y - pointer_y;
		session.live = drag_geometry(session.origin, delta_y, &self.metrics);
		true
	}

	/// Release the drag and animate to the resolved snap point.
	pub fn drag_end(&mut self, now: Instant) -> Option<PanelState> {
		let Motion::Dragging(session) = mem::replace(&mut self.motion, Motion::Idle) else {
			return None;
		};
		self.resting = session.live;

		let target = if session.has_net_movement() {
			self.thresholds.resolve(session.live, &self.metrics)
		} else {
			session.origin_state
		};
		debug!(
			"panel: drag released at height {:.1}, bottom {:.1} -> {}",
			session.live.height,
			session.live.bottom,
			target.label()
		);
		self.snap_to(target, now);
		Some(target)
	}

	/// Complete the in-flight transition if it is due.
	///
	/// Each transition yields exactly one event. A transition that was
	/// replaced never completes, so it never yields one.
	pub fn tick(&mut self, now: Instant) -> Option<PanelEvent> {
		let Motion::Animating(transition) = self.motion else {
			return None;
		};
		if !transition.is_complete(now) {
			return None;
		}

		self.resting = transition.to;
		self.motion = Motion::Idle;

		if transition.target == PanelState::Closed && self.open {
			debug!("panel: settled closed, requesting host close");
			Some(PanelEvent::CloseRequested)
		} else {
			debug!("panel: settled {}", transition.target.label());
			Some(PanelEvent::Settled(transition.target))
		}
	}

	/// Replace the snap metrics, e.g. after a viewport resize.
	///
	/// Geometry is recomputed from the logical state. An in-flight transition
	/// keeps its progress and heads for the resized zone.
	pub fn set_metrics(&mut self, metrics: SnapMetrics) {
		self.metrics = metrics;
		match &mut self.motion {
			Motion::Idle => {
				self.resting = metrics.snap_zone(self.state, self.open);
			}
			Motion::Animating(transition) => {
				transition.retarget_destination(metrics.snap_zone(transition.target, self.open));
			}
			Motion::Dragging(_) => {}
		}
	}

	/// Start (or redirect) a transition toward `target`.
	///
	/// A transition already heading for `target` only has its destination
	/// refreshed, so re-issuing the same request never restarts the clock.
	fn snap_to(&mut self, target: PanelState, now: Instant) {
		let to = self.metrics.snap_zone(target, self.open);

		if let Motion::Animating(transition) = &mut self.motion
			&& transition.target == target
		{
			transition.retarget_destination(to);
			return;
		}

		let from = self.geometry(now);
		if self.state != target {
			debug!("panel: {} -> {}", self.state.label(), target.label());
		}
		self.state = target;
		self.motion = Motion::Animating(Transition::new(from, to, target, now, self.duration));
	}
}
