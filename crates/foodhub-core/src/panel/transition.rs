use std::time::{Duration, Instant};

use super::geometry::{Geometry, PanelState};

/// Cubic ease-out: fast start, gentle settle.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
	let inv = 1.0 - t.clamp(0.0, 1.0);
	1.0 - inv * inv * inv
}

/// A single eased move from one geometry to a snap zone.
///
/// Transitions are sampled against an explicit clock so the controller can be
/// driven deterministically from tests and from the render loop alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
	pub from: Geometry,
	pub to: Geometry,
	pub target: PanelState,
	pub started: Instant,
	pub duration: Duration,
}

impl Transition {
	#[must_use]
	pub fn new(
		from: Geometry,
		to: Geometry,
		target: PanelState,
		started: Instant,
		duration: Duration,
	) -> Self {
		Self {
			from,
			to,
			target,
			started,
			duration,
		}
	}

	/// Linear progress in `0..=1`. A zero duration is complete immediately.
	#[must_use]
	pub fn progress(&self, now: Instant) -> f32 {
		if self.duration.is_zero() {
			return 1.0;
		}
		let elapsed = now.saturating_duration_since(self.started);
		(elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
	}

	#[must_use]
	pub fn is_complete(&self, now: Instant) -> bool {
		self.progress(now) >= 1.0
	}

	/// Eased geometry at `now`.
	#[must_use]
	pub fn sample(&self, now: Instant) -> Geometry {
		let progress = self.progress(now);
		if progress >= 1.0 {
			return self.to;
		}
		Geometry::lerp(self.from, self.to, ease_out_cubic(progress))
	}

	/// Point the transition at a new destination without restarting it.
	pub(crate) fn retarget_destination(&mut self, to: Geometry) {
		self.to = to;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn transition(duration_ms: u64) -> (Transition, Instant) {
		let start = Instant::now();
		let transition = Transition::new(
			Geometry::new(100.0, -100.0),
			Geometry::new(100.0, 0.0),
			PanelState::HalfOpen,
			start,
			Duration::from_millis(duration_ms),
		);
		(transition, start)
	}

	#[test]
	fn easing_is_anchored_at_both_ends() {
		assert_eq!(ease_out_cubic(0.0), 0.0);
		assert_eq!(ease_out_cubic(1.0), 1.0);
		assert!(ease_out_cubic(0.5) > 0.5, "ease-out front-loads motion");
	}

	#[test]
	fn sample_moves_monotonically_toward_target() {
		let (transition, start) = transition(300);
		let mut last = transition.sample(start).bottom;
		for step in 1..=10 {
			let now = start + Duration::from_millis(step * 30);
			let bottom = transition.sample(now).bottom;
			assert!(bottom >= last);
			last = bottom;
		}
		assert_eq!(last, 0.0);
	}

	#[test]
	fn zero_duration_completes_immediately() {
		let (transition, start) = transition(0);
		assert!(transition.is_complete(start));
		assert_eq!(transition.sample(start), Geometry::new(100.0, 0.0));
	}

	#[test]
	fn samples_before_start_stay_at_origin() {
		let (transition, start) = transition(300);
		let earlier = start.checked_sub(Duration::from_millis(5)).unwrap_or(start);
		assert_eq!(transition.sample(earlier), Geometry::new(100.0, -100.0));
	}
}
