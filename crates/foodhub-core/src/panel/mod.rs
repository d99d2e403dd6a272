//! Draggable snap panel with three discrete resting states.
//!
//! The panel is split into pure pieces and the stateful controller:
//! [`geometry`] maps logical states to snap zones and classifies a release
//! position, [`transition`] interpolates between geometries over a fixed
//! duration, and [`controller`] owns the state machine that ties gestures,
//! the host's open flag, and transitions together.

mod controller;
mod geometry;
mod transition;


pub use controller::{PanelEvent, SnapPanel};
pub use geometry::{
	Geometry, PanelState, SheetTuning, SnapMetrics, SnapThresholds, drag_geometry,
};
pub use transition::{Transition, ease_out_cubic};
