//! Terminal storefront for FoodHub.
//!
//! Lists the menu as cards and hosts the filter bottom sheet, whose motion is
//! driven by [`foodhub_core::SnapPanel`]. The crate bundles the builder, event
//! loop, rendering, themes and the in-app log pane.

mod app;
mod builder;
pub mod components;
mod config;
mod logging;
mod runtime;
pub mod style;

pub use app::{App, Outcome};
pub use builder::Storefront;
pub use config::UiLabels;
pub use logging::init_logging;
pub use runtime::run;

pub use crate::style::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};
