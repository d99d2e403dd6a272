//! Domain crate for the `foodhub` storefront.
//!
//! The [`panel`] module holds the snap panel controller that drives the filter
//! sheet. The remaining modules provide the static catalog, the filter state
//! applied to it, and the adapter that persists that state between runs.

pub mod app_dirs;
pub mod catalog;
pub mod filters;
pub mod panel;
pub mod store;

pub use crate::catalog::{Cuisine, Dietary, FoodItem};
pub use crate::filters::{FilterChip, FilterState, SortOrder};
pub use crate::panel::{
	Geometry, PanelEvent, PanelState, SheetTuning, SnapMetrics, SnapPanel, SnapThresholds,
};
pub use crate::store::{FilterStore, JsonFileStore, MemoryStore, StoreError};
