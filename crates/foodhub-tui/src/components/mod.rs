//! UI building blocks shared by the storefront renderer.

/// Dish cards drawn as a two-line table.
pub mod cards;
/// Active filter chip bar.
pub mod chips;
pub mod rating;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Bottom sheet chrome and placement.
pub mod sheet;

pub use cards::{CardsLayout, card_at, render_cards, render_empty};
pub use chips::{ChipBarLayout, render_chip_bar};
pub use rating::{star_at, stars};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use sheet::{Placement, SHEET_CHROME_ROWS, SheetRegions, SheetView, content_width};
