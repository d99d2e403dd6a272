//! Storefront application state and behavior.
//!
//! [`App`] owns the dish list, the filter drafts and the snap panel that drives
//! the filter sheet. Input handling, rendering and the sheet's content model
//! live in the submodules.

mod actions;
mod render;
mod sheet;
mod state;
#[cfg(test)]
mod tests;

pub use state::{App, Outcome};
