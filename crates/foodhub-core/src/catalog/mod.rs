//! Dishes offered by the storefront.

mod data;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use data::builtin;

/// Cuisine a dish is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cuisine {
	Pizza,
	Burgers,
	Sushi,
	Indian,
	Chinese,
	Mexican,
	Italian,
	Thai,
	Desserts,
	Healthy,
}

impl Cuisine {
	/// Every cuisine in display order.
	pub const ALL: [Self; 10] = [
		Self::Pizza,
		Self::Burgers,
		Self::Sushi,
		Self::Indian,
		Self::Chinese,
		Self::Mexican,
		Self::Italian,
		Self::Thai,
		Self::Desserts,
		Self::Healthy,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Pizza => "Pizza",
			Self::Burgers => "Burgers",
			Self::Sushi => "Sushi",
			Self::Indian => "Indian",
			Self::Chinese => "Chinese",
			Self::Mexican => "Mexican",
			Self::Italian => "Italian",
			Self::Thai => "Thai",
			Self::Desserts => "Desserts",
			Self::Healthy => "Healthy",
		}
	}
}

impl fmt::Display for Cuisine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Dietary tag attached to a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dietary {
	Vegetarian,
	Vegan,
	#[serde(rename = "Gluten-Free")]
	GlutenFree,
	Halal,
	Organic,
	Keto,
}

impl Dietary {
	pub const ALL: [Self; 6] = [
		Self::Vegetarian,
		Self::Vegan,
		Self::GlutenFree,
		Self::Halal,
		Self::Organic,
		Self::Keto,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Vegetarian => "Vegetarian",
			Self::Vegan => "Vegan",
			Self::GlutenFree => "Gluten-Free",
			Self::Halal => "Halal",
			Self::Organic => "Organic",
			Self::Keto => "Keto",
		}
	}
}

impl fmt::Display for Dietary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A single dish card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
	pub id: u32,
	pub name: &'static str,
	pub description: &'static str,
	pub price: f64,
	/// Average review score in `0.0..=5.0`.
	pub rating: f64,
	pub cuisine: Cuisine,
	/// Human readable delivery window, e.g. `"25-30 min"`.
	pub delivery_time: &'static str,
	pub dietary: &'static [Dietary],
}

impl FoodItem {
	/// Rating rounded half-up to a whole star count.
	#[must_use]
	pub fn rounded_rating(&self) -> u8 {
		self.rating.round().clamp(0.0, 5.0) as u8
	}

	#[must_use]
	pub fn has_dietary(&self, tag: Dietary) -> bool {
		self.dietary.contains(&tag)
	}
}
