//! Filter selection applied to the catalog.
//!
//! [`FilterState`] is the serializable record the sheet edits and the store
//! persists. [`FilterState::apply`] turns it into the visible list.

mod chips;
#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::{Cuisine, Dietary, FoodItem};

pub use chips::FilterChip;

/// Maximum value of the price slider, in dollars.
pub const PRICE_LIMIT: u32 = 100;
/// Slider position that counts as "no price filter".
pub const DEFAULT_PRICE_MAX: u32 = 50;
/// Highest selectable star rating.
pub const MAX_RATING: u8 = 5;

/// Ordering of the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
	/// Most popular first. Popularity is approximated by rating.
	#[default]
	Popular,
	PriceAsc,
	PriceDesc,
	RatingDesc,
}

impl SortOrder {
	pub const ALL: [Self; 4] = [Self::Popular, Self::PriceAsc, Self::PriceDesc, Self::RatingDesc];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Popular => "Most Popular",
			Self::PriceAsc => "Price: Low to High",
			Self::PriceDesc => "Price: High to Low",
			Self::RatingDesc => "Highest Rated",
		}
	}

	#[must_use]
	pub fn next(self) -> Self {
		let index = Self::ALL.iter().position(|order| *order == self).unwrap_or(0);
		Self::ALL[(index + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn prev(self) -> Self {
		let index = Self::ALL.iter().position(|order| *order == self).unwrap_or(0);
		Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
	}

	fn compare(self, a: &FoodItem, b: &FoodItem) -> Ordering {
		match self {
			Self::PriceAsc => a.price.total_cmp(&b.price),
			Self::PriceDesc => b.price.total_cmp(&a.price),
			Self::Popular | Self::RatingDesc => b.rating.total_cmp(&a.rating),
		}
	}
}

/// The user's filter selection.
///
/// Serialized with the camelCase keys the storefront has always written, so
/// previously saved selections keep loading. Missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
	pub price_max: u32,
	/// Minimum whole-star rating; `0` disables the filter.
	pub selected_rating: u8,
	pub selected_cuisines: Vec<Cuisine>,
	pub selected_dietary: Vec<Dietary>,
	pub sort_by: SortOrder,
}

impl Default for FilterState {
	fn default() -> Self {
		Self {
			price_max: DEFAULT_PRICE_MAX,
			selected_rating: 0,
			selected_cuisines: Vec::new(),
			selected_dietary: Vec::new(),
			sort_by: SortOrder::Popular,
		}
	}
}

impl FilterState {
	pub fn set_price_max(&mut self, price_max: u32) {
		self.price_max = price_max.min(PRICE_LIMIT);
	}

	/// Move the price slider by a signed step, staying within its range.
	pub fn adjust_price(&mut self, step: i32) {
		let next = i64::from(self.price_max) + i64::from(step);
		self.price_max = next.clamp(0, i64::from(PRICE_LIMIT)) as u32;
	}

	pub fn set_rating(&mut self, rating: u8) {
		self.selected_rating = rating.min(MAX_RATING);
	}

	/// Select `rating`, or clear the rating filter if it is already selected.
	pub fn toggle_rating(&mut self, rating: u8) {
		if self.selected_rating == rating {
			self.selected_rating = 0;
		} else {
			self.set_rating(rating);
		}
	}

	pub fn toggle_cuisine(&mut self, cuisine: Cuisine) {
		toggle(&mut self.selected_cuisines, cuisine);
	}

	pub fn toggle_dietary(&mut self, tag: Dietary) {
		toggle(&mut self.selected_dietary, tag);
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Bring a deserialized record back within the slider ranges.
	#[must_use]
	pub fn normalized(mut self) -> Self {
		self.set_price_max(self.price_max);
		self.set_rating(self.selected_rating);
		dedup_in_order(&mut self.selected_cuisines);
		dedup_in_order(&mut self.selected_dietary);
		self
	}

	#[must_use]
	pub fn matches(&self, item: &FoodItem) -> bool {
		if item.price > f64::from(self.price_max) {
			return false;
		}
		if self.selected_rating > 0 && item.rounded_rating() < self.selected_rating {
			return false;
		}
		if !self.selected_cuisines.is_empty() && !self.selected_cuisines.contains(&item.cuisine) {
			return false;
		}
		self.selected_dietary.iter().all(|tag| item.has_dietary(*tag))
	}

	/// Filter and sort `items`. Ties keep their catalog order.
	#[must_use]
	pub fn apply<'a>(&self, items: &'a [FoodItem]) -> Vec<&'a FoodItem> {
		let mut visible: Vec<&FoodItem> = items.iter().filter(|item| self.matches(item)).collect();
		visible.sort_by(|a, b| self.sort_by.compare(a, b));
		visible
	}
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
	if let Some(index) = values.iter().position(|existing| *existing == value) {
		values.remove(index);
	} else {
		values.push(value);
	}
}

fn dedup_in_order<T: PartialEq + Copy>(values: &mut Vec<T>) {
	let mut seen = Vec::with_capacity(values.len());
	values.retain(|value| {
		if seen.contains(value) {
			false
		} else {
			seen.push(*value);
			true
		}
	});
}
