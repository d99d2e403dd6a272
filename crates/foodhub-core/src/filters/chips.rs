use std::fmt;

use super::{DEFAULT_PRICE_MAX, FilterState, SortOrder};
use crate::catalog::{Cuisine, Dietary};

/// One active filter as shown in the chip bar above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChip {
	Rating(u8),
	Cuisine(Cuisine),
	Dietary(Dietary),
	PriceUnder(u32),
	Sort(SortOrder),
}

impl FilterChip {
	#[must_use]
	pub fn label(&self) -> String {
		match self {
			Self::Rating(stars) => format!("{stars}+ stars"),
			Self::Cuisine(cuisine) => cuisine.label().to_string(),
			Self::Dietary(tag) => tag.label().to_string(),
			Self::PriceUnder(price) => format!("Under ${price}"),
			Self::Sort(order) => order.label().to_string(),
		}
	}
}

impl fmt::Display for FilterChip {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label())
	}
}

impl FilterState {
	/// Active filters in chip bar order.
	#[must_use]
	pub fn chips(&self) -> Vec<FilterChip> {
		let mut chips = Vec::new();
		if self.selected_rating > 0 {
			chips.push(FilterChip::Rating(self.selected_rating));
		}
		chips.extend(self.selected_cuisines.iter().copied().map(FilterChip::Cuisine));
		chips.extend(self.selected_dietary.iter().copied().map(FilterChip::Dietary));
		if self.price_max < DEFAULT_PRICE_MAX {
			chips.push(FilterChip::PriceUnder(self.price_max));
		}
		if self.sort_by != SortOrder::Popular {
			chips.push(FilterChip::Sort(self.sort_by));
		}
		chips
	}

	#[must_use]
	pub fn has_active_filters(&self) -> bool {
		!self.chips().is_empty()
	}

	/// Clear the filter a chip stands for.
	pub fn remove_chip(&mut self, chip: FilterChip) {
		match chip {
			FilterChip::Rating(_) => self.selected_rating = 0,
			FilterChip::Cuisine(cuisine) => self.selected_cuisines.retain(|c| *c != cuisine),
			FilterChip::Dietary(tag) => self.selected_dietary.retain(|d| *d != tag),
			FilterChip::PriceUnder(_) => self.price_max = DEFAULT_PRICE_MAX,
			FilterChip::Sort(_) => self.sort_by = SortOrder::Popular,
		}
	}
}
