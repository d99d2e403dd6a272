use std::fmt::Write;

use anyhow::Result;
use foodhub_core::{FoodItem, catalog};
use foodhub_tui::Outcome;
use serde_json::json;

fn listed(outcome: &Outcome) -> Vec<&'static FoodItem> {
	let menu = catalog::builtin();
	outcome
		.visible
		.iter()
		.filter_map(|id| menu.iter().find(|item| item.id == *id))
		.collect()
}

/// Plain-text summary of the applied filters and the dishes they list.
pub(crate) fn format_plain(outcome: &Outcome) -> String {
	let chips: Vec<String> = outcome
		.applied
		.chips()
		.iter()
		.map(|chip| chip.label())
		.collect();
	let filters = if chips.is_empty() {
		"none".to_string()
	} else {
		chips.join(", ")
	};

	let mut out = String::new();
	let _ = writeln!(out, "Filters: {filters}");
	let _ = writeln!(out, "Sort: {}", outcome.applied.sort_by.label());
	let dishes = listed(outcome);
	let _ = writeln!(out, "Dishes ({}):", dishes.len());
	for item in dishes {
		let _ = writeln!(
			out,
			"  {:>3}  {:<28} ${:>6.2}  {:.1}  {}",
			item.id, item.name, item.price, item.rating, item.cuisine
		);
	}
	out
}

pub(crate) fn print_plain(outcome: &Outcome) {
	print!("{}", format_plain(outcome));
}

/// Format the outcome as pretty JSON: the saved filter document, the chip
/// labels and the listed dishes.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let chips: Vec<String> = outcome
		.applied
		.chips()
		.iter()
		.map(|chip| chip.label())
		.collect();
	let payload = json!({
		"filters": outcome.applied,
		"chips": chips,
		"dishes": listed(outcome),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use foodhub_core::{Cuisine, FilterState};
	use serde_json::Value;

	use super::*;

	fn pizza_outcome() -> Outcome {
		let mut applied = FilterState::default();
		applied.toggle_cuisine(Cuisine::Pizza);
		let visible = applied
			.apply(catalog::builtin())
			.iter()
			.map(|item| item.id)
			.collect();
		Outcome { applied, visible }
	}

	#[test]
	fn plain_output_lists_filters_and_dishes() {
		let text = format_plain(&pizza_outcome());
		assert!(text.starts_with("Filters: Pizza\nSort: Most Popular\nDishes (2):\n"));
		assert!(text.contains("Margherita Pizza"));
		assert!(text.contains("Pepperoni Feast"));
	}

	#[test]
	fn plain_output_without_filters() {
		let outcome = Outcome {
			applied: FilterState::default(),
			visible: Vec::new(),
		};
		assert!(format_plain(&outcome).starts_with("Filters: none\n"));
	}

	#[test]
	fn json_output_uses_the_saved_document_keys() {
		let json = format_outcome_json(&pizza_outcome()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["filters"]["priceMax"], 50);
		assert_eq!(value["filters"]["selectedCuisines"][0], "Pizza");
		assert_eq!(value["filters"]["sortBy"], "popular");
		assert_eq!(value["chips"][0], "Pizza");
		assert_eq!(value["dishes"][0]["name"], "Margherita Pizza");
		assert_eq!(value["dishes"].as_array().map(Vec::len), Some(2));
	}
}
