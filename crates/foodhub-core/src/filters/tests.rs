use super::*;
use crate::catalog::builtin;

fn ids(items: &[&FoodItem]) -> Vec<u32> {
	items.iter().map(|item| item.id).collect()
}

#[test]
fn defaults_hide_only_dishes_above_fifty_dollars() {
	let state = FilterState::default();
	let visible = state.apply(builtin());
	assert_eq!(visible.len(), builtin().len() - 1);
	assert!(visible.iter().all(|item| item.price <= 50.0));
	assert!(!state.has_active_filters());
}

#[test]
fn popular_orders_by_rating_and_keeps_ties_stable() {
	let visible = FilterState::default().apply(builtin());
	assert_eq!(visible[0].name, "Chocolate Lava Cake");
	for pair in visible.windows(2) {
		assert!(pair[0].rating >= pair[1].rating);
		if pair[0].rating == pair[1].rating {
			assert!(pair[0].id < pair[1].id, "ties keep catalog order");
		}
	}
}

#[test]
fn price_sorts_in_both_directions() {
	let mut state = FilterState {
		sort_by: SortOrder::PriceAsc,
		..FilterState::default()
	};
	let ascending = state.apply(builtin());
	assert_eq!(ascending[0].name, "Mango Sticky Rice");
	assert!(ascending.windows(2).all(|p| p[0].price <= p[1].price));

	state.sort_by = SortOrder::PriceDesc;
	let descending = state.apply(builtin());
	assert!(descending.windows(2).all(|p| p[0].price >= p[1].price));
}

#[test]
fn rating_filter_uses_rounded_stars() {
	let mut state = FilterState::default();
	state.set_rating(5);
	let visible = state.apply(builtin());
	assert!(visible.iter().any(|item| item.name == "Margherita Pizza"), "4.5 rounds up");
	assert!(visible.iter().all(|item| item.rating >= 4.5));
}

#[test]
fn cuisines_are_alternatives_and_dietary_tags_are_all_required() {
	let mut state = FilterState::default();
	state.toggle_cuisine(Cuisine::Pizza);
	state.toggle_cuisine(Cuisine::Desserts);
	assert_eq!(ids(&state.apply(builtin())), vec![8, 1, 19, 9]);

	state.toggle_dietary(Dietary::Vegetarian);
	state.toggle_dietary(Dietary::Vegan);
	assert_eq!(ids(&state.apply(builtin())), vec![19]);
}

#[test]
fn no_match_yields_an_empty_list() {
	let mut state = FilterState::default();
	state.toggle_cuisine(Cuisine::Burgers);
	state.toggle_dietary(Dietary::Keto);
	assert!(state.apply(builtin()).is_empty());
}

#[test]
fn toggles_add_then_remove_preserving_order() {
	let mut state = FilterState::default();
	state.toggle_cuisine(Cuisine::Thai);
	state.toggle_cuisine(Cuisine::Sushi);
	state.toggle_cuisine(Cuisine::Indian);
	state.toggle_cuisine(Cuisine::Sushi);
	assert_eq!(state.selected_cuisines, vec![Cuisine::Thai, Cuisine::Indian]);

	state.toggle_rating(4);
	assert_eq!(state.selected_rating, 4);
	state.toggle_rating(4);
	assert_eq!(state.selected_rating, 0);
}

#[test]
fn sliders_clamp_to_their_ranges() {
	let mut state = FilterState::default();
	state.adjust_price(-80);
	assert_eq!(state.price_max, 0);
	state.adjust_price(250);
	assert_eq!(state.price_max, PRICE_LIMIT);
	state.set_price_max(500);
	assert_eq!(state.price_max, PRICE_LIMIT);
	state.set_rating(9);
	assert_eq!(state.selected_rating, MAX_RATING);
}

#[test]
fn chips_follow_bar_order() {
	let mut state = FilterState::default();
	state.sort_by = SortOrder::RatingDesc;
	state.set_price_max(20);
	state.toggle_dietary(Dietary::Vegan);
	state.toggle_cuisine(Cuisine::Mexican);
	state.set_rating(4);

	let labels: Vec<String> = state.chips().iter().map(FilterChip::label).collect();
	assert_eq!(
		labels,
		vec!["4+ stars", "Mexican", "Vegan", "Under $20", "Highest Rated"]
	);
}

#[test]
fn price_chip_only_appears_below_the_default() {
	let mut state = FilterState::default();
	state.set_price_max(80);
	assert!(state.chips().is_empty());
	state.set_price_max(49);
	assert_eq!(state.chips(), vec![FilterChip::PriceUnder(49)]);
}

#[test]
fn removing_every_chip_restores_defaults() {
	let mut state = FilterState::default();
	state.set_rating(3);
	state.toggle_cuisine(Cuisine::Chinese);
	state.toggle_dietary(Dietary::Halal);
	state.set_price_max(10);
	state.sort_by = SortOrder::PriceAsc;

	for chip in state.chips() {
		state.remove_chip(chip);
	}
	assert_eq!(state, FilterState::default());
}

#[test]
fn reset_restores_defaults() {
	let mut state = FilterState::default();
	state.toggle_cuisine(Cuisine::Italian);
	state.set_price_max(5);
	state.reset();
	assert_eq!(state, FilterState::default());
}

#[test]
fn sort_order_cycles() {
	assert_eq!(SortOrder::Popular.next(), SortOrder::PriceAsc);
	assert_eq!(SortOrder::RatingDesc.next(), SortOrder::Popular);
	assert_eq!(SortOrder::Popular.prev(), SortOrder::RatingDesc);
}

#[test]
fn serializes_with_storefront_keys() {
	let mut state = FilterState::default();
	state.toggle_dietary(Dietary::GlutenFree);
	state.sort_by = SortOrder::PriceDesc;

	let json = serde_json::to_value(&state).unwrap();
	assert_eq!(
		json,
		serde_json::json!({
			"priceMax": 50,
			"selectedRating": 0,
			"selectedCuisines": [],
			"selectedDietary": ["Gluten-Free"],
			"sortBy": "price_desc"
		})
	);
}

#[test]
fn partial_documents_fill_in_defaults() {
	let state: FilterState = serde_json::from_str(r#"{"selectedCuisines":["Sushi"]}"#).unwrap();
	assert_eq!(state.selected_cuisines, vec![Cuisine::Sushi]);
	assert_eq!(state.price_max, DEFAULT_PRICE_MAX);
	assert_eq!(state.sort_by, SortOrder::Popular);
}

#[test]
fn normalized_clamps_and_dedups() {
	let state: FilterState = serde_json::from_str(
		r#"{"priceMax":400,"selectedRating":8,"selectedCuisines":["Thai","Pizza","Thai"]}"#,
	)
	.unwrap();
	let state = state.normalized();
	assert_eq!(state.price_max, PRICE_LIMIT);
	assert_eq!(state.selected_rating, MAX_RATING);
	assert_eq!(state.selected_cuisines, vec![Cuisine::Thai, Cuisine::Pizza]);
}
