/// Text rendered around the storefront and inside the filter sheet.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Accent-coloured half of the brand mark.
	pub brand_accent: String,
	pub brand_rest: String,
	pub tagline: String,
	/// Title of the card table.
	pub list_title: String,
	pub sheet_title: String,
	pub expand_label: String,
	pub collapse_label: String,
	pub reset_label: String,
	pub apply_label: String,
	pub clear_all_label: String,
	pub empty_title: String,
	pub empty_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			brand_accent: "Food".to_string(),
			brand_rest: "Hub".to_string(),
			tagline: "Your favorite meals, delivered fast.".to_string(),
			list_title: "Dishes".to_string(),
			sheet_title: "Filters".to_string(),
			expand_label: "Show more filters".to_string(),
			collapse_label: "Show fewer filters".to_string(),
			reset_label: "Reset".to_string(),
			apply_label: "Apply".to_string(),
			clear_all_label: "Clear all".to_string(),
			empty_title: "No results found".to_string(),
			empty_hint: "Try adjusting your filters, or press c to clear them.".to_string(),
		}
	}
}

impl UiLabels {
	/// Label for the expand toggle given whether the sheet is fully open.
	#[must_use]
	pub fn toggle_label(&self, expanded: bool) -> &str {
		if expanded {
			&self.collapse_label
		} else {
			&self.expand_label
		}
	}
}
