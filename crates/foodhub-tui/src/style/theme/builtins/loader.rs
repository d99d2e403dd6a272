use std::str::FromStr;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

/// One `themes/*.toml` document.
#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleEntry,
	row_highlight: StyleEntry,
	accent: StyleEntry,
	rating: StyleEntry,
	muted: StyleEntry,
	chip: StyleEntry,
	sheet: StyleEntry,
	focus: StyleEntry,
	button: StyleEntry,
	backdrop: StyleEntry,
	empty: StyleEntry,
}

impl From<ThemeStyles> for Theme {
	fn from(styles: ThemeStyles) -> Self {
		Self {
			header: styles.header.0,
			row_highlight: styles.row_highlight.0,
			accent: styles.accent.0,
			rating: styles.rating.0,
			muted: styles.muted.0,
			chip: styles.chip.0,
			sheet: styles.sheet.0,
			focus: styles.focus.0,
			button: styles.button.0,
			backdrop: styles.backdrop.0,
			empty: styles.empty.0,
		}
	}
}

/// A `[styles.*]` table, validated while deserializing so errors point at the
/// offending table.
#[derive(Debug)]
struct StyleEntry(Style);

impl<'de> Deserialize<'de> for StyleEntry {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(deny_unknown_fields)]
		struct Fields {
			fg: Option<String>,
			bg: Option<String>,
			#[serde(default)]
			modifiers: Vec<String>,
		}

		let fields = Fields::deserialize(deserializer)?;
		let mut style = Style::new();
		if let Some(fg) = fields.fg {
			style = style.fg(colour(&fg).map_err(serde::de::Error::custom)?);
		}
		if let Some(bg) = fields.bg {
			style = style.bg(colour(&bg).map_err(serde::de::Error::custom)?);
		}
		for name in &fields.modifiers {
			style = style.add_modifier(modifier(name).map_err(serde::de::Error::custom)?);
		}
		Ok(Self(style))
	}
}

/// Names (`dark gray`), indexes (`42`) and `#rrggbb` hex.
fn colour(value: &str) -> Result<Color> {
	Color::from_str(value.trim()).map_err(|_| anyhow::anyhow!("unknown colour `{value}`"))
}

fn modifier(value: &str) -> Result<Modifier> {
	Ok(match value.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reverse" | "reversed" => Modifier::REVERSED,
		"crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
		other => bail!("unknown modifier `{other}`"),
	})
}

fn parse_file(file: &File) -> Result<ThemeFile> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{} is not valid UTF-8", path.display()))?;
	toml::from_str(contents).with_context(|| format!("invalid theme file {}", path.display()))
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations: Vec<ThemeRegistration> = Vec::with_capacity(files.len());
	let mut default_index: Option<usize> = None;
	for file in files {
		let parsed = parse_file(file)?;
		if parsed.default {
			if let Some(previous) = default_index {
				bail!(
					"both `{}` and `{}` are marked as the default theme",
					registrations[previous].name,
					parsed.name
				);
			}
			default_index = Some(registrations.len());
		}
		let registration = parsed
			.aliases
			.iter()
			.map(|alias| alias.trim())
			.filter(|alias| !alias.is_empty())
			.fold(
				ThemeRegistration::new(parsed.name, parsed.styles.into()),
				ThemeRegistration::alias,
			);
		registrations.push(registration);
	}

	let Some(default_theme) = registrations
		.get(default_index.unwrap_or(0))
		.map(|registration| registration.theme)
	else {
		bail!("no theme files are bundled");
	};

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const MINIMAL_STYLES: &str = r##"
[styles.row_highlight]
[styles.accent]
[styles.rating]
[styles.muted]
[styles.chip]
[styles.sheet]
[styles.focus]
[styles.button]
[styles.backdrop]
[styles.empty]
"##;

	#[test]
	fn colours_accept_names_indexes_and_hex() {
		assert_eq!(colour("#1a1b26").unwrap(), Color::Rgb(0x1a, 0x1b, 0x26));
		assert_eq!(colour("42").unwrap(), Color::Indexed(42));
		assert_eq!(colour("yellow").unwrap(), Color::Yellow);
		assert!(colour("chartreuse").is_err());
	}

	#[test]
	fn modifiers_ignore_case_and_separators() {
		assert_eq!(modifier("Bold").unwrap(), Modifier::BOLD);
		assert_eq!(modifier("crossed-out").unwrap(), Modifier::CROSSED_OUT);
		assert!(modifier("sparkle").is_err());
	}

	#[test]
	fn bad_colour_is_reported_with_its_value() {
		let document = format!(
			"name = \"broken\"\n[styles.header]\nfg = \"#zzzzzz\"\n{MINIMAL_STYLES}"
		);
		let error = toml::from_str::<ThemeFile>(&document).unwrap_err();
		let message = error.to_string();
		assert!(message.contains("unknown colour `#zzzzzz`"), "{message}");
	}

	#[test]
	fn unknown_style_keys_are_rejected() {
		let document = format!("name = \"typo\"\n[styles.header]\nfgg = \"red\"\n{MINIMAL_STYLES}");
		assert!(toml::from_str::<ThemeFile>(&document).is_err());
	}
}
