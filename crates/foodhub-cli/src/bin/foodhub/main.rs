mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use foodhub_core::{FilterStore, JsonFileStore, MemoryStore};
use foodhub_tui::Storefront;
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in foodhub_tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	foodhub_tui::init_logging(resolved.log_level)?;
	run_storefront(cli.output, resolved)
}

/// Run the storefront and print the applied filters in the chosen format.
fn run_storefront(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let store: Box<dyn FilterStore> = match &settings.state_file {
		Some(path) => Box::new(JsonFileStore::new(path.clone())),
		None => Box::new(MemoryStore::new()),
	};

	let mut storefront = Storefront::new(store).with_tuning(settings.tuning);
	if let Some(theme) = settings.theme.as_deref() {
		storefront = storefront.with_theme_name(theme);
	}
	let outcome = storefront.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
