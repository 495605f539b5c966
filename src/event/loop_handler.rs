use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::api::DexClient;
use crate::app::{handle_input, App, AppEvent};
use crate::cli::CliArgs;
use crate::config::ApiConfig;
use crate::domain::{CatalogEntry, StatAxis, MAX_COMPARE};
use crate::ui;

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Update animations
        app.update();

        // Drain completed background fetches before drawing; stale render
        // generations are dropped inside apply_event.
        while let Ok(message) = events.try_recv() {
            app.apply_event(message);
        }

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }
    }
    Ok(())
}

/// Run a one-shot comparison without a UI (no TTY, or `--headless`).
pub async fn run_headless(args: &CliArgs) -> Result<()> {
    let config = ApiConfig::from_env()?;
    let client = DexClient::new(config);

    if args.compare.is_empty() {
        return Err(eyre!(
            "headless mode needs --compare <name,name,...> (up to {MAX_COMPARE})"
        ));
    }
    if args.compare.len() > MAX_COMPARE {
        return Err(eyre!(
            "at most {MAX_COMPARE} creatures can be compared, got {}",
            args.compare.len()
        ));
    }

    let catalog = client.fetch_catalog().await?;
    let picked = resolve_names(&catalog, &args.compare)?;
    let vectors = client.fetch_all_attributes(&picked).await?;

    let comparison = HeadlessComparison {
        axes: StatAxis::ALL.iter().map(|axis| axis.as_str()).collect(),
        series: vectors
            .into_iter()
            .map(|vector| HeadlessSeries {
                values: vector.stats.iter().map(|(_, value)| *value).collect(),
                name: vector.entity_name,
            })
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print_comparison_table(&comparison);
    }

    Ok(())
}

fn resolve_names(catalog: &[CatalogEntry], names: &[String]) -> Result<Vec<CatalogEntry>> {
    let mut picked: Vec<CatalogEntry> = Vec::with_capacity(names.len());

    for name in names {
        let needle = name.trim().to_lowercase();
        let entry = catalog
            .iter()
            .find(|entry| entry.name == needle)
            .ok_or_else(|| eyre!("unknown creature: {name}"))?;

        if picked.iter().any(|held| held.id == entry.id) {
            return Err(eyre!("duplicate creature: {name}"));
        }
        picked.push(entry.clone());
    }

    Ok(picked)
}

fn print_comparison_table(comparison: &HeadlessComparison) {
    println!("\nBase Stat Comparison");
    println!("====================");

    let name_width = comparison
        .series
        .iter()
        .map(|series| series.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    print!("{:<name_width$}", "name");
    for axis in &comparison.axes {
        print!("  {axis:>15}");
    }
    println!();

    for series in &comparison.series {
        print!("{:<name_width$}", series.name);
        for value in &series.values {
            print!("  {value:>15}");
        }
        println!();
    }
}

#[derive(serde::Serialize)]
struct HeadlessComparison {
    axes: Vec<&'static str>,
    series: Vec<HeadlessSeries>,
}

#[derive(serde::Serialize)]
struct HeadlessSeries {
    name: String,
    values: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new(1, "bulbasaur", "u1"),
            CatalogEntry::new(2, "charmander", "u2"),
        ]
    }

    #[test]
    fn resolve_names_is_case_insensitive() {
        let picked = resolve_names(&catalog(), &["Bulbasaur".to_string()]).unwrap();
        assert_eq!(picked[0].id, 1);
    }

    #[test]
    fn resolve_names_rejects_unknown_and_duplicate() {
        assert!(resolve_names(&catalog(), &["mew".to_string()]).is_err());
        assert!(resolve_names(
            &catalog(),
            &["bulbasaur".to_string(), "bulbasaur".to_string()]
        )
        .is_err());
    }
}
