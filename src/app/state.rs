use std::time::Instant;

use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::api::ApiError;
use crate::app::actions::AppActions;
use crate::app::filter::filter_catalog;
use crate::app::selection::{Selection, ToggleOutcome};
use crate::chart::{build_dataset, ChartData};
use crate::domain::{AttributeVector, CatalogEntry, MAX_COMPARE};

/// What the chart area is currently showing. Re-entered from any state on
/// every toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// Fetches in flight (catalog at startup, or stats after a toggle).
    Loading,
    /// Nothing selected; idle placeholder.
    Idle,
    /// Chart on screen.
    Populated,
    /// Last render failed; chart cleared, error shown.
    Failed,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Browse,
    Help,
}

/// Completed background work, tagged so stale results can be dropped.
#[derive(Debug)]
pub enum AppEvent {
    CatalogLoaded(Result<Vec<CatalogEntry>, ApiError>),
    RenderReady {
        generation: u64,
        result: Result<Vec<AttributeVector>, ApiError>,
    },
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub actions: AppActions,

    pub catalog: Vec<CatalogEntry>,
    pub filtered: Vec<CatalogEntry>,
    pub search_input: String,
    pub list_index: usize,

    pub selection: Selection,
    /// The single live chart. Installing a new one drops the old one.
    pub chart: Option<ChartData>,
    pub phase: RenderPhase,
    /// Bumped on every render start; outcomes carrying an older generation
    /// are stale and must not touch the chart.
    pub render_generation: u64,

    pub status_message: String,
    pub capacity_warning: bool,

    pub throbber: ThrobberState,
    pub animation_counter: f64,
    pub last_frame: Instant,

    event_tx: UnboundedSender<AppEvent>,
}

impl App {
    /// Builds the app state plus the receiving end of its event channel,
    /// which the event loop polls for completed fetches.
    pub fn new(actions: AppActions) -> (Self, UnboundedReceiver<AppEvent>) {
        let (event_tx, event_rx) = unbounded_channel();

        let app = Self {
            running: true,
            screen: AppScreen::Browse,
            actions,
            catalog: Vec::new(),
            filtered: Vec::new(),
            search_input: String::new(),
            list_index: 0,
            selection: Selection::new(),
            chart: None,
            phase: RenderPhase::Loading,
            render_generation: 0,
            status_message: String::new(),
            capacity_warning: false,
            throbber: ThrobberState::default(),
            animation_counter: 0.0,
            last_frame: Instant::now(),
            event_tx,
        };

        (app, event_rx)
    }

    /// Advances the frame clock for the cursor blink and the throbber.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.phase == RenderPhase::Loading {
            self.throbber.calc_next();
        }
    }

    /// Kicks off the one-shot catalog fetch on a background task.
    pub fn start_catalog_load(&mut self) {
        self.phase = RenderPhase::Loading;
        self.status_message = "Loading catalog...".to_string();

        let actions = self.actions.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = actions.load_catalog().await;
            let _ = tx.send(AppEvent::CatalogLoaded(result));
        });
    }

    /// Recomputes the visible list from the current search term and keeps
    /// the cursor inside it.
    pub fn apply_filter(&mut self) {
        self.filtered = filter_catalog(&self.catalog, &self.search_input);
        if self.list_index >= self.filtered.len() {
            self.list_index = self.filtered.len().saturating_sub(1);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.filtered.is_empty() {
            self.list_index = 0;
            return;
        }

        let last = self.filtered.len() - 1;
        let next = self.list_index.saturating_add_signed(delta);
        self.list_index = next.min(last);
    }

    pub fn cursor_to_start(&mut self) {
        self.list_index = 0;
    }

    pub fn cursor_to_end(&mut self) {
        self.list_index = self.filtered.len().saturating_sub(1);
    }

    pub fn entry_under_cursor(&self) -> Option<&CatalogEntry> {
        self.filtered.get(self.list_index)
    }

    /// Toggles the highlighted entry in or out of the comparison. Every
    /// successful toggle re-renders the whole current selection.
    pub fn toggle_under_cursor(&mut self) {
        let Some(entry) = self.entry_under_cursor().cloned() else {
            return;
        };

        match self.selection.toggle(&entry) {
            ToggleOutcome::Added | ToggleOutcome::Removed => {
                self.status_message.clear();
                self.start_render();
            }
            ToggleOutcome::Rejected => {
                self.capacity_warning = true;
                self.status_message =
                    format!("Comparison is full ({MAX_COMPARE} of {MAX_COMPARE})");
            }
        }
    }

    /// Starts a render of the entire current selection. Each call
    /// invalidates any still-running render by bumping the generation.
    pub fn start_render(&mut self) {
        self.render_generation += 1;

        if self.selection.is_empty() {
            self.chart = None;
            self.phase = RenderPhase::Idle;
            return;
        }

        self.phase = RenderPhase::Loading;

        let generation = self.render_generation;
        let entries = self.selection.entries().to_vec();
        let actions = self.actions.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = actions.fetch_selection(&entries).await;
            let _ = tx.send(AppEvent::RenderReady { generation, result });
        });
    }

    /// Applies a completed background fetch. Stale render generations are
    /// dropped without touching the chart.
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CatalogLoaded(Ok(catalog)) => {
                self.status_message = format!("Loaded {} creatures", catalog.len());
                self.catalog = catalog;
                self.apply_filter();
                self.phase = RenderPhase::Idle;
            }
            AppEvent::CatalogLoaded(Err(error)) => {
                self.status_message = format!("Error: catalog fetch failed: {error}");
                self.phase = RenderPhase::Idle;
            }
            AppEvent::RenderReady { generation, result } => {
                if generation != self.render_generation {
                    return;
                }

                match result {
                    Ok(vectors) => {
                        self.chart = Some(build_dataset(&vectors));
                        self.phase = RenderPhase::Populated;
                    }
                    Err(error) => {
                        self.chart = None;
                        self.phase = RenderPhase::Failed;
                        self.status_message = format!("Error: stat fetch failed: {error}");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DexClient;
    use crate::config::ApiConfig;
    use crate::domain::StatAxis;

    fn test_app() -> App {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:0".to_string(),
            sprite_base_url: "http://127.0.0.1:0".to_string(),
            catalog_limit: 3,
        };
        let (mut app, _rx) = App::new(AppActions::new(DexClient::new(config)));
        app.catalog = vec![
            CatalogEntry::new(1, "bulbasaur", "u1"),
            CatalogEntry::new(2, "charmander", "u2"),
            CatalogEntry::new(3, "squirtle", "u3"),
        ];
        app.apply_filter();
        app.phase = RenderPhase::Idle;
        app
    }

    fn vector(name: &str) -> AttributeVector {
        AttributeVector {
            entity_name: name.to_string(),
            stats: StatAxis::ALL.iter().map(|axis| (*axis, 50)).collect(),
        }
    }

    #[test]
    fn empty_selection_render_skips_the_chart_path() {
        let mut app = test_app();
        app.chart = Some(build_dataset(&[vector("bulbasaur")]));
        app.phase = RenderPhase::Populated;

        app.start_render();

        assert!(app.chart.is_none());
        assert_eq!(app.phase, RenderPhase::Idle);
    }

    #[test]
    fn stale_render_outcome_is_dropped() {
        let mut app = test_app();
        app.render_generation = 5;

        app.apply_event(AppEvent::RenderReady {
            generation: 4,
            result: Ok(vec![vector("bulbasaur")]),
        });

        assert!(app.chart.is_none());
        assert_eq!(app.phase, RenderPhase::Idle);
    }

    #[test]
    fn current_render_outcome_populates_the_chart() {
        let mut app = test_app();
        app.render_generation = 2;

        app.apply_event(AppEvent::RenderReady {
            generation: 2,
            result: Ok(vec![vector("bulbasaur"), vector("charmander")]),
        });

        let chart = app.chart.as_ref().unwrap();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(app.phase, RenderPhase::Populated);
    }

    #[test]
    fn failed_render_clears_the_chart_and_surfaces_the_error() {
        let mut app = test_app();
        app.chart = Some(build_dataset(&[vector("bulbasaur")]));
        app.render_generation = 1;

        app.apply_event(AppEvent::RenderReady {
            generation: 1,
            result: Err(crate::api::ApiError::Payload {
                url: "u2".to_string(),
                reason: "missing stat hp".to_string(),
            }),
        });

        assert!(app.chart.is_none());
        assert_eq!(app.phase, RenderPhase::Failed);
        assert!(app.status_message.starts_with("Error"));
    }

    #[test]
    fn catalog_failure_leaves_the_catalog_empty() {
        let mut app = test_app();
        app.catalog.clear();
        app.apply_filter();

        app.apply_event(AppEvent::CatalogLoaded(Err(
            crate::api::ApiError::Payload {
                url: "c".to_string(),
                reason: "not json".to_string(),
            },
        )));

        assert!(app.catalog.is_empty());
        assert_eq!(app.phase, RenderPhase::Idle);
        assert!(app.status_message.starts_with("Error"));
    }

    #[test]
    fn filter_keystrokes_keep_the_cursor_in_range() {
        let mut app = test_app();
        app.cursor_to_end();
        assert_eq!(app.list_index, 2);

        app.search_input.push_str("bulb");
        app.apply_filter();

        assert_eq!(app.filtered.len(), 1);
        assert_eq!(app.list_index, 0);
    }

    #[tokio::test]
    async fn capacity_rejection_raises_the_warning_without_render() {
        let mut app = test_app();
        app.catalog = (1..=7)
            .map(|id| CatalogEntry::new(id, format!("mon-{id}"), format!("u{id}")))
            .collect();
        app.apply_filter();

        for index in 0..6 {
            app.list_index = index;
            app.toggle_under_cursor();
        }
        assert_eq!(app.selection.len(), 6);
        let generation = app.render_generation;

        app.list_index = 6;
        app.toggle_under_cursor();

        assert_eq!(app.selection.len(), 6);
        assert!(app.capacity_warning);
        // Rejected toggles do not start a render.
        assert_eq!(app.render_generation, generation);
    }
}
