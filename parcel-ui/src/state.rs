//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`
//! and go through its methods, which forward to the `SelectionController`.

use std::rc::Rc;

use dioxus::prelude::*;
use log::{debug, error};
use parcel_catalog::Catalog;
use parcel_core::{FieldEdit, ResolverConfig, SelectionController, SelectionError};

use crate::js_bridge;

/// How long the suggestion list stays open after the search box loses focus,
/// so a click on a suggestion still registers.
pub const SUGGESTION_DISMISS_MS: i32 = 150;

/// One entry of the autocomplete list.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub index: usize,
    pub address: String,
}

/// Shared application state for the parcel valuation app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Search / edit / review session over the embedded catalog
    pub session: Signal<SelectionController>,
    /// Text currently typed in the search box
    pub query: Signal<String>,
    /// Live suggestions for `query`
    pub suggestions: Signal<Vec<Suggestion>>,
    pub show_suggestions: Signal<bool>,
    /// Bumped on every focus change; a pending dismissal only applies while
    /// its generation is still current
    pub dismiss_generation: Signal<u64>,
    /// The last search had no parcel to show
    pub not_found: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Load the embedded catalog and start a session in the searching phase.
    pub fn new() -> Self {
        let (catalog, error_msg) = match Catalog::embedded() {
            Ok(catalog) => (catalog, None),
            Err(err) => {
                error!("failed to load parcel catalog: {}", err);
                let message = format!("Không thể tải dữ liệu lô đất: {}", err);
                (Catalog::default(), Some(message))
            }
        };
        let session = SelectionController::with_catalog(Rc::new(catalog), ResolverConfig::default());

        Self {
            session: Signal::new(session),
            query: Signal::new(String::new()),
            suggestions: Signal::new(Vec::new()),
            show_suggestions: Signal::new(false),
            dismiss_generation: Signal::new(0),
            not_found: Signal::new(false),
            error_msg: Signal::new(error_msg),
        }
    }

    /// Every catalog address, in catalog order, for the quick-search buttons.
    pub fn quick_searches(&self) -> Vec<String> {
        self.session
            .peek()
            .catalog()
            .addresses()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Update the search box text and recompute suggestions.
    pub fn set_query(&mut self, text: String) {
        let suggestions: Vec<Suggestion> = {
            let session = self.session.peek();
            session
                .suggest(&text)
                .iter()
                .filter_map(|m| {
                    session.catalog().get(m.index).map(|entry| Suggestion {
                        index: m.index,
                        address: entry.record.address.clone(),
                    })
                })
                .collect()
        };
        self.show_suggestions.set(!text.trim().is_empty());
        self.suggestions.set(suggestions);
        self.query.set(text);
    }

    /// Commit a search for `text`.
    pub fn submit_search(&mut self, text: &str) {
        let result = self.session.write().search(text);
        match result {
            Ok(_) => {
                self.query.set(text.trim().to_string());
                self.suggestions.set(Vec::new());
                self.show_suggestions.set(false);
                self.not_found.set(false);
            }
            Err(SelectionError::NoQueryText) => {
                debug!("ignoring empty search");
            }
            Err(SelectionError::EmptyCatalog) => {
                self.query.set(text.trim().to_string());
                self.show_suggestions.set(false);
                self.not_found.set(true);
            }
            Err(err) => error!("search failed: {}", err),
        }
    }

    /// Select a parcel directly, e.g. from a click on its boundary.
    pub fn select_parcel(&mut self, index: usize) {
        let result = self.session.write().select_by_index(index).map(|view| view.index);
        if let Err(err) = result {
            error!("parcel selection failed: {}", err);
        }
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        let result = self.session.write().edit_working_copy(edit).map(|_| ());
        if let Err(err) = result {
            error!("edit failed: {}", err);
        }
    }

    pub fn toggle_facility(&mut self, name: &str) {
        let result = self.session.write().toggle_facility(name).map(|_| ());
        if let Err(err) = result {
            error!("facility toggle failed: {}", err);
        }
    }

    pub fn add_custom_facility(&mut self, name: &str) {
        let result = self.session.write().add_custom_facility(name).map(|_| ());
        if let Err(err) = result {
            error!("adding facility failed: {}", err);
        }
    }

    pub fn confirm_valuation(&mut self) {
        let result = self.session.write().confirm_valuation().map(|view| view.index);
        if let Err(err) = result {
            error!("valuation failed: {}", err);
        }
    }

    /// Start a new search from scratch.
    pub fn reset(&mut self) {
        self.session.write().reset();
        self.query.set(String::new());
        self.suggestions.set(Vec::new());
        self.show_suggestions.set(false);
        self.not_found.set(false);
    }

    /// Reopen the suggestion list when the search box regains focus.
    pub fn focus_search(&mut self) {
        *self.dismiss_generation.write() += 1;
        let has_text = !self.query.peek().trim().is_empty();
        self.show_suggestions.set(has_text);
    }

    /// Hide the suggestion list after `SUGGESTION_DISMISS_MS`, unless focus
    /// came back in the meantime.
    pub fn schedule_dismiss(&mut self) {
        let generation = {
            let mut counter = self.dismiss_generation.write();
            *counter += 1;
            *counter
        };
        let counter = self.dismiss_generation;
        let mut show = self.show_suggestions;
        spawn(async move {
            js_bridge::sleep_ms(SUGGESTION_DISMISS_MS).await;
            if *counter.peek() == generation {
                show.set(false);
            }
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
