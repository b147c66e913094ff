//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once by the page via `use_context_provider`. Child
//! components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wtd_core::page::PageState;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Fetch lifecycle: Loading until the one request settles
    pub page: Signal<PageState>,
}

impl AppState {
    /// Create a new AppState in the `Loading` state.
    pub fn new() -> Self {
        Self {
            page: Signal::new(PageState::Loading),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
