use dioxus::prelude::*;
use wtd_core::page::LOADING_MESSAGE;

/// Shown while the yearly summary request is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "padding: 16px; color: #666;",
            "{LOADING_MESSAGE}"
        }
    }
}
