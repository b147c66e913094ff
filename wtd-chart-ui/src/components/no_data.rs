use dioxus::prelude::*;
use wtd_core::series::NO_DATA_MESSAGE;

#[component]
pub fn NoDataPlaceholder() -> Element {
    rsx! {
        div {
            style: "padding: 16px;",
            "{NO_DATA_MESSAGE}"
        }
    }
}
