//! Titled container that D3.js renders a chart into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Section heading above the chart
    pub heading: String,
    /// Y-axis unit explanation (e.g., "°C")
    #[props(default = String::new())]
    pub unit_description: String,
    /// Optional minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            h3 {
                style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;",
                "{props.heading}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0 0 4px 0; font-size: 12px; color: #666;",
                    "Y-axis: {props.unit_description}"
                }
            }
            div {
                id: "{props.id}",
                style: "{style}",
            }
        }
    }
}
