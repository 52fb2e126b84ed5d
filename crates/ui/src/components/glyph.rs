use dioxus::prelude::*;

/// Stroke icon drawn from a single SVG path.
#[component]
pub fn Glyph(class: &'static str, path: &'static str) -> Element {
    rsx! {
        svg {
            class: class,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.7",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: path }
        }
    }
}
