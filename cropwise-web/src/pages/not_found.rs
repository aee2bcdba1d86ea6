use cropwise_core::navigation::View;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div {
            style: "text-align: center; padding: 48px 16px;",
            h1 { "{View::NotFound.title()}" }
            p { style: "color: #666;", "Nothing grows at {path}." }
            Link { to: View::Home.path(), "Back to home" }
        }
    }
}
