use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "py-12 text-center",
            h3 { class: "text-lg font-semibold text-gray-900 dark:text-gray-100", "404" }
            p { class: "mt-2 text-sm text-gray-500 dark:text-gray-400", "{path}" }
        }
    }
}
