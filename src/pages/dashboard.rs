use dioxus::prelude::*;

use crate::navigation::NAVIGATION;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
            for entry in NAVIGATION.iter().skip(1) {
                Link {
                    key: "{entry.path}",
                    to: entry.path,
                    class: "rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 shadow-sm hover:shadow transition-shadow",
                    h3 { class: "text-base font-semibold text-gray-900 dark:text-gray-100", "{entry.label}" }
                    p { class: "mt-2 text-sm text-gray-500 dark:text-gray-400", "{entry.path}" }
                }
            }
        }
    }
}
