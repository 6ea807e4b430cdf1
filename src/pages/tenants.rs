use dioxus::prelude::*;

#[component]
pub fn Tenants() -> Element {
    rsx! {
        div { class: "rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 shadow-sm",
            p { class: "text-sm text-gray-500 dark:text-gray-400", "暂无租户" }
        }
    }
}
