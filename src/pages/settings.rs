use dioxus::prelude::*;

use crate::config::ShellConfig;
use crate::hooks::ThemeSession;
use crate::shell::current_theme_option;

#[component]
pub fn Settings() -> Element {
    let config = use_context::<ShellConfig>();
    let themes = use_context::<ThemeSession>();
    let theme = current_theme_option(&themes);

    rsx! {
        div { class: "rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 shadow-sm",
            dl { class: "divide-y divide-gray-200 dark:divide-gray-700 text-sm",
                div { class: "flex justify-between px-6 py-4",
                    dt { class: "text-gray-500 dark:text-gray-400", "系统名称" }
                    dd { class: "text-gray-900 dark:text-gray-100", "{config.brand_title}" }
                }
                div { class: "flex justify-between px-6 py-4",
                    dt { class: "text-gray-500 dark:text-gray-400", "主题" }
                    dd { class: "text-gray-900 dark:text-gray-100", "{theme.label}" }
                }
            }
        }
    }
}
