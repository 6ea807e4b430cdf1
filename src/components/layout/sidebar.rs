use dioxus::prelude::*;

use crate::components::Glyph;
use crate::config::ShellConfig;
use crate::navigation::NAVIGATION;
use crate::shell::ShellState;
use crate::types::Icon;

const LINK_ACTIVE: &str = "flex items-center px-3 py-2.5 mb-1 rounded-lg text-sm font-medium transition-colors bg-primary text-white";
const LINK_IDLE: &str = "flex items-center px-3 py-2.5 mb-1 rounded-lg text-sm font-medium transition-colors text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700";

#[component]
pub fn Sidebar(mut shell: Signal<ShellState>, current_path: String) -> Element {
    let config = use_context::<ShellConfig>();
    let is_open = shell.read().sidebar_open;

    rsx! {
        // Backdrop, small viewports only
        div {
            class: if is_open {
                "fixed inset-0 z-50 bg-gray-900/80 dark:bg-black/80 lg:hidden block"
            } else {
                "fixed inset-0 z-50 bg-gray-900/80 dark:bg-black/80 lg:hidden hidden"
            },
            onclick: move |_| shell.write().close_sidebar(),
        }

        aside {
            class: if is_open {
                "sidebar fixed inset-y-0 left-0 z-50 w-64 bg-white dark:bg-gray-800 shadow-lg transform transition-transform duration-200 ease-in-out lg:translate-x-0 lg:static lg:z-0 lg:flex-shrink-0 translate-x-0"
            } else {
                "sidebar fixed inset-y-0 left-0 z-50 w-64 bg-white dark:bg-gray-800 shadow-lg transform transition-transform duration-200 ease-in-out lg:translate-x-0 lg:static lg:z-0 lg:flex-shrink-0 -translate-x-full"
            },

            div { class: "flex h-16 items-center justify-between px-6 border-b border-gray-200 dark:border-gray-700",
                h1 { class: "text-xl font-bold text-primary", "{config.brand_title}" }
                button {
                    class: "lg:hidden text-gray-700 dark:text-gray-300",
                    onclick: move |_| shell.write().close_sidebar(),
                    Glyph { icon: Icon::Close, class: "h-6 w-6 text-xl" }
                }
            }

            nav { class: "mt-6 px-3",
                for entry in NAVIGATION.iter() {
                    Link {
                        key: "{entry.path}",
                        to: entry.path,
                        class: if entry.is_active(&current_path) { LINK_ACTIVE } else { LINK_IDLE },
                        onclick: move |_| shell.write().activate_nav_link(),
                        Glyph { icon: entry.icon, class: "mr-3 h-5 w-5" }
                        "{entry.label}"
                    }
                }
            }
        }
    }
}
