use dioxus::prelude::*;

use crate::components::Glyph;
use crate::hooks::{ThemeSession, ToastQueue};
use crate::shell::{current_theme_option, ShellState};
use crate::stores::ThemeStore;
use crate::theme::THEME_OPTIONS;

const OPTION_CURRENT: &str = "w-full flex items-center gap-x-2 px-4 py-2 text-sm transition-colors bg-primary/10 text-primary dark:bg-primary/20";
const OPTION_IDLE: &str = "w-full flex items-center gap-x-2 px-4 py-2 text-sm transition-colors text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700";

#[component]
pub fn ThemeSwitcher(mut shell: Signal<ShellState>) -> Element {
    let mut themes = use_context::<ThemeSession>();
    let mut toasts = use_context::<ToastQueue>();

    let stored = themes.theme();
    let current = current_theme_option(&themes);
    let is_open = shell.read().theme_menu_open;

    rsx! {
        div { class: "relative",
            button {
                class: "flex items-center gap-x-2 text-sm text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-gray-100 transition-colors",
                title: "切换主题",
                onclick: move |_| shell.write().toggle_theme_menu(),
                Glyph { icon: current.icon, class: "h-4 w-4" }
                span { class: "hidden sm:inline", "{current.label}" }
            }

            if is_open {
                // Click-away layer under the popover
                div {
                    class: "fixed inset-0 z-10",
                    onclick: move |_| shell.write().dismiss_theme_menu(),
                }
                div { class: "absolute right-0 mt-2 w-40 bg-white dark:bg-gray-800 rounded-lg shadow-lg border border-gray-200 dark:border-gray-700 py-1 z-20",
                    for option in THEME_OPTIONS.iter() {
                        button {
                            key: "{option.value}",
                            class: if option.is_selected(&stored) { OPTION_CURRENT } else { OPTION_IDLE },
                            onclick: move |_| {
                                shell.write().select_theme(option.value, &mut themes, &mut toasts);
                            },
                            Glyph { icon: option.icon, class: "h-4 w-4" }
                            span { "{option.label}" }
                        }
                    }
                }
            }
        }
    }
}
