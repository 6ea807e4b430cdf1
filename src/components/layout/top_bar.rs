use dioxus::prelude::*;

use crate::components::layout::ThemeSwitcher;
use crate::components::Glyph;
use crate::config::ShellConfig;
use crate::hooks::{use_router_navigator, AuthSession, ToastQueue};
use crate::navigation::page_title;
use crate::shell::{display_name, logout, ShellState};
use crate::types::Icon;

#[component]
pub fn TopBar(mut shell: Signal<ShellState>, current_path: String) -> Element {
    let config = use_context::<ShellConfig>();
    let mut auth = use_context::<AuthSession>();
    let mut toasts = use_context::<ToastQueue>();
    let mut navigator = use_router_navigator();

    let title = page_title(&current_path);
    let name = display_name(&auth, &config);

    rsx! {
        div { class: "sticky top-0 z-40 flex h-16 items-center gap-x-4 border-b border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 px-4 shadow-sm sm:gap-x-6 sm:px-6 lg:px-8",
            button {
                r#type: "button",
                class: "-m-2.5 p-2.5 text-gray-700 dark:text-gray-300 lg:hidden",
                onclick: move |_| shell.write().open_sidebar(),
                Glyph { icon: Icon::Menu, class: "h-6 w-6 text-xl" }
            }

            div { class: "flex flex-1 gap-x-4 self-stretch lg:gap-x-6",
                div { class: "flex flex-1 items-center",
                    h2 { class: "text-lg font-semibold text-gray-900 dark:text-gray-100", "{title}" }
                }

                div { class: "flex items-center gap-x-4 lg:gap-x-6",
                    div { class: "flex items-center gap-x-2 text-sm text-gray-600 dark:text-gray-300",
                        Glyph { icon: Icon::User, class: "h-4 w-4" }
                        span { "{name}" }
                    }

                    ThemeSwitcher { shell }

                    button {
                        class: "flex items-center gap-x-2 text-sm text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-gray-100 transition-colors",
                        title: "退出登录",
                        onclick: move |_| logout(&mut auth, &mut toasts, &mut navigator, &config),
                        Glyph { icon: Icon::LogOut, class: "h-4 w-4" }
                        span { class: "hidden sm:inline", "退出" }
                    }
                }
            }
        }
    }
}
