use dioxus::prelude::*;

use crate::components::layout::{Sidebar, TopBar};
use crate::routes::Route;
use crate::shell::ShellState;

/// Console frame around every signed-in page: sidebar, top bar and the
/// routed content. Panel state lives here and resets on remount.
#[component]
pub fn Layout() -> Element {
    let current_path = use_route::<Route>().to_string();
    let shell = use_signal(ShellState::new);

    rsx! {
        div { class: "min-h-screen bg-gray-50 dark:bg-gray-900 lg:flex",
            Sidebar { shell, current_path: current_path.clone() }

            div { class: "flex-1",
                TopBar { shell, current_path }

                main { class: "py-6",
                    div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
