use dioxus::prelude::*;

use crate::config::ShellConfig;
use crate::hooks::{use_router_navigator, AuthSession};
use crate::navigation::NAVIGATION;
use crate::stores::PathNavigator;

/// Local sign-in: stores the entered name in the session, nothing more.
#[component]
pub fn Login() -> Element {
    let config = use_context::<ShellConfig>();
    let mut auth = use_context::<AuthSession>();
    let mut navigator = use_router_navigator();
    let mut username = use_signal(String::new);

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900",
            form {
                class: "w-80 space-y-4 rounded-lg bg-white dark:bg-gray-800 p-8 shadow",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let name = username.read().trim().to_string();
                    if name.is_empty() {
                        return;
                    }
                    auth.sign_in(name);
                    username.set(String::new());
                    navigator.navigate(NAVIGATION[0].path);
                },

                h1 { class: "text-xl font-bold text-primary text-center", "{config.brand_title}" }
                input {
                    r#type: "text",
                    placeholder: "用户名",
                    class: "w-full rounded border border-gray-300 dark:border-gray-600 bg-transparent px-3 py-2 text-sm text-gray-900 dark:text-gray-100",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "w-full rounded bg-primary px-3 py-2 text-sm font-medium text-white",
                    "登录"
                }
            }
        }
    }
}
