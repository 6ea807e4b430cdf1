use dioxus::prelude::*;

use crate::hooks::ToastQueue;

#[component]
pub fn ToastZone() -> Element {
    let queue = use_context::<ToastQueue>();
    let toasts = queue.toasts.read().items().to_vec();

    rsx! {
        div { class: "toast-zone",
            for toast in toasts.iter() {
                {
                    let id = toast.id;
                    let message = toast.message.clone();
                    let mut queue = queue;

                    rsx! {
                        div {
                            key: "{id}",
                            class: "toast toast-success",
                            role: "status",
                            onclick: move |_| queue.dismiss(id),
                            span { class: "toast-icon", "✓" }
                            span { "{message}" }
                        }
                    }
                }
            }
        }
    }
}
