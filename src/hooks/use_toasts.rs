use dioxus::prelude::*;

use crate::stores::Notifier;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastList {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    pub toasts: Signal<ToastList>,
    pub duration_ms: u32,
}

pub fn use_toast_queue(duration_ms: u32) -> ToastQueue {
    let toasts = use_signal(ToastList::default);
    ToastQueue { toasts, duration_ms }
}

impl ToastQueue {
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().dismiss(id);
    }
}

impl Notifier for ToastQueue {
    fn success(&mut self, message: &str) {
        let id = self.toasts.write().push(message);
        tracing::debug!("Toast {}: {}", id, message);

        // The caller may be unmounted right after (logout leaves the layout),
        // so the dismiss timer runs in the root scope, not the caller's.
        let mut toasts = self.toasts;
        let duration_ms = self.duration_ms;
        let _ = spawn_forever(async move {
            sleep_ms(duration_ms).await;
            toasts.write().dismiss(id);
        });
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms as i32,
            );
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms.into())).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::dioxus_core::NoOpMutations;

    type Seen = Rc<RefCell<Vec<usize>>>;

    #[allow(non_snake_case)]
    fn QueueRoot(seen: Seen) -> Element {
        let queue = use_toast_queue(20);
        use_context_provider(|| queue);
        let mut caller_mounted = use_signal(|| true);

        seen.borrow_mut().push(queue.toasts.read().items().len());

        rsx! {
            if caller_mounted() {
                SignOutCaller { on_done: move |_| caller_mounted.set(false) }
            }
        }
    }

    #[component]
    fn SignOutCaller(on_done: EventHandler) -> Element {
        use_hook(|| {
            let mut queue = consume_context::<ToastQueue>();
            queue.success("已退出登录");
            on_done.call(());
        });
        rsx! {}
    }

    #[tokio::test]
    async fn test_toast_dismissed_after_caller_unmounts() {
        let seen = Seen::default();
        let mut dom = VirtualDom::new_with_props(QueueRoot, seen.clone());
        dom.rebuild_in_place();

        let deadline = tokio::time::Instant::now() + Duration::from_millis(500);
        loop {
            let done = {
                let seen = seen.borrow();
                seen.contains(&1) && seen.last() == Some(&0)
            };
            if done {
                break;
            }
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep_until(deadline) => break,
            }
            dom.render_immediate(&mut NoOpMutations);
        }

        let seen = seen.borrow();
        assert!(seen.contains(&1), "toast never shown: {:?}", *seen);
        assert_eq!(seen.last(), Some(&0), "toast still on screen: {:?}", *seen);
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut list = ToastList::default();
        let a = list.push("first");
        let b = list.push("second");
        assert!(b > a);
        let messages: Vec<_> = list.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut list = ToastList::default();
        let a = list.push("first");
        let b = list.push("second");
        list.dismiss(a);
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].id, b);
        // Already gone; nothing else is touched.
        list.dismiss(a);
        assert_eq!(list.items().len(), 1);
    }
}
