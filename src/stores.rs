//! Contracts of the collaborators the shell reads from and writes to.
//!
//! The console wires these to Dioxus signals and the router (see
//! `hooks::use_session` and `hooks::use_toasts`); tests swap in recording
//! fakes.

use crate::types::ThemeMode;

pub trait AuthStore {
    fn username(&self) -> Option<String>;

    /// Drops every piece of authentication state. Complete on return.
    fn clear_auth(&mut self);
}

pub trait ThemeStore {
    /// Raw stored key; normally `light`, `dark` or `system`.
    fn theme(&self) -> String;

    fn set_theme(&mut self, mode: ThemeMode);
}

pub trait Notifier {
    fn success(&mut self, message: &str);
}

pub trait PathNavigator {
    fn navigate(&mut self, path: &str);
}
