//! Headless state machine behind the `Layout` component.
//!
//! Every click handler in `components::layout` forwards to one of these
//! methods, so the shell's behavior can be driven without a renderer.

use crate::config::ShellConfig;
use crate::stores::{AuthStore, Notifier, PathNavigator, ThemeStore};
use crate::types::{ThemeMode, ThemeOption};

pub const LOGOUT_MESSAGE: &str = "已退出登录";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub theme_menu_open: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    /// Backdrop click or the panel's close button.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Following a menu link always leaves the overlay closed, even on wide
    /// viewports where it was never visible.
    pub fn activate_nav_link(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_theme_menu(&mut self) {
        self.theme_menu_open = !self.theme_menu_open;
    }

    /// Click on the capture layer under the open popover.
    pub fn dismiss_theme_menu(&mut self) {
        self.theme_menu_open = false;
    }

    /// Store first, then close, then notify.
    pub fn select_theme<T, N>(&mut self, mode: ThemeMode, themes: &mut T, notifier: &mut N)
    where
        T: ThemeStore + ?Sized,
        N: Notifier + ?Sized,
    {
        let option = ThemeOption::for_mode(mode);
        themes.set_theme(option.value);
        self.theme_menu_open = false;
        tracing::info!("Theme switched to {}", option.value);
        notifier.success(&option.switched_message());
    }
}

pub fn current_theme_option<T: ThemeStore + ?Sized>(themes: &T) -> &'static ThemeOption {
    ThemeOption::resolve(&themes.theme())
}

pub fn display_name<A: AuthStore + ?Sized>(auth: &A, config: &ShellConfig) -> String {
    auth.username()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| config.guest_name.clone())
}

/// Clear the session, announce it, then leave for the login route.
pub fn logout<A, N, P>(auth: &mut A, notifier: &mut N, navigator: &mut P, config: &ShellConfig)
where
    A: AuthStore + ?Sized,
    N: Notifier + ?Sized,
    P: PathNavigator + ?Sized,
{
    auth.clear_auth();
    tracing::info!("Signed out");
    notifier.success(LOGOUT_MESSAGE);
    navigator.navigate(&config.login_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_closed() {
        let state = ShellState::new();
        assert!(!state.sidebar_open);
        assert!(!state.theme_menu_open);
    }

    #[test]
    fn test_theme_menu_toggles() {
        let mut state = ShellState::new();
        state.toggle_theme_menu();
        assert!(state.theme_menu_open);
        state.toggle_theme_menu();
        assert!(!state.theme_menu_open);
    }

    #[test]
    fn test_dismiss_theme_menu() {
        let mut state = ShellState::new();
        state.toggle_theme_menu();
        state.dismiss_theme_menu();
        assert!(!state.theme_menu_open);
        state.dismiss_theme_menu();
        assert!(!state.theme_menu_open);
    }

    #[test]
    fn test_nav_link_closes_sidebar() {
        for open in [true, false] {
            let mut state = ShellState { sidebar_open: open, theme_menu_open: false };
            state.activate_nav_link();
            assert!(!state.sidebar_open);
        }
    }

    #[test]
    fn test_sidebar_open_close() {
        let mut state = ShellState::new();
        state.open_sidebar();
        assert!(state.sidebar_open);
        state.close_sidebar();
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_sidebar_and_theme_menu_independent() {
        let mut state = ShellState::new();
        state.open_sidebar();
        state.toggle_theme_menu();
        state.activate_nav_link();
        assert!(state.theme_menu_open);
    }
}
