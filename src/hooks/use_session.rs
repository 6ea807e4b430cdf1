use dioxus::prelude::*;

use crate::stores::{AuthStore, PathNavigator, ThemeStore};
use crate::types::{ThemeMode, User};

#[derive(Clone, Copy, PartialEq)]
pub struct AuthSession {
    pub user: Signal<Option<User>>,
}

pub fn use_auth_session() -> AuthSession {
    let user = use_signal(|| None);
    AuthSession { user }
}

impl AuthSession {
    pub fn sign_in(&mut self, username: String) {
        tracing::info!("Signed in as {}", username);
        self.user.set(Some(User { username }));
    }
}

impl AuthStore for AuthSession {
    fn username(&self) -> Option<String> {
        self.user.read().as_ref().map(|u| u.username.clone())
    }

    fn clear_auth(&mut self) {
        self.user.set(None);
    }
}

/// Holds the raw theme key, the way a persisted store would hand it back.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeSession {
    pub theme: Signal<String>,
}

pub fn use_theme_session(initial: ThemeMode) -> ThemeSession {
    let theme = use_signal(|| initial.as_str().to_string());
    ThemeSession { theme }
}

impl ThemeStore for ThemeSession {
    fn theme(&self) -> String {
        self.theme.read().clone()
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.theme.set(mode.as_str().to_string());
    }
}

/// Router-backed navigation target for the shell's logout flow.
#[derive(Clone, Copy)]
pub struct RouterNavigator(pub Navigator);

pub fn use_router_navigator() -> RouterNavigator {
    RouterNavigator(navigator())
}

impl PathNavigator for RouterNavigator {
    fn navigate(&mut self, path: &str) {
        if let Some(failure) = self.0.push(path.to_string()) {
            tracing::warn!("Navigation to {} failed: {:?}", path, failure);
        }
    }
}
