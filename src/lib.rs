//! O365 admin console - the Dioxus application shell.
//!
//! The console frame (`components::Layout`) is a sidebar, a top bar with the
//! page title, signed-in user, theme switcher and logout control, and the
//! routed page content. Its behavior lives in the renderer-free
//! [`shell::ShellState`] and the collaborator traits in [`stores`], so it can
//! be exercised without a DOM:
//!
//! ```rust
//! use o365_admin::prelude::*;
//!
//! let mut state = ShellState::new();
//! state.toggle_theme_menu();
//! assert!(state.theme_menu_open);
//!
//! assert_eq!(page_title("/tenants"), "租户管理");
//! assert_eq!(ThemeOption::resolve("sepia").value, ThemeMode::System);
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod shell;
pub mod stores;
pub mod theme;
pub mod types;

pub mod prelude {
    pub use crate::config::ShellConfig;
    pub use crate::error::{ShellError, ShellResult};
    pub use crate::navigation::{find_entry, page_title, NAVIGATION};
    pub use crate::shell::{current_theme_option, display_name, logout, ShellState, LOGOUT_MESSAGE};
    pub use crate::stores::{AuthStore, Notifier, PathNavigator, ThemeStore};
    pub use crate::theme::{is_dark, THEME_OPTIONS};
    pub use crate::types::{Icon, NavEntry, ThemeMode, ThemeOption, User};
}
