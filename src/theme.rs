//! Theme options and color scheme resolution.

use crate::types::{Icon, ThemeMode, ThemeOption};

pub static THEME_OPTIONS: [ThemeOption; 3] = [
    ThemeOption { value: ThemeMode::Light, label: "浅色", icon: Icon::Sun },
    ThemeOption { value: ThemeMode::Dark, label: "深色", icon: Icon::Moon },
    ThemeOption { value: ThemeMode::System, label: "跟随系统", icon: Icon::Monitor },
];

impl ThemeOption {
    pub fn for_mode(mode: ThemeMode) -> &'static ThemeOption {
        THEME_OPTIONS
            .iter()
            .find(|opt| opt.value == mode)
            .unwrap_or(&THEME_OPTIONS[2])
    }

    /// Resolve a raw theme key from the store. Unknown keys resolve to `system`.
    pub fn resolve(value: &str) -> &'static ThemeOption {
        match value.parse::<ThemeMode>() {
            Ok(mode) => Self::for_mode(mode),
            Err(e) => {
                tracing::debug!("{}, showing system theme", e);
                &THEME_OPTIONS[2]
            }
        }
    }

    /// Highlight in the open popover. Compares against the stored key
    /// itself, so an unknown key highlights nothing.
    pub fn is_selected(&self, stored: &str) -> bool {
        self.value.as_str() == stored
    }

    pub fn switched_message(&self) -> String {
        format!("已切换到{}模式", self.label)
    }
}

/// Whether the dark scheme applies for the stored `value`.
pub fn is_dark(value: &str, system_prefers_dark: bool) -> bool {
    match ThemeOption::resolve(value).value {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::System => system_prefers_dark,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_prefers_dark() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_values() {
        assert_eq!(ThemeOption::resolve("light").value, ThemeMode::Light);
        assert_eq!(ThemeOption::resolve("dark").value, ThemeMode::Dark);
        assert_eq!(ThemeOption::resolve("system").value, ThemeMode::System);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_system() {
        assert_eq!(ThemeOption::resolve("sepia").value, ThemeMode::System);
        assert_eq!(ThemeOption::resolve("").value, ThemeMode::System);
    }

    #[test]
    fn test_for_mode_matches_label() {
        assert_eq!(ThemeOption::for_mode(ThemeMode::Dark).label, "深色");
        assert_eq!(ThemeOption::for_mode(ThemeMode::Light).icon, Icon::Sun);
    }

    #[test]
    fn test_switched_message_names_option() {
        let msg = ThemeOption::for_mode(ThemeMode::Dark).switched_message();
        assert_eq!(msg, "已切换到深色模式");
    }

    #[test]
    fn test_selected_option_follows_stored_key() {
        let selected: Vec<_> = THEME_OPTIONS.iter().filter(|opt| opt.is_selected("dark")).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, ThemeMode::Dark);
    }

    #[test]
    fn test_unknown_key_highlights_nothing() {
        // The button still shows the system option for this key.
        assert_eq!(ThemeOption::resolve("sepia").value, ThemeMode::System);
        assert!(THEME_OPTIONS.iter().all(|opt| !opt.is_selected("sepia")));
    }

    #[test]
    fn test_effective_scheme() {
        assert!(is_dark("dark", false));
        assert!(!is_dark("light", true));
        assert!(is_dark("system", true));
        assert!(!is_dark("system", false));
        assert!(is_dark("unknown", true));
    }
}
