//! Sidebar navigation model.

use crate::types::{Icon, NavEntry};

pub static NAVIGATION: [NavEntry; 3] = [
    NavEntry { label: "仪表板", path: "/dashboard", icon: Icon::LayoutDashboard },
    NavEntry { label: "租户管理", path: "/tenants", icon: Icon::Building },
    NavEntry { label: "系统设置", path: "/settings", icon: Icon::Settings },
];

impl NavEntry {
    /// Exact match only; `/tenants/42` does not activate `/tenants`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

pub fn find_entry(current_path: &str) -> Option<&'static NavEntry> {
    NAVIGATION.iter().find(|entry| entry.is_active(current_path))
}

/// Top bar title for `current_path`, empty for routes outside the menu.
pub fn page_title(current_path: &str) -> &'static str {
    find_entry(current_path).map(|entry| entry.label).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_entry_is_the_only_active_one() {
        for entry in NAVIGATION.iter() {
            let active: Vec<_> = NAVIGATION.iter().filter(|e| e.is_active(entry.path)).collect();
            assert_eq!(active, vec![entry]);
            assert_eq!(page_title(entry.path), entry.label);
        }
    }

    #[test]
    fn test_unlisted_path() {
        for path in ["/login", "/", "/tenants/42", "/dashboard/", ""] {
            assert!(NAVIGATION.iter().all(|e| !e.is_active(path)), "{path}");
            assert_eq!(page_title(path), "");
        }
    }

    #[test]
    fn test_navigation_order() {
        let paths: Vec<_> = NAVIGATION.iter().map(|e| e.path).collect();
        assert_eq!(paths, ["/dashboard", "/tenants", "/settings"]);
    }
}
