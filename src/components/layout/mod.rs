pub mod shell_layout;
pub mod sidebar;
pub mod theme_switcher;
pub mod top_bar;

pub use shell_layout::Layout;
pub use sidebar::Sidebar;
pub use theme_switcher::ThemeSwitcher;
pub use top_bar::TopBar;
