pub mod use_session;
pub mod use_toasts;

pub use use_session::{
    use_auth_session, use_router_navigator, use_theme_session, AuthSession, RouterNavigator,
    ThemeSession,
};
pub use use_toasts::{use_toast_queue, Toast, ToastList, ToastQueue};
