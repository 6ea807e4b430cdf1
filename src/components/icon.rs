use dioxus::prelude::*;

use crate::types::Icon;

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "▦",
            Icon::Building => "▥",
            Icon::Settings => "⚙",
            Icon::Menu => "☰",
            Icon::Close => "×",
            Icon::LogOut => "⎋",
            Icon::User => "◉",
            Icon::Sun => "☀",
            Icon::Moon => "☾",
            Icon::Monitor => "▭",
        }
    }
}

#[component]
pub fn Glyph(icon: Icon, #[props(default, into)] class: String) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center justify-center leading-none {class}",
            "aria-hidden": "true",
            "{icon.glyph()}"
        }
    }
}
