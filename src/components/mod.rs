pub mod icon;
pub mod layout;
pub mod toast_zone;

pub use icon::Glyph;
pub use layout::Layout;
pub use toast_zone::ToastZone;
