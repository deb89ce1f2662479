//! Reusable drawing components: navbar, project sidebar, scrollbar, toasts

pub mod navbar;
pub mod scrollbars;
pub mod sidebar;
pub mod toast;

pub use navbar::{render_navbar, NavbarProps, NAV_HEIGHT};
pub use scrollbars::render_scrollbar;
pub use sidebar::{render_sidebar, SidebarItem, SIDEBAR_WIDTH};
pub use toast::{render_toasts, Toast, ToastQueue};
