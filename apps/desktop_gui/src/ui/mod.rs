//! UI layer for desktop GUI: app shell, route views, and small widgets.

pub mod app;
pub mod views;
pub mod widgets;

pub use app::DesktopGuiApp;
