//! UI layer for desktop GUI: app shell, form panel and result panel.

pub mod app;
pub mod form_panel;
pub mod result_panel;

pub use app::{PredictorApp, StartupConfig};
