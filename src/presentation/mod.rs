// Presentation layer - Terminal UI
pub mod app;
pub mod app_state;
pub mod handlers;
pub mod panels;
pub mod surface;
pub mod ui;
