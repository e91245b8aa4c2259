// Application layer - Use cases and the seams they depend on
pub mod dashboard_service;
pub mod presenter;
pub mod range_selector;
pub mod render;
pub mod telemetry_source;
