// Library root - layers of the solar telemetry dashboard
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
