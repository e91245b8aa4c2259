// Domain layer - Range, telemetry and chart models
pub mod chart;
pub mod error;
pub mod range;
pub mod telemetry;
