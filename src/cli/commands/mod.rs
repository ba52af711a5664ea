pub mod sensor;
pub mod telemetry;
