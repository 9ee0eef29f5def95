pub mod damage;
pub mod session;
pub mod standings;
pub mod telemetry;
