pub mod configuration;
mod client;
mod report;
mod suite;
pub mod telemetry;

pub use client::ApiClient;
pub use configuration::{Config, Credentials};
pub use report::{RunReport, TestResult};
pub use suite::Suite;
