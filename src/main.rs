use std::process::ExitCode;

use drishti_smoke::{telemetry, Config, Suite};

#[tokio::main]
async fn main() -> ExitCode {
    // Report lines go to stdout; diagnostics stay on stderr.
    telemetry::init("drishti-smoke", "warn", std::io::stderr)
        .expect("Failed to initialize telemetry");
    let config = Config::init();
    let report = Suite::new(config).run().await;
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
