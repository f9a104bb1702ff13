//! Log through capture handles directly and print the rendered records.
//!
//! Run with: `cargo run --example basic_capture`

use tracing_mem_capture::{render, CaptureProvider, CaptureSettings, LogEvent, LogLevel};

fn main() {
    let settings = CaptureSettings::new()
        .with_minimum_level(LogLevel::Information)
        .with_capacity(16);
    let capture = CaptureProvider::new(settings);

    let logger = capture.logger("demo::orders").expect("non-empty category");

    let _scope = logger.begin_scope("checkout-session");
    logger.info("order accepted");
    logger.log(
        LogEvent::new(LogLevel::Warning, "retrying payment, attempt {Attempt}").arg(2),
    );
    logger.debug("not captured: below the Information floor");

    for record in capture.logs() {
        print!("{}", render::render(&record));
    }
}
