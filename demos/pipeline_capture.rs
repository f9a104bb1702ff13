//! Attach the capture layer to a tracing subscriber, emit ordinary tracing
//! events, and assert on what was captured.
//!
//! Run with: `cargo run --example pipeline_capture`

use tracing_mem_capture::{init, LogLevel};

fn main() {
    let (capture, subscriber) = init::capture_with(|settings| {
        settings.with_minimum_level(LogLevel::Information).with_capacity(32)
    });

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "demo::api", route = "/health", "request handled");
        tracing::error!(target: "demo::api", "backend unreachable");
        tracing::debug!(target: "demo::api", "filtered: below the floor");
    });

    for record in capture.logs() {
        println!("{} {} [{}] {}", record.timestamp, record.level, record.category, record.message);
    }

    let errors = capture.logs_matching(None, Some(LogLevel::Error));
    println!("errors captured: {}", errors.len());
}
