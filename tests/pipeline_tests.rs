use serde_json::json;
use tracing_mem_capture::{init, CaptureProvider, CaptureSettings, LogLevel};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

#[test]
fn tracing_events_land_in_the_buffer() {
    let (capture, subscriber) = init::capture();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "pipeline::demo", "captured through tracing");
    });

    let logs = capture.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].category, "pipeline::demo");
    assert_eq!(logs[0].level, LogLevel::Information);
    assert_eq!(logs[0].message, "captured through tracing");
}

#[test]
fn event_fields_become_the_state_payload() {
    let (capture, subscriber) = init::capture();

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(target: "pipeline::demo", user = "alice", attempt = 3, "login failed");
    });

    let logs = capture.logs();
    let state = logs[0].state.as_ref().expect("fields collected");
    assert_eq!(state["user"], json!("alice"));
    assert_eq!(state["attempt"], json!(3));
    assert_eq!(logs[0].message, "login failed");
}

#[test]
fn the_configured_floor_applies_to_pipeline_events_too() {
    let (capture, subscriber) = init::capture_with(|settings| {
        settings.with_minimum_level(LogLevel::Warning)
    });

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "pipeline::demo", "filtered out");
        tracing::error!(target: "pipeline::demo", "kept");
    });

    let logs = capture.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].message, "kept");
}

#[test]
fn the_category_filter_applies_to_event_targets() {
    let (capture, subscriber) = init::capture_with(|settings| {
        settings.with_category_filter(|category, _| !category.starts_with("noisy"))
    });

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!(target: "noisy::component", "dropped");
        tracing::error!(target: "quiet::component", "kept");
    });

    let logs = capture.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].category, "quiet::component");
}

#[test]
fn ambient_scopes_attach_to_pipeline_events() {
    let capture = CaptureProvider::new(CaptureSettings::default());
    let subscriber = Registry::default().with(
        tracing_mem_capture::layer::CaptureLayer::new(capture.clone()),
    );
    let logger = capture.logger("scoped").expect("valid category");

    tracing::subscriber::with_default(subscriber, || {
        let _scope = logger.begin_scope("request-42");
        tracing::info!(target: "pipeline::demo", "inside the scope");
    });

    let logs = capture.logs();
    assert_eq!(logs[0].scopes, vec![json!("request-42")]);
}

#[test]
fn the_global_provider_is_constructed_once() {
    let first = init::global() as *const CaptureProvider;
    let second = init::global() as *const CaptureProvider;
    assert_eq!(first, second);
}
