use once_cell::sync::OnceCell;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use crate::capture::CaptureProvider;
use crate::layer::CaptureLayer;
use crate::settings::CaptureSettings;

/// Build a capture provider together with a subscriber wired to it.
///
/// The callback customizes [`CaptureSettings`] starting from the defaults.
/// Nothing is installed globally: pass the subscriber to
/// `tracing::subscriber::with_default` (the usual shape inside a test) or
/// `set_global_default`, and keep the provider for assertions.
///
/// ```
/// use tracing_mem_capture::{init, LogLevel};
///
/// let (capture, subscriber) = init::capture_with(|settings| {
///     settings.with_minimum_level(LogLevel::Information).with_capacity(64)
/// });
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!("hello");
/// });
/// assert_eq!(capture.logs().len(), 1);
/// ```
pub fn capture_with<F>(configure: F) -> (CaptureProvider, impl Subscriber + Send + Sync)
where
    F: FnOnce(CaptureSettings) -> CaptureSettings,
{
    let settings = configure(CaptureSettings::default());
    let provider = CaptureProvider::new(settings);
    let subscriber = Registry::default().with(CaptureLayer::new(provider.clone()));
    (provider, subscriber)
}

/// [`capture_with`] with untouched default settings.
pub fn capture() -> (CaptureProvider, impl Subscriber + Send + Sync) {
    capture_with(|settings| settings)
}

/// Install capture as the global default subscriber and return the provider.
///
/// **Parameters**
/// - `settings`: capture configuration.
/// - `echo_stdout`: if `true`, a `tracing_subscriber::fmt` layer is stacked
///   on top so events also print to the console.
///
/// Panics if a global default subscriber is already set, same as any other
/// `set_global_default` caller. Tests that run in one process should prefer
/// [`capture_with`] and a scoped default instead.
pub fn init_capture_with_settings(
    settings: CaptureSettings,
    echo_stdout: bool,
) -> CaptureProvider {
    let provider = CaptureProvider::new(settings);
    let layer = CaptureLayer::new(provider.clone());

    if echo_stdout {
        let fmt_layer = tracing_subscriber::fmt::layer();
        let subscriber = Registry::default().with(layer).with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber).expect("set global subscriber");
    } else {
        let subscriber = Registry::default().with(layer);
        tracing::subscriber::set_global_default(subscriber).expect("set global subscriber");
    }

    provider
}

/// Install capture globally with default settings and no console echo.
pub fn init_capture() -> CaptureProvider {
    init_capture_with_settings(CaptureSettings::default(), false)
}

static GLOBAL: OnceCell<CaptureProvider> = OnceCell::new();

/// Process-wide provider, built with default settings on first access and
/// cached for every later call. `OnceCell` gives the construct-once
/// discipline: one caller initializes under the cell's lock, everyone else
/// reads the cached handle without locking.
pub fn global() -> &'static CaptureProvider {
    GLOBAL.get_or_init(CaptureProvider::default)
}
