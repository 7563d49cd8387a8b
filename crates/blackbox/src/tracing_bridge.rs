//! crates/blackbox/src/tracing_bridge.rs
//! Bridge between the tracing ecosystem and the blackbox feature gate.
//!
//! [`BlackboxLayer`] lets code written against the standard tracing macros
//! flow through the same per-feature toggles as direct [`blackbox!`]
//! statements: each event's target is resolved to a feature by a
//! caller-supplied resolver, the event level maps onto a [`Priority`], and
//! enabled events are rendered and written to the layer's console sink
//! (standard output by default).
//!
//! ```rust,ignore
//! use blackbox::tracing_bridge::init_tracing;
//! use blackbox::{Core, Feature};
//!
//! init_tracing(|target: &str| match target {
//!     t if t.ends_with("::startup") => Some(Feature::Core(Core::Startup)),
//!     t if t.ends_with("::api") => Some(Feature::Core(Core::Api)),
//!     _ => None,
//! });
//!
//! tracing::info!(target: "app::startup", "configuration loaded");
//! ```
//!
//! [`blackbox!`]: crate::blackbox

use std::io;
use std::marker::PhantomData;
use std::sync::Mutex;

use blackbox_sink::ConsoleSink;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::feature::LogFeature;
use crate::format::{self, CallSite};
use crate::priority::Priority;

/// Maps a tracing [`Level`] onto a console [`Priority`].
///
/// Both DEBUG and TRACE collapse onto [`Priority::Debug`]; the console
/// grammar has no finer level below it.
#[must_use]
pub const fn priority_for_level(level: &Level) -> Priority {
    match *level {
        Level::ERROR => Priority::Error,
        Level::WARN => Priority::Warning,
        Level::INFO => Priority::Informational,
        _ => Priority::Debug,
    }
}

/// Tracing layer that routes events through the blackbox feature gate.
///
/// Events whose target the resolver cannot place, whose feature toggle is
/// off, or which carry no `message` field are dropped without formatting.
/// Everything else is printed as a regular console block with the event's
/// file and line as the call site and the target standing in for the
/// function name.
pub struct BlackboxLayer<F, M, W = io::Stdout> {
    resolver: M,
    sink: Mutex<ConsoleSink<W>>,
    _feature: PhantomData<fn() -> F>,
}

impl<F, M> BlackboxLayer<F, M>
where
    F: LogFeature,
    M: Fn(&str) -> Option<F>,
{
    /// Creates a standard-output layer with the given target-to-feature
    /// resolver.
    #[must_use]
    pub fn new(resolver: M) -> Self {
        Self::with_sink(resolver, ConsoleSink::new(io::stdout()))
    }
}

impl<F, M, W> BlackboxLayer<F, M, W>
where
    F: LogFeature,
    M: Fn(&str) -> Option<F>,
{
    /// Creates a layer that writes enabled events into the provided sink.
    #[must_use]
    pub fn with_sink(resolver: M, sink: ConsoleSink<W>) -> Self {
        Self {
            resolver,
            sink: Mutex::new(sink),
            _feature: PhantomData,
        }
    }
}

impl<S, F, M, W> Layer<S> for BlackboxLayer<F, M, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    F: LogFeature + 'static,
    M: Fn(&str) -> Option<F> + 'static,
    W: io::Write + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if !crate::gate::DIAGNOSTICS_ENABLED {
            return;
        }
        let metadata = event.metadata();
        let Some(feature) = (self.resolver)(metadata.target()) else {
            return;
        };
        if !feature.should_log() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let site = CallSite {
            file: metadata.file().unwrap_or(""),
            function: metadata.target(),
            line: metadata.line().unwrap_or(0),
        };
        let block = format::render(priority_for_level(metadata.level()), site, &[message]);
        if let Ok(mut sink) = self.sink.lock() {
            // Diagnostics never fault the caller; a broken sink stays silent.
            let _ = sink.write_block(&block);
        }
    }
}

/// Visitor that extracts the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a standard-output [`BlackboxLayer`] as the global tracing
/// subscriber.
pub fn init_tracing<F, M>(resolver: M)
where
    F: LogFeature + Send + Sync + 'static,
    M: Fn(&str) -> Option<F> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(BlackboxLayer::new(resolver))
        .init();
}
