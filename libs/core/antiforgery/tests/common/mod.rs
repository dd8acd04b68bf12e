//! Shared log-capture support for the integration tests.

use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::span;

/// Collects the messages of WARN events emitted while installed.
#[derive(Default)]
pub struct WarnCapture {
    messages: Mutex<Vec<String>>,
}

impl WarnCapture {
    /// Install a capturing subscriber as the thread default.
    ///
    /// Events are recorded until the returned guard is dropped.
    pub fn install() -> (Arc<Self>, tracing::subscriber::DefaultGuard) {
        let capture = Arc::new(Self::default());
        let guard = tracing::subscriber::set_default(WarnSubscriber(capture.clone()));
        (capture, guard)
    }

    /// The messages of all WARN events seen so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

struct WarnSubscriber(Arc<WarnCapture>);

impl tracing::Subscriber for WarnSubscriber {
    fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _attrs: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        if *event.metadata().level() == tracing::Level::WARN {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.messages.lock().unwrap().push(visitor.0);
        }
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}
