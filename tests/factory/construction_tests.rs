//! Construction is pure allocation: fresh boxes, no log output.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

use chat_client::application::conformance;
use chat_client::domain::delegates::{DelegateFactory, DelegateKind};
use chat_client::infrastructure::delegates::RestDelegateFactory;

/// Counts every event it sees, at any level.
struct EventCounter(Arc<AtomicUsize>);

impl Subscriber for EventCounter {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, _: &Event<'_>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn test_construction_emits_no_events() {
    let factory = RestDelegateFactory::new();
    let requests = conformance::sample_requests().unwrap();
    let events = Arc::new(AtomicUsize::new(0));

    tracing::subscriber::with_default(EventCounter(Arc::clone(&events)), || {
        for request in requests {
            factory.create(request).unwrap();
        }
        assert_eq!(events.load(Ordering::SeqCst), 0);

        // The counter itself is live.
        tracing::trace!("after construction");
    });

    assert_eq!(events.load(Ordering::SeqCst), 1);
}

#[test]
fn test_every_kind_is_a_distinct_allocation() {
    let factory = RestDelegateFactory::new();
    let first = conformance::sample_requests().unwrap();
    let second = conformance::sample_requests().unwrap();
    assert_eq!(first.len(), DelegateKind::ALL.len());

    for (a, b) in first.into_iter().zip(second) {
        let a = factory.create(a).unwrap();
        let b = factory.create(b).unwrap();

        assert_eq!(a.kind(), b.kind());
        assert!(
            !std::ptr::addr_eq(a.address(), b.address()),
            "{} delegates share an address",
            a.kind()
        );
    }
}
