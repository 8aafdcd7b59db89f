#![cfg(feature = "tracing")]

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use cow_stack::Stack;
use tracing::{
    Event, Metadata, Subscriber,
    field::{Field, Visit},
    span::{Attributes, Id, Record},
    subscriber::with_default,
};

const TARGET: &str = "cow_stack::storage";

#[test]
fn test_allocation_and_release_are_traced() {
    let collector = RecordingSubscriber::default();
    with_default(collector.clone(), || {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.pop();
        stack.pop();
    });

    let events = collector.events();
    assert_eq!(
        events.iter().map(|e| e.message.as_str()).collect::<Vec<_>>(),
        ["allocating storage", "releasing drained storage"]
    );
    assert!(events.iter().all(|e| e.target == TARGET));
    assert_eq!(events[0].field("capacity"), Some(1));
}

#[test]
fn test_copy_on_write_is_traced_once() {
    let original = Stack::from([1, 2, 3]);
    let collector = RecordingSubscriber::default();
    with_default(collector.clone(), || {
        let mut copy = original.clone();
        copy.push(0);
        copy.push(-1);
        assert_eq!(copy, [-1, 0, 1, 2, 3]);
    });

    let events = collector.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].target, TARGET);
    assert_eq!(events[0].message, "copying shared storage");
    assert_eq!(events[0].field("len"), Some(3));
    assert_eq!(events[0].field("additional"), Some(1));
}

#[test]
fn test_reads_are_not_traced() {
    let stack = Stack::from([1, 2, 3]);
    let collector = RecordingSubscriber::default();
    with_default(collector.clone(), || {
        let copy = stack.clone();
        assert_eq!(copy.peek(), Some(&1));
        assert_eq!(copy.iter().sum::<i32>(), 6);
        assert_eq!(copy.slice(1..).len(), 2);
    });

    assert!(collector.events().is_empty());
}

#[derive(Clone, Default)]
struct RecordingSubscriber {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl RecordingSubscriber {
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().expect("lock").clone()
    }
}

impl Subscriber for RecordingSubscriber {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut captured = CapturedEvent {
            target: event.metadata().target().to_owned(),
            ..CapturedEvent::default()
        };
        event.record(&mut captured);
        self.events.lock().expect("lock").push(captured);
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[derive(Clone, Debug, Default)]
struct CapturedEvent {
    target: String,
    message: String,
    fields: Vec<(&'static str, u64)>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<u64> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|&(_, value)| value)
    }
}

impl Visit for CapturedEvent {
    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.push((field.name(), value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}
