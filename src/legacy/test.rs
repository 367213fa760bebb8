use super::*;
use crate::{args, channel::Registry, common::init_tracing, CallbackError};
use parking_lot::Mutex;
use std::sync::Arc;

type Calls = Arc<Mutex<Vec<&'static str>>>;

fn recorder(calls: &Calls, label: &'static str) -> Callback {
    let calls = calls.clone();
    Callback::new(move |_| {
        calls.lock().push(label);
        Ok(())
    })
}

#[test]
fn end_to_end() {
    init_tracing();
    let events = LegacyEvents::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let f = Callback::new(move |args| {
        sink.lock().push(args.get::<&str>(0).copied());
        Ok(())
    });

    assert!(events.subscribe("y", f.clone()));
    events.trigger("y", args!["a"]).unwrap();
    assert_eq!(*seen.lock(), [Some("a")]);

    assert!(events.unsubscribe("y", &f));
    assert!(!events.unsubscribe("y", &f));
    assert!(events.contains("y"));
    assert_eq!(events.len("y"), 0);
}

#[test]
fn unknown_event_is_noop() {
    let events = LegacyEvents::new();
    events.trigger("never", args![1]).unwrap();
    assert!(!events.contains("never"));
    assert!(!events.unsubscribe("never", &Callback::new(|_| Ok(()))));
}

#[test]
fn stop_ends_trigger() {
    let events = LegacyEvents::new();
    let calls = Calls::default();
    events.subscribe("stop", recorder(&calls, "first"));
    events.subscribe("stop", Callback::new(|_| Ok(false)));
    events.subscribe("stop", recorder(&calls, "skipped"));

    events.trigger("stop", args![]).unwrap();
    assert_eq!(*calls.lock(), ["first"]);

    events.trigger("stop", args![]).unwrap();
    assert_eq!(*calls.lock(), ["first", "first"]);
}

#[test]
fn only_stop_ends_trigger() {
    let events = LegacyEvents::new();
    let calls = Calls::default();
    events.subscribe("go", Callback::new(|_| Ok(())));
    events.subscribe("go", Callback::new(|_| Ok(true)));
    events.subscribe("go", Callback::new(|_| Ok(Flow::Continue)));
    events.subscribe("go", recorder(&calls, "last"));

    events.trigger("go", args![0]).unwrap();
    assert_eq!(*calls.lock(), ["last"]);
}

#[test]
fn failure_names_event() {
    let events = LegacyEvents::new();
    let calls = Calls::default();
    events.subscribe("boom", recorder(&calls, "a"));
    events.subscribe(
        "boom",
        Callback::new(|_| -> Result<(), CallbackError> { Err("bad input".into()) }),
    );
    events.subscribe("boom", recorder(&calls, "c"));

    let err = events.trigger("boom", args![]).unwrap_err();
    assert_eq!(err.to_string(), "boom callback threw exception: bad input");
    match &err {
        Error::Callback { event, source } => {
            assert_eq!(event, "boom");
            assert_eq!(source.to_string(), "bad input");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(*calls.lock(), ["a"]);
}

#[test]
fn duplicates_and_single_removal() {
    let events = LegacyEvents::new();
    let calls = Calls::default();
    let f = recorder(&calls, "f");
    events.subscribe("dup", f.clone());
    events.subscribe("dup", f.clone());
    assert_eq!(events.len("dup"), 2);

    events.trigger("dup", args![]).unwrap();
    assert_eq!(calls.lock().len(), 2);

    assert!(events.unsubscribe("dup", &f));
    events.trigger("dup", args![]).unwrap();
    assert_eq!(calls.lock().len(), 3);
}

#[test]
fn separate_from_registry() {
    let events = LegacyEvents::new();
    let registry = Registry::new();
    let calls = Calls::default();
    events.subscribe("shared", recorder(&calls, "legacy"));
    let _ = registry.get("shared").subscribe(recorder(&calls, "channel"));

    events.trigger("shared", args![]).unwrap();
    assert_eq!(*calls.lock(), ["legacy"]);
    registry.get("shared").trigger(args![]).unwrap();
    assert_eq!(*calls.lock(), ["legacy", "channel"]);
}

#[test]
fn process_wide_functions() {
    let calls = Calls::default();
    let f = recorder(&calls, "f");
    assert!(subscribe("legacy::test::global", f.clone()));
    trigger("legacy::test::global", args![]).unwrap();
    trigger("legacy::test::unknown", args![]).unwrap();
    assert!(unsubscribe("legacy::test::global", &f));
    assert!(!unsubscribe("legacy::test::global", &f));
    trigger("legacy::test::global", args![]).unwrap();
    assert_eq!(*calls.lock(), ["f"]);

    let channel = crate::channel::get("legacy::test::global");
    assert!(channel.is_empty());
    assert!(channel.last_args().is_none());
}

#[test]
fn subscribe_from_callback() {
    let events = Arc::new(LegacyEvents::new());
    let calls = Calls::default();
    let late = recorder(&calls, "late");
    let target = events.clone();
    events.subscribe(
        "grow",
        Callback::new(move |_| {
            target.subscribe("grow", late.clone());
            Ok(())
        }),
    );

    events.trigger("grow", args![]).unwrap();
    assert_eq!(*calls.lock(), ["late"]);
    assert_eq!(events.len("grow"), 2);
}

#[test]
fn unsubscribe_from_callback_skips_next() {
    let events = Arc::new(LegacyEvents::new());
    let calls = Calls::default();
    let own: Arc<Mutex<Option<Callback>>> = Arc::default();

    let target = events.clone();
    let slot = own.clone();
    let sink = calls.clone();
    let a = Callback::new(move |_| {
        sink.lock().push("a");
        if let Some(me) = slot.lock().take() {
            target.unsubscribe("shrink", &me);
        }
        Ok(())
    });
    *own.lock() = Some(a.clone());
    events.subscribe("shrink", a);
    events.subscribe("shrink", recorder(&calls, "b"));

    events.trigger("shrink", args![]).unwrap();
    assert_eq!(*calls.lock(), ["a"]);
    events.trigger("shrink", args![]).unwrap();
    assert_eq!(*calls.lock(), ["a", "b"]);
}
