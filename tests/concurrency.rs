//! Concurrent register/remove/dispatch on one shared dispatcher.
//!
//! Every callback appends its own index to the per-dispatch payload. A dispatch
//! that observed a consistent snapshot therefore records a contiguous,
//! increasing run of indices.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use evdispatch::{CallbackFn, CallbackRef, Dispatcher, Event, EventCategory};
use parking_lot::Mutex;

type Trace = Arc<Mutex<Vec<usize>>>;

fn tracer(index: usize) -> CallbackRef<u32, Trace> {
    CallbackFn::arc(format!("tracer-{index}"), move |e: &Event<u32, Trace>| {
        e.payload().lock().push(index);
        Ok(())
    })
}

fn is_contiguous(seq: &[usize]) -> bool {
    seq.windows(2).all(|w| w[1] == w[0] + 1)
}

#[test]
fn parallel_dispatch_on_disjoint_categories() {
    const CATEGORIES: u16 = 8;
    const PER_CATEGORY: usize = 5;
    const ROUNDS: usize = 200;

    let d: Dispatcher<u32, Trace> = Dispatcher::new(7);
    for cat in 0..CATEGORIES {
        for i in 0..PER_CATEGORY {
            d.register(EventCategory::new(cat), tracer(i));
        }
    }

    let done = AtomicUsize::new(0);
    thread::scope(|s| {
        for cat in 0..CATEGORIES {
            let d = &d;
            let done = &done;
            s.spawn(move || {
                for _ in 0..ROUNDS {
                    let trace = Trace::default();
                    d.dispatch(EventCategory::new(cat), Arc::clone(&trace)).unwrap();
                    assert_eq!(*trace.lock(), (0..PER_CATEGORY).collect::<Vec<_>>());
                }
                done.fetch_add(1, Ordering::SeqCst);
            });
        }
    });

    assert_eq!(done.load(Ordering::SeqCst), usize::from(CATEGORIES));
}

#[test]
fn dispatch_never_sees_torn_sequence() {
    const CALLBACKS: usize = 64;

    let d: Dispatcher<u32, Trace> = Dispatcher::new(1);
    let stop = AtomicBool::new(false);

    thread::scope(|s| {
        // Writer: grows the sequence one callback at a time, then shrinks it from the front.
        s.spawn(|| {
            let mut ids = Vec::with_capacity(CALLBACKS);
            for i in 0..CALLBACKS {
                ids.push(d.register(EventCategory::MESSAGE, tracer(i)));
                thread::yield_now();
            }
            for id in ids {
                assert!(d.remove(EventCategory::MESSAGE, id));
                thread::yield_now();
            }
            stop.store(true, Ordering::SeqCst);
        });

        for _ in 0..4 {
            s.spawn(|| {
                while !stop.load(Ordering::SeqCst) {
                    let trace = Trace::default();
                    d.dispatch(EventCategory::MESSAGE, Arc::clone(&trace)).unwrap();
                    let seen = trace.lock();
                    assert!(is_contiguous(&seen), "torn snapshot: {seen:?}");
                    let starts_at_zero = seen.first().map_or(true, |&first| first == 0);
                    let ends_at_last = seen.last().map_or(true, |&last| last == CALLBACKS - 1);
                    assert!(starts_at_zero || ends_at_last, "not a prefix or suffix: {seen:?}");
                }
            });
        }
    });

    assert!(d.is_empty());
}

#[test]
fn callbacks_can_read_dispatcher_while_writer_waits() {
    let d: Arc<Dispatcher<u32, Trace>> = Arc::new(Dispatcher::new(5));
    let writer: Arc<Mutex<Option<thread::JoinHandle<()>>>> = Arc::default();

    let weak = Arc::downgrade(&d);
    let slot = Arc::clone(&writer);
    d.register(
        EventCategory::MESSAGE,
        CallbackFn::arc("inspect", move |e: &Event<u32, Trace>| {
            let Some(d) = weak.upgrade() else {
                return Ok(());
            };
            // Queue a writer behind this dispatch's read lock.
            let w = Arc::clone(&d);
            *slot.lock() = Some(thread::spawn(move || {
                w.register(EventCategory::COMMIT, tracer(9));
            }));
            thread::sleep(Duration::from_millis(100));

            let mut seen = e.payload().lock();
            seen.push(d.callback_count(EventCategory::MESSAGE));
            seen.push(d.categories().len());
            seen.push(usize::from(d.is_empty()));
            seen.push(usize::from(format!("{d:?}").starts_with("Dispatcher")));
            Ok(())
        }),
    );

    let trace = Trace::default();
    let (tx, rx) = mpsc::channel();
    let (dispatcher, payload) = (Arc::clone(&d), Arc::clone(&trace));
    thread::spawn(move || {
        let res = dispatcher.dispatch(EventCategory::MESSAGE, payload);
        let _ = tx.send(res.is_ok());
    });

    let ok = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("dispatch deadlocked behind the queued writer");
    assert!(ok);
    assert_eq!(*trace.lock(), [1, 1, 0, 1]);

    let handle = writer.lock().take().expect("writer spawned");
    handle.join().expect("writer completes");
    assert_eq!(d.callback_count(EventCategory::COMMIT), 1);
}

#[test]
fn writers_are_not_starved_by_dispatch_load() {
    const READERS: usize = 4;
    const WRITES: usize = 20;

    let d: Dispatcher<u32, Trace> = Dispatcher::new(3);
    d.register(
        EventCategory::MESSAGE,
        CallbackFn::arc("slow", |_: &Event<u32, Trace>| {
            thread::sleep(Duration::from_millis(1));
            Ok(())
        }),
    );
    let stop = AtomicBool::new(false);

    let worst = thread::scope(|s| {
        for _ in 0..READERS {
            s.spawn(|| {
                while !stop.load(Ordering::SeqCst) {
                    d.dispatch(EventCategory::MESSAGE, Trace::default()).unwrap();
                }
            });
        }
        // Let the readers overlap before timing writers.
        thread::sleep(Duration::from_millis(20));

        let mut worst = Duration::ZERO;
        for i in 0..WRITES {
            let started = Instant::now();
            let id = d.register(EventCategory::COMMIT, tracer(i));
            worst = worst.max(started.elapsed());
            assert!(d.remove(EventCategory::COMMIT, id));
        }
        stop.store(true, Ordering::SeqCst);
        worst
    });

    assert!(
        worst < Duration::from_millis(500),
        "writer waited {worst:?} under dispatch load"
    );
    assert_eq!(d.callback_count(EventCategory::COMMIT), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_across_tokio_tasks() {
    let d: Arc<Dispatcher<u32, Trace>> = Arc::new(Dispatcher::new(42));
    let counter = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for task in 0..16u16 {
        let d = Arc::clone(&d);
        let counter = Arc::clone(&counter);
        handles.push(tokio::task::spawn_blocking(move || {
            let category = EventCategory::new(1000 + task % 4);
            let hits = Arc::clone(&counter);
            let cb: CallbackRef<u32, Trace> =
                CallbackFn::arc("count", move |e: &Event<u32, Trace>| {
                    assert_eq!(*e.source(), 42);
                    hits.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                });
            let id = d.register(category, cb);
            d.dispatch(category, Trace::default()).unwrap();
            assert!(d.remove(category, id));
        }));
    }
    for h in handles {
        h.await.expect("task completes");
    }

    // Each task's own callback ran at least once (its own dispatch).
    assert!(counter.load(Ordering::SeqCst) >= 16);
    assert!(d.is_empty());
}
