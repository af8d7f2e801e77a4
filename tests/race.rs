//! Cross-thread stress tests: many threads hammering one registry instance
//! with watch/unwatch/broadcast. The exact counts observed mid-run are
//! unspecified; these tests assert completion without panics and sane final
//! state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use rand::Rng;
use signalcast::{Broadcast, Keyed, KeyedBroadcast, ListenerRef};

#[derive(Clone)]
struct ChurnEvent {
    id: usize,
    tag: String,
}

struct ChurnListener {
    event: ChurnEvent,
}

impl Keyed for ChurnListener {
    type Key = usize;
    type Value = ChurnEvent;

    fn key(&self) -> usize {
        self.event.id
    }

    fn value(&self) -> ChurnEvent {
        self.event.clone()
    }
}

fn churn(id: usize, tag: String) -> ListenerRef<usize, ChurnEvent> {
    Arc::new(ChurnListener {
        event: ChurnEvent { id, tag },
    })
}

#[test]
fn concurrent_watch_unwatch_broadcast_one_signal() {
    const THREADS: usize = 10;
    const OPS: usize = 500;

    let bus: KeyedBroadcast<usize, ChurnEvent> = KeyedBroadcast::new();
    let deliveries = Arc::new(AtomicUsize::new(0));

    for _ in 0..5 {
        let deliveries = Arc::clone(&deliveries);
        bus.handle(move |_, _| {
            deliveries.fetch_add(1, Ordering::Relaxed);
            Ok(())
        });
    }

    // Seed one stable listener so every broadcast delivers something.
    bus.watch("churn", churn(usize::MAX, "seed".to_string()));

    thread::scope(|s| {
        for t in 0..THREADS {
            let watcher = bus.clone();
            s.spawn(move || {
                let mut rng = rand::thread_rng();
                for i in 0..OPS {
                    let id = rng.gen_range(0..100);
                    watcher.watch("churn", churn(id, format!("value-{t}-{i}")));
                }
            });

            let remover = bus.clone();
            s.spawn(move || {
                let mut rng = rand::thread_rng();
                for _ in 0..OPS {
                    let id = rng.gen_range(0..100);
                    remover.unwatch("churn", churn(id, String::new()).as_ref());
                }
            });

            let caster = bus.clone();
            s.spawn(move || {
                for _ in 0..OPS {
                    caster.broadcast("churn");
                }
            });
        }
    });

    // Keys are drawn from 0..100 plus the seed, so dedup bounds the set.
    assert!(bus.watch_count("churn") <= 101);
    assert!(bus.has_watch("churn"));
    assert!(deliveries.load(Ordering::Relaxed) > 0);
}

#[test]
fn concurrent_operations_across_many_signals() {
    const SIGNALS: usize = 10;
    const OPS: usize = 200;

    let bus: KeyedBroadcast<usize, ChurnEvent> = KeyedBroadcast::new();
    let deliveries = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&deliveries);
    bus.handle(move |_, _| {
        sink.fetch_add(1, Ordering::Relaxed);
        Ok(())
    });

    let signals: Vec<String> = (0..SIGNALS).map(|i| format!("signal-{i}")).collect();

    thread::scope(|s| {
        for signal in &signals {
            let watcher = bus.clone();
            s.spawn(move || {
                let mut rng = rand::thread_rng();
                for i in 0..OPS {
                    watcher.watch(signal, churn(rng.gen_range(0..100), format!("v-{i}")));
                }
            });

            let remover = bus.clone();
            s.spawn(move || {
                let mut rng = rand::thread_rng();
                for _ in 0..OPS {
                    remover.unwatch(signal, churn(rng.gen_range(0..100), String::new()).as_ref());
                }
            });

            let caster = bus.clone();
            s.spawn(move || {
                for _ in 0..OPS {
                    caster.broadcast(signal);
                }
            });
        }
    });

    let mut seen = 0;
    bus.range(|_, count| {
        assert!(count <= 100);
        seen += 1;
        true
    });
    // Every signal got at least one watch, so every partition exists.
    assert_eq!(seen, SIGNALS);
}

#[test]
fn concurrent_handler_registration_and_broadcast() {
    const OPS: usize = 300;

    let bus: Broadcast<usize> = Broadcast::new();
    let deliveries = Arc::new(AtomicUsize::new(0));

    thread::scope(|s| {
        let registrar = bus.clone();
        let counter = Arc::clone(&deliveries);
        s.spawn(move || {
            for _ in 0..OPS {
                let counter = Arc::clone(&counter);
                registrar.handle(move |_, _| {
                    counter.fetch_add(1, Ordering::Relaxed);
                    Ok(())
                });
            }
        });

        let caster = bus.clone();
        s.spawn(move || {
            for i in 0..OPS {
                caster.watch("churn", i);
                caster.broadcast("churn");
            }
        });
    });

    assert_eq!(bus.watch_count("churn"), OPS);
}

#[test]
fn concurrent_reads_during_mutation() {
    const OPS: usize = 500;

    let bus: Broadcast<usize> = Broadcast::new();

    thread::scope(|s| {
        let writer = bus.clone();
        s.spawn(move || {
            for i in 0..OPS {
                writer.watch("reads", i);
                if i % 7 == 0 {
                    writer.clean("reads");
                }
            }
        });

        let reader = bus.clone();
        s.spawn(move || {
            for _ in 0..OPS {
                let count = reader.watch_count("reads");
                assert!(count <= OPS);
                let _ = reader.has_watch("reads");
                reader.range(|_, _| true);
            }
        });
    });
}
