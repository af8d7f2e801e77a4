//! Keyed-registry walkthrough: user events deduplicated by user id.
//!
//! Run with: `cargo run --example user_events --features logging`

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use signalcast::{log_writer, Keyed, KeyedBroadcast, ListenerRef};

#[derive(Clone, Debug)]
struct UserEvent {
    user_id: u64,
    action: String,
    metadata: HashMap<String, String>,
}

struct UserEventListener {
    event: UserEvent,
}

impl Keyed for UserEventListener {
    type Key = u64;
    type Value = UserEvent;

    fn key(&self) -> u64 {
        self.event.user_id
    }

    fn value(&self) -> UserEvent {
        self.event.clone()
    }
}

fn listener(user_id: u64, action: &str, meta: &[(&str, &str)]) -> ListenerRef<u64, UserEvent> {
    Arc::new(UserEventListener {
        event: UserEvent {
            user_id,
            action: action.to_string(),
            metadata: meta
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        },
    })
}

fn main() {
    let bus: KeyedBroadcast<u64, UserEvent> = KeyedBroadcast::new();

    bus.handle(log_writer::<UserEvent>());
    bus.handle(|signal, event: UserEvent| {
        println!("[audit] signal={signal} user={} action={}", event.user_id, event.action);
        Ok(())
    });

    println!("=== dedup by user id ===");
    let login = listener(1, "login", &[("ip", "192.168.1.1")]);
    bus.watch("user_activity", login.clone());
    bus.watch("user_activity", listener(2, "purchase", &[("product", "item1")]));
    // Same user id as the first listener: ignored, original payload kept.
    bus.watch("user_activity", listener(1, "logout", &[("ip", "192.168.1.1")]));
    println!("listeners: {}", bus.watch_count("user_activity"));

    println!("\n=== broadcast user_activity ===");
    bus.broadcast("user_activity");

    println!("\n=== unwatch user 1, broadcast again ===");
    bus.unwatch("user_activity", login.as_ref());
    bus.broadcast("user_activity");

    println!("\n=== concurrent watch + broadcast ===");
    thread::scope(|s| {
        for id in 0..5 {
            let watcher = bus.clone();
            s.spawn(move || {
                watcher.watch(
                    "concurrent_activity",
                    listener(100 + id, &format!("action_{id}"), &[("concurrent", "true")]),
                );
            });
        }
        for _ in 0..3 {
            let caster = bus.clone();
            s.spawn(move || caster.broadcast("concurrent_activity"));
        }
    });
    println!("concurrent listeners: {}", bus.watch_count("concurrent_activity"));

    println!("\n=== status queries ===");
    println!("has_watch(status_check) = {}", bus.has_watch("status_check"));
    for i in 0..3 {
        bus.watch("status_check", listener(4000 + i, "status", &[]));
    }
    println!(
        "after 3 watches: has_watch={} count={}",
        bus.has_watch("status_check"),
        bus.watch_count("status_check")
    );
    bus.watch("status_check", listener(4000, "duplicate", &[]));
    println!("after duplicate id: count={}", bus.watch_count("status_check"));
    bus.clean("status_check");
    println!(
        "after clean: has_watch={} count={}",
        bus.has_watch("status_check"),
        bus.watch_count("status_check")
    );

    println!("\n=== range over all signals ===");
    bus.range(|signal, count| {
        println!("signal={signal:<20} listeners={count}");
        true
    });

    println!("\n=== range with early exit ===");
    let mut visited = 0;
    bus.range(|signal, count| {
        println!("signal={signal:<20} listeners={count}");
        visited += 1;
        visited < 2
    });
}
