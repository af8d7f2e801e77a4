//! Direct-registry walkthrough: payloads deduplicated by value equality.
//!
//! Run with: `cargo run --example direct`

use signalcast::{Broadcast, HandlerError};

#[derive(Clone, Debug, PartialEq)]
struct Order {
    id: u64,
    item: String,
}

fn main() {
    let bus: Broadcast<Order> = Broadcast::new();

    bus.handle(|signal, order: Order| {
        println!("[fulfil] signal={signal} order={} item={}", order.id, order.item);
        Ok(())
    });
    bus.handle(|signal, order: Order| {
        if order.item == "restricted" {
            return Err(HandlerError::rejected(signal));
        }
        println!("[notify] signal={signal} order={}", order.id);
        Ok(())
    });

    let coffee = Order {
        id: 1,
        item: "coffee".to_string(),
    };

    bus.watch("placed", coffee.clone());
    bus.watch("placed", coffee.clone()); // value-equal: deduplicated
    bus.watch(
        "placed",
        Order {
            id: 2,
            item: "restricted".to_string(),
        },
    );
    println!("listeners: {}", bus.watch_count("placed"));

    println!("\n=== broadcast: 2 handlers x 2 listeners ===");
    // The rejecting handler's error is observed and discarded; delivery to
    // the other pairs is unaffected.
    bus.broadcast("placed");

    println!("\n=== unwatch, then broadcast again ===");
    bus.unwatch("placed", &coffee);
    bus.broadcast("placed");

    bus.clean_all();
    println!("\nafter clean_all: has_watch={}", bus.has_watch("placed"));
}
