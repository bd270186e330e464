//! Example demonstrating change listeners.

use propfile::{Properties, PropertyEvent};

fn main() {
    let mut props = Properties::new();
    props.parse("retries = 3\n");

    props.on_change_fn("logger", |event| match event {
        PropertyEvent::Added { key, value } => {
            println!("added   {} = {}", key, value);
        }
        PropertyEvent::Updated {
            key,
            old_value,
            new_value,
        } => {
            println!("updated {}: {} -> {}", key, old_value, new_value);
        }
    });

    props.set("retries", "5");
    props.set("timeout", "30");
    props.merge_map(vec![("retries", "10"), ("backoff", "250")]);

    println!("\nFinal state:\n{}", props.serialize());
}
