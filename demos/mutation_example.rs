//! Example demonstrating mutation and layout-preserving serialization.
//!
//! ```bash
//! cargo run --example mutation_example
//! ```

use propfile::Properties;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Propfile Mutation & Serialization Example ===\n");

    let mut props = Properties::new();
    props.parse(
        "\
# Configuration for my app
border_size = 3
active_opacity = 0.9

# Window settings
gaps = 10
title = main window\\
with a second line
",
    );

    println!("Initial configuration loaded\n");

    // ========== VALUE MUTATIONS ==========
    println!("Mutating configuration values...\n");

    props.set("border_size", "5");
    println!("  border_size: 3 -> 5");

    props.set("active_opacity", "1.0");
    println!("  active_opacity: 0.9 -> 1.0");

    props.set("blur", "1");
    println!("  added new value: blur = 1");

    if let Some(old_value) = props.remove("gaps") {
        println!("  removed gaps (was: {})", old_value);
    }

    // The multi-line title collapses to one line once updated
    props.set("title", "renamed window");
    println!("  title: multi-line -> renamed window");

    // ========== VERIFICATION ==========
    println!("\nVerifying mutations...\n");

    assert_eq!(props.get_int("border_size")?, 5);
    assert_eq!(props.get_float("active_opacity")?, 1.0);
    assert_eq!(props.get("title"), Some("renamed window"));
    assert!(!props.contains("gaps"));
    println!("  all values as expected");

    // ========== SERIALIZATION ==========
    println!("\nSerialized configuration:\n");
    println!("{}", props.serialize());

    let out_path = std::env::temp_dir().join("propfile_mutation_example.properties");
    props.save_as(&out_path)?;
    println!("Saved to: {}", out_path.display());

    // Verify we can read it back
    let mut reloaded = Properties::new();
    reloaded.load(&out_path)?;
    assert_eq!(reloaded.get_int("border_size")?, 5);
    assert_eq!(reloaded.get("title"), Some("renamed window"));
    println!("Verified round-trip: parse -> mutate -> save -> parse");

    std::fs::remove_file(&out_path).ok();

    Ok(())
}
