//! # Seed Data Generator
//!
//! Populates a store file with demo inventory for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 items (default)
//! cargo run -p stockroom-store --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-store --bin seed -- --count 200
//!
//! # Specify store path
//! cargo run -p stockroom-store --bin seed -- --path ./data/stockroom.json
//! ```
//!
//! Each item gets:
//! - Name: `{PART} {FINISH}` (e.g. "Hex Bolt Zinc")
//! - Quantity: 1 - 250
//! - Price: $0.25 - $49.99

use std::env;

use stockroom_core::{ItemInput, Money};
use stockroom_store::{Store, StoreConfig};
use tracing_subscriber::EnvFilter;

/// Part names for realistic test data
const PARTS: &[&str] = &[
    "Hex Bolt",
    "Carriage Bolt",
    "Wing Nut",
    "Lock Nut",
    "Flat Washer",
    "Spring Washer",
    "Wood Screw",
    "Machine Screw",
    "Wall Anchor",
    "Cotter Pin",
    "Hinge",
    "Shelf Bracket",
    "Cable Tie",
    "Hose Clamp",
    "Eye Hook",
];

/// Finish variants
const FINISHES: &[&str] = &["Zinc", "Brass", "Stainless", "Black Oxide", "Galvanized"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut path = String::from("./stockroom_dev.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--path" | "-p" => {
                if i + 1 < args.len() {
                    path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>     Number of items to generate (default: 50)");
                println!("  -p, --path <PATH>   Store file path (default: ./stockroom_dev.json)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockroom Seed Data Generator");
    println!("================================");
    println!("Store: {}", path);
    println!("Items: {}", count);
    println!();

    let store = Store::open(StoreConfig::new(&path))?;
    println!("✓ Store opened (default user: admin / 123)");

    let items = store.items();
    let existing = items.count()?;
    if existing > 0 {
        println!("⚠ Store already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the store file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating items...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let input = generate_item(seed);
        if let Err(e) = items.insert(&input) {
            eprintln!("Failed to insert {}: {}", input.name, e);
            continue;
        }
        generated += 1;

        if generated % 25 == 0 {
            println!("  Generated {} items...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} items in {:?}", generated, elapsed);

    println!();
    println!("Verifying search...");
    println!("  Search 'bolt': {} results", items.search("bolt")?.len());
    println!("  Search '1': {} results", items.search("1")?.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single item with realistic data.
fn generate_item(seed: usize) -> ItemInput {
    let part = PARTS[seed % PARTS.len()];
    let finish = FINISHES[(seed / PARTS.len()) % FINISHES.len()];

    // $0.25 - $49.99
    let price_cents = 25 + ((seed * 37) % 4975) as i64;

    // 1 - 250
    let quantity = 1 + ((seed * 13) % 250) as i64;

    ItemInput::new(
        format!("{} {}", part, finish),
        quantity,
        Money::from_cents(price_cents),
    )
}
