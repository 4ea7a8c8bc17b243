//! Pattern 1: Immutable Value Object
//! Construction-time validation, defensive copies, read-only accessors
//!
//! Run with: cargo run --bin p1_immutable

use design_patterns::{ImmutableRecord, PatternError};

fn round_trip_example() {
    let items = vec!["alpha".to_string(), "beta".to_string()];
    let record = ImmutableRecord::new("sample", 42, Some(&items)).expect("items were provided");

    println!("Constructed record:");
    println!("  text():  {}", record.text());
    println!("  value(): {}", record.value());
    println!("  items(): {:?}", record.items());
}

fn defensive_copy_example() {
    let mut items = vec!["alpha".to_string(), "beta".to_string()];
    let record = ImmutableRecord::new("sample", 42, Some(&items)).expect("items were provided");

    // The constructor copied the vector, so these mutations are invisible
    // to the record.
    items.push("gamma".to_string());
    items[0] = "mutated".to_string();

    println!("Caller's vector after mutation: {:?}", items);
    println!("Record still sees:              {:?}", record.items());
}

fn read_only_view_example() {
    let items = vec!["alpha".to_string()];
    let record = ImmutableRecord::new("sample", 1, Some(&items)).expect("items were provided");

    let view = record.items();
    // Mutation through the view does not compile:
    // view.push("delta".to_string()); // Error: no method `push` on `&[String]`
    // view[0] = "delta".to_string();  // Error: cannot assign through a `&` slice
    println!("Read-only view: {:?}", view);
    println!("Re-read after handing out the view: {:?}", record.items());
}

fn missing_items_example() {
    match ImmutableRecord::new("sample", 42, None) {
        Err(PatternError::MissingItems) => {
            println!("Construction rejected: {}", PatternError::MissingItems)
        }
        Ok(_) => println!("Unexpected success"),
    }
}

fn main() {
    println!("=== Round-Trip Reads ===\n");
    round_trip_example();

    println!("\n=== Defensive Copy ===\n");
    defensive_copy_example();

    println!("\n=== Read-Only View ===\n");
    read_only_view_example();

    println!("\n=== Missing Sequence ===\n");
    missing_items_example();

    println!("\n=== Key Points ===");
    println!("1. All fields are set at construction; there are no setters");
    println!("2. The input sequence is copied in, never retained");
    println!("3. Accessors return owned scalars or shared borrows");
    println!("4. A shared slice rejects mutation at compile time");
}
