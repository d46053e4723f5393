//! Building a nested document from one flat record.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use unflatten::build_record;

fn main() -> Result<(), Box<dyn Error>> {
    // Column names carry the structure; one row of values fills it in.
    let headers = [
        "user.name",
        "user.email",
        "items.0.sku",
        "items.0.qty",
        "items.1.sku",
    ];
    let values = ["Alice Johnson", "alice@example.com", "A-1001", "2", "B-2002"];

    let tree = build_record(&headers, &values)?;

    // Any serde serializer can render the finished tree.
    let json = serde_json::to_string_pretty(&tree)?;
    println!("JSON output:\n{}\n", json);

    // items[1].qty was never written, so items[1] only has a sku.
    let items = tree.get("items").and_then(|n| n.as_array()).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[1].get("qty").is_none());
    println!("✓ Built {} items", items.len());

    Ok(())
}
