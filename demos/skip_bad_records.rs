//! Recovering from bad records without aborting the run.
//!
//! Building a record returns a `Result`, so a pipeline can drop a ragged
//! row and keep going instead of failing the whole batch.
//!
//! Run with: cargo run --example skip_bad_records

use std::error::Error;
use unflatten::{PathOptions, RecordBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let builder = RecordBuilder::new(&["id", "tags.0", "tags.1"], &PathOptions::new())?;

    // The second row is ragged: it lost a column somewhere upstream.
    let rows = vec![
        vec!["1", "red", "blue"],
        vec!["2", "green"],
        vec!["3", "cyan", "magenta"],
    ];

    let mut kept = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        match builder.build(row) {
            Ok(tree) => kept.push(tree),
            Err(err) => eprintln!("skipping record {}: {}", index, err),
        }
    }

    println!("kept {} of {} records", kept.len(), rows.len());
    for tree in &kept {
        println!("{}", serde_json::to_string(tree)?);
    }

    Ok(())
}
