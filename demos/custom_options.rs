//! Customizing path syntax with PathOptions.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use unflatten::{build_record_with_options, PathOptions};

fn main() -> Result<(), Box<dyn Error>> {
    // Default format (dot separator)
    println!("Default (dot):");
    let tree = unflatten::build_record(&["a.b", "a.c"], &["1", "2"])?;
    println!("{}\n", tree);

    // Slash separator (useful for URL- or filesystem-shaped headers)
    println!("Slash separator:");
    let slash = PathOptions::new().with_separator('/');
    let tree = build_record_with_options(&["/a/b", "/a/c"], &["1", "2"], &slash)?;
    println!("{}\n", tree);

    // JSONPath-style prefix, stripped once before splitting
    println!("Stripped `$.` prefix:");
    let jsonpath = PathOptions::new().with_strip_prefix("$.");
    let tree = build_record_with_options(&["$.user.name"], &["Alice"], &jsonpath)?;
    println!("{}\n", tree);

    // Index classification disabled: numeric tokens become field names
    println!("Indices disabled:");
    let fields_only = PathOptions::new().with_indices(false);
    let tree = build_record_with_options(&["a.0", "a.1"], &["x", "y"], &fields_only)?;
    println!("{}", tree);

    Ok(())
}
