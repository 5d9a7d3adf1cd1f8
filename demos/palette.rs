//! Prints the decoded forms of the built-in background palette.
//!
//! ```sh
//! cargo run --example palette
//! ```

use kitter_rs::{ColorSwatch, Component, KitterConfig, RenderContext, base_stylesheet};

const TOKENS: &[(&str, &str)] = &[
    ("bg-black", "Black"),
    ("bg-white", "White"),
    ("bg-gray-200", "Gray 200"),
    ("bg-gray-500", "Gray 500"),
    ("bg-red-500", "Red 500"),
    ("bg-orange-500", "Orange 500"),
    ("bg-emerald-500", "Emerald 500"),
    ("bg-blue-500", "Blue 500"),
    ("bg-indigo-500", "Indigo 500"),
    ("bg-violet-500", "Violet 500"),
];

fn main() {
    env_logger::init();
    let ctx = RenderContext::new(KitterConfig::default(), base_stylesheet());

    for (token, label) in TOKENS {
        let swatch = ColorSwatch::new(*token, *label);
        swatch.render(&ctx);

        let readout = swatch.readout().expect("resolved after render");
        println!(
            "{:<14} {:<12} {:<10} {:<26} {}",
            token,
            label,
            readout.hex.as_deref().unwrap_or("-"),
            readout.oklch.as_deref().unwrap_or("-"),
            readout.hsl.as_deref().unwrap_or("-"),
        );
    }
}
