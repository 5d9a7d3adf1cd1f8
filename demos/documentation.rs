//! A full documentation page: table of contents, colors, typography.
//!
//! Prints the rendered HTML to stdout:
//!
//! ```sh
//! cargo run --example documentation > page.html
//! ```

use kitter_rs::{
    ColorGroup, ColorSwatch, Component, ContentsItem, DocumentContents, Documentation,
    KitterConfig, Page, PageDescription, PageTitle, RenderContext, ScrollToTop, Text,
    TypographyGroup, TypographySample, base_stylesheet, scaffold::CONFIG_FILE_NAME,
};

fn main() {
    env_logger::init();

    // Pick up a scaffolded kitter.toml when one is present; otherwise
    // every component uses its built-in defaults.
    let config = KitterConfig::load(CONFIG_FILE_NAME).unwrap_or_default();
    let ctx = RenderContext::new(config, base_stylesheet());

    let page = Documentation::new(vec![
        ScrollToTop::new().boxed(),
        Page::new(vec![
            PageTitle::new("Documentation Page").boxed(),
            PageDescription::new(vec![
                Text::new("Every kitter component on one page.").boxed(),
            ])
            .boxed(),
            DocumentContents::new(vec![
                ContentsItem::new("Colors", "colors"),
                ContentsItem::new("Typography", "typography"),
            ])
            .boxed(),
        ])
        .center(true)
        .with_id("toc")
        .boxed(),
        Page::new(vec![
            ColorGroup::new(
                "Palette",
                vec![
                    ColorSwatch::new("bg-black", "Black").boxed(),
                    ColorSwatch::new("bg-white", "White").boxed(),
                    ColorSwatch::new("bg-blue-500", "Blue 500").boxed(),
                    ColorSwatch::new("bg-emerald-500", "Emerald 500").boxed(),
                ],
            )
            .boxed(),
        ])
        .with_id("colors")
        .boxed(),
        Page::new(vec![
            TypographyGroup::new(
                "Type Scale",
                vec![
                    TypographySample::new("text-sm font-mono").boxed(),
                    TypographySample::new("text-md font-mono").boxed(),
                    TypographySample::new("text-xl font-mono").boxed(),
                    TypographySample::new("text-2xl font-mono").boxed(),
                    TypographySample::new("text-4xl font-light font-mono")
                        .with_sample_text("Sphinx of black quartz, judge my vow")
                        .boxed(),
                ],
            )
            .boxed(),
        ])
        .with_id("typography")
        .boxed(),
    ]);

    let body = page.render(&ctx).to_html();
    println!(
        "<!DOCTYPE html><html><head><title>Documentation Page</title></head><body>{}</body></html>",
        body
    );
}
