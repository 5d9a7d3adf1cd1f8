//! Resolution precedence, observed through rendered components.
//!
//! Per field: a call-site value beats the configured value, which beats
//! the built-in default; class-name fields append instead of replacing.

use kitter::{
    Component, Documentation, KitterConfig, RenderContext, ScrollToTop, base_stylesheet,
};

fn render(component: &dyn Component, config: KitterConfig) -> String {
    let ctx = RenderContext::new(config, base_stylesheet());
    component.render(&ctx).to_html()
}

fn configured_label(label: &str) -> KitterConfig {
    let mut config = KitterConfig::default();
    config.styles.scroll_to_top.text_override = Some(label.to_string());
    config
}

#[test]
fn test_builtin_default_label() {
    let html = render(&ScrollToTop::new(), KitterConfig::default());
    assert!(html.contains(">table of contents</span>"));
}

#[test]
fn test_configured_label_beats_default() {
    let html = render(&ScrollToTop::new(), configured_label("back to top"));
    assert!(html.contains(">back to top</span>"));
    assert!(!html.contains("table of contents"));
}

#[test]
fn test_explicit_label_beats_configured_and_default() {
    let html = render(
        &ScrollToTop::new().with_text("jump up"),
        configured_label("back to top"),
    );
    assert!(html.contains(">jump up</span>"));
    assert!(!html.contains("back to top"));
    assert!(!html.contains("table of contents"));
}

#[test]
fn test_explicit_icon_color_beats_configured() {
    let mut config = KitterConfig::default();
    config.styles.scroll_to_top.icon_color = Some("gray".to_string());

    let html = render(&ScrollToTop::new().with_icon_color("crimson"), config);
    assert!(html.contains(r#"stroke="crimson""#));
}

#[test]
fn test_concat_layers_append_in_order() {
    let mut config = KitterConfig::default();
    config.styles.documentation.class_name = Some("from-config".to_string());

    let html = render(
        &Documentation::new(vec![]).with_class("from-call"),
        config,
    );
    assert!(html.contains(r#"class="flex min-h-screen justify-center from-config from-call""#));
}

#[test]
fn test_concat_empty_string_contributes_nothing() {
    let mut config = KitterConfig::default();
    config.styles.documentation.class_name = Some(String::new());

    let html = render(&Documentation::new(vec![]), config);
    assert!(html.contains(r#"class="flex min-h-screen justify-center""#));
}

#[test]
fn test_max_width_precedence() {
    let mut config = KitterConfig::default();
    config.styles.documentation.max_width = Some("800px".into());

    // Configured beats the 1000px default.
    let html = render(&Documentation::new(vec![]), config.clone());
    assert!(html.contains("max-width:800px"));

    // Call-site beats configured.
    let html = render(&Documentation::new(vec![]).with_max_width(640), config);
    assert!(html.contains("max-width:640px"));
}

#[test]
fn test_resolution_is_idempotent() {
    let component = ScrollToTop::new().with_text("jump up");
    let first = render(&component, configured_label("back to top"));
    let second = render(&component, configured_label("back to top"));
    assert_eq!(first, second);
}
