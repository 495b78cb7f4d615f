//! Focus Walkthrough
//!
//! Drives a small row of elements through keyboard and pointer interactions
//! and prints the resolved styles, transition hints and layout plans:
//! - Theme loaded from TOML on top of a preset
//! - Keyboard focus traversal followed by a pointer press
//! - Layout plans for phone, tablet and TV widths
//!
//! Run with: RUST_LOG=debug cargo run -p halo_widgets --example focus_walkthrough

use anyhow::Result;
use halo_theme::Theme;
use halo_widgets::prelude::*;
use tracing_subscriber::EnvFilter;

const THEME: &str = r##"
name = "Walkthrough"
preset = "aqua"

[motion]
border_duration_ms = 150
"##;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let resolver = FocusStyleResolver::checked(Theme::from_toml_str(THEME)?)?;
    tracing::info!(theme = resolver.theme().name(), "theme loaded");

    let mut registry = ElementRegistry::new();
    let ids: Vec<ElementId> = ["Home", "Search", "Library", "Settings"]
        .into_iter()
        .map(|label| {
            registry.mount(FocusableElement::new(label).with_observer(move |state, modality| {
                let via = modality.map(|m| m.as_str()).unwrap_or("-");
                println!("  {label:<8} -> {state:<7} via {via}");
            }))
        })
        .collect();

    println!("Keyboard traversal:");
    let mut previous: Option<ElementId> = None;
    for &id in &ids {
        if let Some(prev) = previous {
            registry.dispatch(&InputEvent::focus_lost(prev));
        }
        registry.dispatch(&InputEvent::focus_gained(id));
        previous = Some(id);
    }

    println!("Activation on the focused element:");
    let focused = registry
        .focused()
        .ok_or_else(|| anyhow::anyhow!("nothing focused after traversal"))?;
    if let Some(change) = registry.dispatch(&InputEvent::activation_start(focused)) {
        let transition = resolver.resolve_transition(&change);
        println!(
            "  border {}ms, elevation settles in {}ms",
            transition.duration_ms,
            transition.elevation_duration_ms()
        );
        for elapsed in [0, 50, 100, 150] {
            let frame = transition.sample(elapsed);
            println!(
                "  t={elapsed:>3}ms border={:.2} elevation={:.2} bg={}",
                frame.border_width, frame.elevation, frame.background_color
            );
        }
    }
    registry.dispatch(&InputEvent::activation_end(focused));

    println!("Pointer press on an unfocused element:");
    registry.dispatch(&InputEvent::activation_start(ids[0]));
    registry.dispatch(&InputEvent::activation_end(ids[0]));

    println!("Resolved styles:");
    for (id, element) in registry.iter() {
        let style = resolver.resolve_style(element.state());
        println!("  {:<8} {}", element.label(), serde_json::to_string(&style)?);
        debug_assert_eq!(registry.style(id, resolver.theme()), Some(style));
    }

    println!("Layouts:");
    for width in [375.0, 768.0, 1920.0] {
        let plan = resolver.layout_for_width(width, 6);
        println!(
            "  {width:>6}px {} ({} columns, {} rows)",
            plan.form_factor,
            plan.columns,
            plan.rows()
        );
    }

    Ok(())
}
