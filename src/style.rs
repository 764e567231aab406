//! Stylesheet and script assembly.
//!
//! The page stylesheet is two layers:
//!
//! 1. A `:root` block of custom properties generated from the project's
//!    [`ColorPalette`] and the vibe's animation speed.
//! 2. The fixed stylesheet (`static/site.css`) covering all four layout
//!    themes, hero variants and responsive breakpoints. It reads colors and
//!    timing only through those custom properties.
//!
//! Both static assets are embedded at compile time.

use crate::config::AnimationConfig;
use crate::types::{ColorPalette, Vibe};

const CSS_STATIC: &str = include_str!("../static/site.css");

/// Smooth scrolling, fade-in on scroll, and click-to-copy.
pub const SCRIPT: &str = include_str!("../static/site.js");

/// Generate CSS custom properties from the palette.
///
/// Color values are emitted exactly as given.
pub fn generate_palette_css(palette: &ColorPalette, animation_speed: &str) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
    --color-background: {background};
    --color-text: {text};
    --color-accent: {accent};
    --animation-speed: {animation_speed};
    --radius: 12px;
}}"#,
        primary = palette.primary,
        secondary = palette.secondary,
        background = palette.background,
        text = palette.text,
        accent = palette.accent,
    )
}

/// Full stylesheet for one page.
pub fn stylesheet(palette: &ColorPalette, vibe: Vibe, animation: &AnimationConfig) -> String {
    let root = generate_palette_css(palette, animation.duration(vibe));
    format!("{}\n\n{}", root, CSS_STATIC)
}
