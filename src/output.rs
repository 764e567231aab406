//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Moon Frog ($FROG) → minimal-focus
//!     Hero: centered, banner: subtle
//! Sections
//! 001 hero
//! 002 about
//! 003 features
//! 004 banner-divider
//! 005 tokenomics
//! 006 community
//! 007 cta
//! 008 footer
//! Wrote dist/index.html (24.1 KB)
//! ```
//!
//! ## Select
//!
//! ```text
//! friendly / community / minimal
//! 001 minimal-focus       7 + 0.412 = 7.412  ← selected
//! 002 dark-cyberpunk      2 + 0.903 = 2.903
//! ```
//!
//! ## Build
//!
//! ```text
//! Building 2 projects
//! moon-frog → minimal-focus (8 sections, 24.1 KB)
//! pepe → retro-arcade (9 sections, 26.0 KB)
//! Generated 2 pages in dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::build::{BuildEvent, BuildSummary};
use crate::catalog::LayoutTemplate;
use crate::page::RenderedSite;
use crate::select::{ScoredTemplate, best};
use crate::types::{ProjectAnalysis, ProjectInput};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable byte count.
///
/// ```text
/// 812 B
/// 24.1 KB
/// 1.3 MB
/// ```
fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn combination(analysis: &ProjectAnalysis) -> String {
    format!(
        "{} / {} / {}",
        analysis.vibe, analysis.narrative_type, analysis.layout_style
    )
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(
    input: &ProjectInput,
    site: &RenderedSite,
    written: &Path,
) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} ({}) → {}",
            input.data.project_name,
            input.data.ticker_symbol(),
            site.template.name
        ),
        format!(
            "{}Hero: {}, banner: {}",
            indent(1),
            site.template.hero_style.as_str(),
            site.template.banner_strategy.as_str()
        ),
        "Sections".to_string(),
    ];
    for (i, block) in site.blocks.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), block.name()));
    }
    lines.push(format!(
        "Wrote {} ({})",
        written.display(),
        format_size(site.html.len())
    ));
    lines
}

pub fn print_generate_output(input: &ProjectInput, site: &RenderedSite, written: &Path) {
    for line in format_generate_output(input, site, written) {
        println!("{}", line);
    }
}

// ============================================================================
// Select
// ============================================================================

pub fn format_scores(analysis: &ProjectAnalysis, scores: &[ScoredTemplate]) -> Vec<String> {
    let winner = best(scores).map(|s| s.template.name);
    let width = scores
        .iter()
        .map(|s| s.template.name.len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![combination(analysis)];
    for (i, scored) in scores.iter().enumerate() {
        let mut line = format!(
            "{} {:<width$} {:>2} + {:.3} = {:.3}",
            format_index(i + 1),
            scored.template.name,
            scored.base,
            scored.jitter,
            scored.total(),
        );
        if Some(scored.template.name) == winner {
            line.push_str("  ← selected");
        }
        lines.push(line);
    }
    lines
}

pub fn print_scores(analysis: &ProjectAnalysis, scores: &[ScoredTemplate]) {
    for line in format_scores(analysis, scores) {
        println!("{}", line);
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Catalog listing.
///
/// Sections with their own banner placement show it in brackets.
///
/// ```text
/// 004 retro-arcade
///     Pixel-framed arcade cabinet layout with banner dividers
///     Hero: stacked, banner: dividers
///     Vibes: energetic, edgy
///     Narratives: gaming, culture
///     Sections: hero [divider-below], features, gallery, tokenomics [divider-above], cta, footer
/// ```
pub fn format_catalog(templates: &[LayoutTemplate]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, template) in templates.iter().enumerate() {
        let sections: Vec<String> = template
            .sections
            .iter()
            .map(|s| match s.banner {
                Some(usage) => format!("{} [{}]", s.kind, usage.as_str()),
                None => s.kind.to_string(),
            })
            .collect();
        lines.push(format!("{} {}", format_index(i + 1), template.name));
        lines.push(format!("{}{}", indent(1), template.description));
        lines.push(format!(
            "{}Hero: {}, banner: {}",
            indent(1),
            template.hero_style.as_str(),
            template.banner_strategy.as_str()
        ));
        lines.push(format!("{}Vibes: {}", indent(1), join(template.best_for_vibes)));
        lines.push(format!(
            "{}Narratives: {}",
            indent(1),
            join(template.best_for_narratives)
        ));
        lines.push(format!("{}Sections: {}", indent(1), sections.join(", ")));
    }
    lines
}

pub fn print_catalog(templates: &[LayoutTemplate]) {
    for line in format_catalog(templates) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(
    template_count: usize,
    project: Option<(&Path, &ProjectInput)>,
) -> Vec<String> {
    let mut lines = vec![format!("Catalog: {} templates", template_count)];
    if let Some((path, input)) = project {
        lines.push(format!("Project: {}", input.data.project_name));
        lines.push(format!("{}Source: {}", indent(1), path.display()));
        lines.push(format!("{}Analysis: {}", indent(1), combination(&input.analysis)));
        if input.data.tokenomics().is_none() {
            lines.push(format!("{}No tokenomics: section skipped", indent(1)));
        }
    }
    lines
}

pub fn print_check_output(template_count: usize, project: Option<(&Path, &ProjectInput)>) {
    for line in format_check_output(template_count, project) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_event(event: &BuildEvent) -> Vec<String> {
    match event {
        BuildEvent::Started { projects } => vec![format!("Building {} projects", projects)],
        BuildEvent::ProjectRendered {
            slug,
            template,
            blocks,
            bytes,
            ..
        } => vec![format!(
            "{} → {} ({} sections, {})",
            slug,
            template,
            blocks,
            format_size(*bytes)
        )],
    }
}

pub fn format_build_summary(summary: &BuildSummary, output: &Path) -> Vec<String> {
    vec![format!(
        "Generated {} pages in {}",
        summary.pages.len(),
        output.display()
    )]
}

pub fn print_build_summary(summary: &BuildSummary, output: &Path) {
    for line in format_build_summary(summary, output) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::BuiltPage;
    use crate::catalog::{CATALOG, find_template};
    use crate::config::SiteConfig;
    use crate::page::render_with_template;
    use crate::select::{Jitter, score_templates};
    use crate::test_helpers::{sample_analysis, sample_input};
    use std::path::PathBuf;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(123), "123");
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(812), "812 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn generate_output_lists_blocks() {
        let input = sample_input();
        let template = find_template("minimal-focus").unwrap();
        let site = render_with_template(
            &input.data,
            &input.analysis,
            &SiteConfig::default(),
            template,
        );
        let lines = format_generate_output(&input, &site, Path::new("dist/index.html"));
        assert_eq!(lines[0], "Moon Frog ($FROG) → minimal-focus");
        assert_eq!(lines[1], "    Hero: centered, banner: subtle");
        assert_eq!(lines[2], "Sections");
        assert_eq!(lines[3], "001 hero");
        assert!(lines.last().unwrap().starts_with("Wrote dist/index.html ("));
        assert_eq!(lines.len(), site.blocks.len() + 4);
    }

    #[test]
    fn scores_mark_the_winner() {
        let analysis = sample_analysis();
        let scores = score_templates(
            analysis.vibe,
            analysis.narrative_type,
            analysis.layout_style,
            &mut Jitter::Disabled,
        );
        let lines = format_scores(&analysis, &scores);
        assert_eq!(lines[0], "friendly / community / minimal");
        assert_eq!(lines.len(), CATALOG.len() + 1);
        let selected: Vec<&String> = lines.iter().filter(|l| l.ends_with("← selected")).collect();
        assert_eq!(selected.len(), 1);
        assert!(selected[0].starts_with("001 minimal-focus"));
        assert!(selected[0].contains("7 + 0.000 = 7.000"));
    }

    #[test]
    fn catalog_listing_has_six_lines_per_template() {
        let lines = format_catalog(CATALOG);
        assert_eq!(lines.len(), CATALOG.len() * 6);
        assert_eq!(lines[0], "001 minimal-focus");
        assert!(lines[5].starts_with("    Sections: hero, "));
        assert_eq!(
            lines[23],
            "    Sections: hero [divider-below], features, gallery, tokenomics [divider-above], cta, footer"
        );
    }

    #[test]
    fn check_output_without_project() {
        assert_eq!(format_check_output(6, None), vec!["Catalog: 6 templates"]);
    }

    #[test]
    fn check_output_with_project() {
        let mut input = sample_input();
        input.data.content = None;
        let lines = format_check_output(6, Some((Path::new("frog.json"), &input)));
        assert_eq!(lines[1], "Project: Moon Frog");
        assert_eq!(lines[2], "    Source: frog.json");
        assert_eq!(lines[3], "    Analysis: friendly / community / minimal");
        assert_eq!(lines[4], "    No tokenomics: section skipped");
    }

    #[test]
    fn build_event_lines() {
        let started = BuildEvent::Started { projects: 3 };
        assert_eq!(format_build_event(&started), vec!["Building 3 projects"]);

        let rendered = BuildEvent::ProjectRendered {
            slug: "moon-frog".into(),
            project_name: "Moon Frog".into(),
            template: "retro-arcade",
            blocks: 9,
            bytes: 2048,
        };
        assert_eq!(
            format_build_event(&rendered),
            vec!["moon-frog → retro-arcade (9 sections, 2.0 KB)"]
        );
    }

    #[test]
    fn build_summary_line() {
        let summary = BuildSummary {
            pages: vec![BuiltPage {
                slug: "frog".into(),
                project_name: "Moon Frog".into(),
                template: "minimal-focus",
                output: PathBuf::from("dist/frog/index.html"),
            }],
        };
        assert_eq!(
            format_build_summary(&summary, Path::new("dist")),
            vec!["Generated 1 pages in dist"]
        );
    }
}
