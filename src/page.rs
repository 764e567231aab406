//! Page assembly.
//!
//! Ties the pipeline together: select a template, plan the blocks, render
//! the sections, and wrap them in a complete document with head metadata,
//! the generated stylesheet and the interaction script.
//!
//! ## Document Shape
//!
//! ```text
//! <!DOCTYPE html>
//! <html lang>
//!   <head>   charset, viewport, title, description, Open Graph, Twitter Card,
//!            favicon, <style> palette + fixed stylesheet
//!   <body>
//!     <div class="page layout-… vibe-… narrative-… template-…">
//!       <nav class="site-nav">
//!       blocks in plan order
//!     </div>
//!     <script> interaction script
//! ```
//!
//! Rendering is total: every well-typed input yields a complete document.
//! The only non-determinism is the selector's jitter, which
//! [`render_with_jitter`] takes explicitly.

use crate::catalog::LayoutTemplate;
use crate::config::SiteConfig;
use crate::escape::Text;
use crate::sections::{Block, RenderContext, plan_blocks, render_blocks, render_nav};
use crate::select::{Jitter, select_layout_template, with_jitter};
use crate::style::{SCRIPT, stylesheet};
use crate::types::{ProjectAnalysis, TemplateData};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// A rendered page and how it was put together.
#[derive(Debug)]
pub struct RenderedSite {
    pub html: String,
    pub template: &'static LayoutTemplate,
    pub blocks: Vec<Block>,
}

/// Render a project with stock settings and random jitter.
pub fn generate_website_html(data: &TemplateData, analysis: &ProjectAnalysis) -> String {
    render_website(data, analysis, &SiteConfig::default()).html
}

/// Render a project, drawing jitter as the config's `[selection]` says.
pub fn render_website(
    data: &TemplateData,
    analysis: &ProjectAnalysis,
    config: &SiteConfig,
) -> RenderedSite {
    with_jitter(&config.selection, |jitter| {
        render_with_jitter(data, analysis, config, jitter)
    })
}

pub fn render_with_jitter(
    data: &TemplateData,
    analysis: &ProjectAnalysis,
    config: &SiteConfig,
    jitter: &mut Jitter<'_>,
) -> RenderedSite {
    let template = select_layout_template(
        analysis.vibe,
        analysis.narrative_type,
        analysis.layout_style,
        jitter,
    );
    render_with_template(data, analysis, config, template)
}

/// Render with a fixed template, skipping selection.
pub fn render_with_template(
    data: &TemplateData,
    analysis: &ProjectAnalysis,
    config: &SiteConfig,
    template: &'static LayoutTemplate,
) -> RenderedSite {
    let blocks = plan_blocks(template, analysis.narrative_type, data);
    let ctx = RenderContext {
        data,
        analysis,
        template,
        credit: &config.credit,
    };
    let css = stylesheet(&analysis.color_palette, analysis.vibe, &config.animation);
    let html = document(&ctx, &config.lang, &css, &blocks).into_string();
    log::debug!(
        "rendered {} with {} ({} blocks, {} bytes)",
        data.project_name,
        template.name,
        blocks.len(),
        html.len()
    );
    RenderedSite {
        html,
        template,
        blocks,
    }
}

fn document(ctx: &RenderContext<'_>, lang: &str, css: &str, blocks: &[Block]) -> Markup {
    let data = ctx.data;
    let analysis = ctx.analysis;
    let title = format!("{} ({})", data.project_name, data.ticker_symbol());
    let description = data.tagline();
    let page_class = format!(
        "page layout-{} vibe-{} narrative-{} template-{} banner-{}",
        analysis.layout_style.as_str(),
        analysis.vibe.as_str(),
        analysis.narrative_type.as_str(),
        ctx.template.name,
        ctx.template.banner_strategy.as_str(),
    );

    html! {
        (DOCTYPE)
        html lang=(Text(lang)) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (Text(&title)) }
                meta name="description" content=(Text(description));
                meta name="theme-color" content=(Text(&analysis.color_palette.primary));
                meta property="og:type" content="website";
                meta property="og:title" content=(Text(&title));
                meta property="og:description" content=(Text(description));
                meta property="og:image" content=(PreEscaped(&data.banner_url));
                meta property="og:site_name" content=(Text(&data.project_name));
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(Text(&title));
                meta name="twitter:description" content=(Text(description));
                meta name="twitter:image" content=(PreEscaped(&data.banner_url));
                link rel="icon" href=(PreEscaped(&data.logo_url));
                style { (PreEscaped(css)) }
            }
            body {
                div class=(page_class) {
                    (render_nav(ctx, blocks))
                    (render_blocks(ctx, blocks))
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}
