//! Section rendering.
//!
//! A page is a list of [`Block`]s: the selected template's sections in
//! catalog order, plus the secondary blocks the project's narrative asks for,
//! inserted ahead of the first footer. Each block renders to one HTML
//! fragment with [maud](https://maud.lambda.xyz/).
//!
//! ## Narrative blocks
//!
//! | Narrative | Adds |
//! |-----------|------|
//! | community | `community` ("Join Our Community"), `cta` |
//! | tech      | `features` ("Features"), roadmap |
//! | culture   | `story` ("Our Story"), `gallery` |
//! | gaming    | `features` ("Game Features"), leaderboard |
//!
//! Catalog section types the template already contains are not added twice.
//! The tokenomics section is dropped when the project has no tokenomics
//! figures.
//!
//! ## Escaping
//!
//! Every free-text field goes through [`Text`]. Logo, banner, poster and
//! social URLs come from the internal asset pipeline and are emitted as
//! given.

use crate::catalog::{BannerUsage, LayoutSection, LayoutTemplate, SectionType, StyleHint};
use crate::escape::Text;
use crate::types::{LayoutStyle, NarrativeType, ProjectAnalysis, TemplateData, Tokenomics};
use maud::{Markup, PreEscaped, html};

/// Everything a section renderer reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub data: &'a TemplateData,
    pub analysis: &'a ProjectAnalysis,
    pub template: &'static LayoutTemplate,
    /// Footer credit line; empty hides it.
    pub credit: &'a str,
}

/// One renderable unit of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block {
    /// A catalog section type.
    Section(LayoutSection),
    /// Development phases, added for tech projects.
    Roadmap,
    /// Holder tiers, added for gaming projects.
    Leaderboard,
}

impl Block {
    pub fn name(&self) -> &'static str {
        match self {
            Block::Section(s) => s.kind.as_str(),
            Block::Roadmap => "roadmap",
            Block::Leaderboard => "leaderboard",
        }
    }

    /// Element id, for blocks that can be linked to.
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Block::Section(s) => match s.kind {
                SectionType::Hero => Some("top"),
                SectionType::BannerDivider | SectionType::Footer => None,
                kind => Some(kind.as_str()),
            },
            Block::Roadmap => Some("roadmap"),
            Block::Leaderboard => Some("leaderboard"),
        }
    }

    /// Label in the top navigation, if the block is listed there.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Block::Section(s) => match s.kind {
                SectionType::About => Some("About"),
                SectionType::Features => Some("Features"),
                SectionType::Tokenomics => Some("Tokenomics"),
                SectionType::Community => Some("Community"),
                SectionType::Gallery => Some("Gallery"),
                SectionType::Story => Some("Story"),
                SectionType::Hero
                | SectionType::BannerDivider
                | SectionType::Cta
                | SectionType::Footer => None,
            },
            Block::Roadmap => Some("Roadmap"),
            Block::Leaderboard => Some("Leaderboard"),
        }
    }
}

static COMMUNITY_BLOCKS: &[Block] = &[
    Block::Section(LayoutSection::new(SectionType::Community)),
    Block::Section(LayoutSection::new(SectionType::Cta)),
];
static TECH_BLOCKS: &[Block] = &[
    Block::Section(LayoutSection::new(SectionType::Features)),
    Block::Roadmap,
];
static CULTURE_BLOCKS: &[Block] = &[
    Block::Section(LayoutSection::new(SectionType::Story)),
    Block::Section(LayoutSection::new(SectionType::Gallery)),
];
static GAMING_BLOCKS: &[Block] = &[
    Block::Section(LayoutSection::new(SectionType::Features)),
    Block::Leaderboard,
];

/// Secondary blocks a narrative adds to every template.
pub fn narrative_blocks(narrative: NarrativeType) -> &'static [Block] {
    match narrative {
        NarrativeType::Community => COMMUNITY_BLOCKS,
        NarrativeType::Tech => TECH_BLOCKS,
        NarrativeType::Culture => CULTURE_BLOCKS,
        NarrativeType::Gaming => GAMING_BLOCKS,
    }
}

/// Ordered block list for a page.
pub fn plan_blocks(
    template: &LayoutTemplate,
    narrative: NarrativeType,
    data: &TemplateData,
) -> Vec<Block> {
    let extras: Vec<Block> = narrative_blocks(narrative)
        .iter()
        .copied()
        .filter(|block| match block {
            Block::Section(s) => !template.has_section(s.kind),
            _ => true,
        })
        .collect();

    let footer_at = template
        .sections
        .iter()
        .position(|s| s.kind == SectionType::Footer)
        .unwrap_or(template.sections.len());

    let mut blocks = Vec::with_capacity(template.sections.len() + extras.len());
    blocks.extend(template.sections[..footer_at].iter().copied().map(Block::Section));
    blocks.extend(extras);
    blocks.extend(template.sections[footer_at..].iter().copied().map(Block::Section));

    let has_tokenomics = data.tokenomics().is_some();
    blocks.retain(|block| match block {
        Block::Section(s) => s.kind != SectionType::Tokenomics || has_tokenomics,
        _ => true,
    });
    blocks
}

/// Render all blocks in order.
pub fn render_blocks(ctx: &RenderContext<'_>, blocks: &[Block]) -> Markup {
    html! {
        @for block in blocks {
            (render_block(ctx, block))
        }
    }
}

pub fn render_block(ctx: &RenderContext<'_>, block: &Block) -> Markup {
    match block {
        Block::Section(section) => render_section(ctx, section),
        Block::Roadmap => roadmap(),
        Block::Leaderboard => leaderboard(),
    }
}

/// Render one catalog section, with its banner dividers if it asks for any.
pub fn render_section(ctx: &RenderContext<'_>, section: &LayoutSection) -> Markup {
    let usage = section.banner_usage(ctx.template.banner_strategy);
    let body = match section.kind {
        SectionType::Hero => hero(ctx, section, usage),
        SectionType::About => wrap(ctx, section, usage, "about", about(ctx)),
        SectionType::Features => wrap(ctx, section, usage, "features", features(ctx)),
        SectionType::Tokenomics => match ctx.data.tokenomics() {
            Some(tokenomics) => wrap(
                ctx,
                section,
                usage,
                "tokenomics",
                tokenomics_body(ctx, tokenomics),
            ),
            None => return html! {},
        },
        SectionType::Community => wrap(ctx, section, usage, "community", community(ctx)),
        SectionType::Gallery => wrap(ctx, section, usage, "gallery", gallery(ctx)),
        SectionType::BannerDivider => banner_strip(ctx, section.hints),
        SectionType::Story => wrap(ctx, section, usage, "story", story(ctx)),
        SectionType::Cta => wrap(ctx, section, usage, "cta", cta(ctx)),
        SectionType::Footer => footer(ctx, usage),
    };

    html! {
        @if usage == BannerUsage::DividerAbove {
            (banner_strip(ctx, &[]))
        }
        (body)
        @if usage == BannerUsage::DividerBelow {
            (banner_strip(ctx, &[]))
        }
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

fn trusted_url(url: &str) -> PreEscaped<&str> {
    PreEscaped(url)
}

fn push_hints(class: &mut String, hints: &[StyleHint]) {
    for hint in hints {
        class.push(' ');
        class.push_str(hint.class_name());
    }
}

fn banner_background(url: &str) -> PreEscaped<String> {
    PreEscaped(format!("background-image: url('{url}')"))
}

/// Standard `<section>` shell: id, classes, hints, banner background or
/// inline banner.
fn wrap(
    ctx: &RenderContext<'_>,
    section: &LayoutSection,
    usage: BannerUsage,
    kind_class: &str,
    content: Markup,
) -> Markup {
    let mut class = format!("section {kind_class} fade-in");
    push_hints(&mut class, section.hints);
    let background = (usage == BannerUsage::Background).then(|| {
        class.push_str(" has-banner-bg");
        banner_background(&ctx.data.banner_url)
    });
    let id = Block::Section(*section).anchor();

    html! {
        section id=[id] class=(class) style=[background] {
            div.section-inner {
                @if usage == BannerUsage::InlineDecoration {
                    img.banner-inline src=(trusted_url(&ctx.data.banner_url)) alt="" loading="lazy";
                }
                (content)
            }
        }
    }
}

/// Full-width banner image between sections.
fn banner_strip(ctx: &RenderContext<'_>, hints: &[StyleHint]) -> Markup {
    let mut class = String::from("section banner-strip banner-divider");
    push_hints(&mut class, hints);
    let alt = format!("{} banner", ctx.data.project_name);
    html! {
        div class=(class) {
            img src=(trusted_url(&ctx.data.banner_url)) alt=(Text(&alt)) loading="lazy";
        }
    }
}

fn contract_box(ctx: &RenderContext<'_>) -> Markup {
    html! {
        @if let Some(address) = &ctx.data.contract_address {
            div.contract {
                code { (Text(address)) }
                button.copy-btn type="button" data-copy=(Text(address)) { "Copy" }
            }
        }
    }
}

fn social_list(ctx: &RenderContext<'_>) -> Markup {
    let links = ctx.data.social.links();
    html! {
        @if !links.is_empty() {
            ul.social-links {
                @for (label, url) in &links {
                    li {
                        a.btn.btn-ghost href=(trusted_url(url)) target="_blank" rel="noopener" {
                            (label)
                        }
                    }
                }
            }
        }
    }
}

fn call_to_action(ctx: &RenderContext<'_>) -> Markup {
    let first_social = ctx.data.social.links().into_iter().next();
    html! {
        div.hero-actions {
            a.btn.btn-primary href="#about" { "Learn More" }
            @if let Some((label, url)) = first_social {
                a.btn.btn-ghost href=(trusted_url(url)) target="_blank" rel="noopener" {
                    "Follow on " (label)
                }
            }
        }
    }
}

// ============================================================================
// Hero
// ============================================================================

fn hero(ctx: &RenderContext<'_>, section: &LayoutSection, usage: BannerUsage) -> Markup {
    let style = ctx.analysis.layout_style;
    let mut class = format!(
        "hero {} hero-{}",
        style.as_str(),
        ctx.template.hero_style.as_str()
    );
    push_hints(&mut class, section.hints);
    let background = (usage == BannerUsage::Background).then(|| {
        class.push_str(" has-banner-bg");
        banner_background(&ctx.data.banner_url)
    });

    let variant = match style {
        LayoutStyle::Minimal => hero_minimal(ctx),
        LayoutStyle::Playful => hero_playful(ctx),
        LayoutStyle::Cyberpunk => hero_cyberpunk(ctx),
        LayoutStyle::Retro => hero_retro(ctx),
    };

    html! {
        section id="top" class=(class) style=[background] {
            (variant.decoration)
            div.hero-content {
                div.hero-media { (variant.media) }
                div.hero-copy {
                    (variant.copy)
                    (call_to_action(ctx))
                    (contract_box(ctx))
                    @if usage == BannerUsage::InlineDecoration {
                        img.hero-banner-inline src=(trusted_url(&ctx.data.banner_url)) alt="" loading="lazy";
                    }
                }
            }
        }
    }
}

/// The three slots a hero variant fills.
struct HeroVariant {
    decoration: Markup,
    media: Markup,
    copy: Markup,
}

fn logo_alt(data: &TemplateData) -> String {
    format!("{} logo", data.project_name)
}

fn hero_minimal(ctx: &RenderContext<'_>) -> HeroVariant {
    let data = ctx.data;
    HeroVariant {
        decoration: html! {},
        media: html! {
            img.hero-logo src=(trusted_url(&data.logo_url)) alt=(Text(&logo_alt(data)));
        },
        copy: html! {
            span.ticker-badge { (Text(&data.ticker_symbol())) }
            h1.hero-title { (Text(data.headline())) }
            hr.hero-rule;
            p.hero-tagline { (Text(data.tagline())) }
        },
    }
}

fn hero_playful(ctx: &RenderContext<'_>) -> HeroVariant {
    let data = ctx.data;
    HeroVariant {
        decoration: html! {
            span.bubble.bubble-1 aria-hidden="true" {}
            span.bubble.bubble-2 aria-hidden="true" {}
            span.bubble.bubble-3 aria-hidden="true" {}
        },
        media: html! {
            img.hero-logo.bounce src=(trusted_url(&data.logo_url)) alt=(Text(&logo_alt(data)));
        },
        copy: html! {
            h1.hero-title { (Text(data.headline())) }
            span.ticker-badge { (Text(&data.ticker_symbol())) " to the moon" }
            p.hero-tagline { (Text(data.tagline())) }
        },
    }
}

fn hero_cyberpunk(ctx: &RenderContext<'_>) -> HeroVariant {
    let data = ctx.data;
    let headline = data.headline();
    HeroVariant {
        decoration: html! {
            div.grid-overlay aria-hidden="true" {}
            div.scanline aria-hidden="true" {}
        },
        media: html! {
            img.hero-logo src=(trusted_url(&data.logo_url)) alt=(Text(&logo_alt(data)));
        },
        copy: html! {
            p.prompt { "> init " (Text(&data.ticker_symbol())) }
            h1.hero-title.glitch data-text=(Text(headline)) { (Text(headline)) }
            p.hero-tagline { (Text(data.tagline())) }
        },
    }
}

fn hero_retro(ctx: &RenderContext<'_>) -> HeroVariant {
    let data = ctx.data;
    HeroVariant {
        decoration: html! {
            div.sunburst aria-hidden="true" {}
        },
        media: html! {
            div.pixel-frame {
                img.hero-logo src=(trusted_url(&data.logo_url)) alt=(Text(&logo_alt(data)));
            }
        },
        copy: html! {
            span.ticker-badge { "PLAYER 1: " (Text(&data.ticker_symbol())) }
            h1.hero-title.retro-title { (Text(data.headline())) }
            p.hero-tagline { (Text(data.tagline())) }
            p.marquee { "Insert coin to continue" }
        },
    }
}

// ============================================================================
// Content sections
// ============================================================================

fn about(ctx: &RenderContext<'_>) -> Markup {
    let audience = ctx.analysis.target_audience.trim();
    html! {
        h2 { "About " (Text(&ctx.data.project_name)) }
        p.about-text { (Text(ctx.data.about())) }
        @if !audience.is_empty() {
            p.audience { "Built for " (Text(audience)) }
        }
    }
}

fn features_heading(narrative: NarrativeType) -> &'static str {
    match narrative {
        NarrativeType::Tech => "Features",
        NarrativeType::Gaming => "Game Features",
        NarrativeType::Community => "Community Features",
        NarrativeType::Culture => "Culture Features",
    }
}

fn feature_icons(narrative: NarrativeType) -> &'static [&'static str] {
    match narrative {
        NarrativeType::Tech => &["⚡", "🔒", "🛠"],
        NarrativeType::Gaming => &["🎮", "🏆", "🕹"],
        NarrativeType::Community => &["🤝", "🚀", "📣"],
        NarrativeType::Culture => &["🎨", "📜", "🔥"],
    }
}

/// Fallback feature cards, `(title, text)`, when the copy step produced none.
fn default_features(narrative: NarrativeType) -> &'static [(&'static str, &'static str)] {
    match narrative {
        NarrativeType::Tech => &[
            ("Fast Finality", "Transactions settle in seconds on a battle-tested chain."),
            ("Audited Contract", "Renounced ownership and a locked liquidity pool."),
            ("Open Tooling", "Public APIs and bots built by holders, for holders."),
        ],
        NarrativeType::Gaming => &[
            ("Play to Earn", "Every match, raid and quest feeds back into the token."),
            ("Seasonal Tournaments", "Compete for prize pools each season."),
            ("On-chain Ranks", "Your rank lives on-chain and travels with your wallet."),
        ],
        NarrativeType::Community => &[
            ("Community Owned", "No team wallet and no presale. Holders run the show."),
            ("Fair Launch", "Everyone got in at the same price, at the same time."),
            ("Daily Raids", "Coordinated meme raids keep the timeline busy."),
        ],
        NarrativeType::Culture => &[
            ("Meme Native", "Born on the timeline, fluent in internet."),
            ("Lore First", "A story that grows with every holder who tells it."),
            ("Made by Artists", "Original art drops from the community's own creators."),
        ],
    }
}

fn features(ctx: &RenderContext<'_>) -> Markup {
    let narrative = ctx.analysis.narrative_type;
    let icons = feature_icons(narrative);
    let generated = ctx.data.features();
    html! {
        h2 { (features_heading(narrative)) }
        div.features-grid {
            @if generated.is_empty() {
                @for (i, (title, text)) in default_features(narrative).iter().enumerate() {
                    div.feature-card {
                        span.feature-icon aria-hidden="true" { (icons[i % icons.len()]) }
                        h3 { (title) }
                        p { (text) }
                    }
                }
            } @else {
                @for (i, text) in generated.iter().enumerate() {
                    div.feature-card {
                        span.feature-icon aria-hidden="true" { (icons[i % icons.len()]) }
                        p { (Text(text)) }
                    }
                }
            }
        }
    }
}

fn tokenomics_body(ctx: &RenderContext<'_>, tokenomics: &Tokenomics) -> Markup {
    html! {
        h2 { "Tokenomics" }
        div.tokenomics-grid {
            div.token-stat {
                span.label { "Total Supply" }
                span.value { (Text(&tokenomics.total_supply)) }
            }
            div.token-stat {
                span.label { "Distribution" }
                span.value { (Text(&tokenomics.distribution)) }
            }
            div.token-stat {
                span.label { "Ticker" }
                span.value { (Text(&ctx.data.ticker_symbol())) }
            }
        }
        (contract_box(ctx))
    }
}

fn community(ctx: &RenderContext<'_>) -> Markup {
    html! {
        h2 { "Join Our Community" }
        p { "Follow " (Text(&ctx.data.ticker_symbol())) " everywhere the memes are made." }
        @if ctx.data.social.is_empty() {
            p.empty { "Community links are coming soon." }
        } @else {
            (social_list(ctx))
        }
    }
}

fn gallery(ctx: &RenderContext<'_>) -> Markup {
    let data = ctx.data;
    let heading = match ctx.analysis.narrative_type {
        NarrativeType::Culture => "Meme Gallery",
        _ => "Gallery",
    };
    let banner_alt = format!("{} banner", data.project_name);
    html! {
        h2 { (heading) }
        div.gallery-grid {
            figure {
                img src=(trusted_url(&data.logo_url)) alt=(Text(&logo_alt(data))) loading="lazy";
            }
            figure {
                img src=(trusted_url(&data.banner_url)) alt=(Text(&banner_alt)) loading="lazy";
            }
            @for (i, poster) in data.poster_urls.iter().enumerate() {
                @let alt = format!("{} poster {}", data.project_name, i + 1);
                figure {
                    img src=(trusted_url(poster)) alt=(Text(&alt)) loading="lazy";
                }
            }
        }
    }
}

fn story(ctx: &RenderContext<'_>) -> Markup {
    let data = ctx.data;
    html! {
        h2 { "Our Story" }
        p.story-text { (Text(&data.description)) }
        @if data.about() != data.description {
            p.story-text { (Text(data.about())) }
        }
    }
}

fn cta(ctx: &RenderContext<'_>) -> Markup {
    html! {
        h2 { "Ready to join " (Text(&ctx.data.ticker_symbol())) "?" }
        p { (Text(ctx.data.tagline())) }
        (call_to_action(ctx))
    }
}

fn footer(ctx: &RenderContext<'_>, usage: BannerUsage) -> Markup {
    let data = ctx.data;
    html! {
        footer.site-footer {
            @if usage == BannerUsage::FooterDecoration {
                img.footer-banner src=(trusted_url(&data.banner_url)) alt="" loading="lazy";
            }
            img.footer-logo src=(trusted_url(&data.logo_url)) alt=(Text(&logo_alt(data)));
            p.footer-name {
                strong { (Text(&data.project_name)) }
                " " (Text(&data.ticker_symbol()))
            }
            (social_list(ctx))
            @if !ctx.credit.is_empty() {
                p.credit { (Text(ctx.credit)) }
            }
        }
    }
}

// ============================================================================
// Narrative blocks
// ============================================================================

const ROADMAP: [(&str, &str, &str); 4] = [
    ("Phase 1", "Launch", "Fair launch, liquidity locked, contract renounced."),
    ("Phase 2", "Build", "Website, socials and community tooling go live."),
    ("Phase 3", "Grow", "Listings, partnerships and holder rewards."),
    ("Phase 4", "Expand", "Bridges, integrations and builder grants."),
];

fn roadmap() -> Markup {
    html! {
        section #roadmap class="section roadmap fade-in" {
            div.section-inner {
                h2 { "Roadmap" }
                ol.roadmap-list {
                    @for (phase, title, text) in ROADMAP {
                        li.phase {
                            span.phase-label { (phase) }
                            h3 { (title) }
                            p { (text) }
                        }
                    }
                }
            }
        }
    }
}

const TIERS: [(&str, &str, &str); 4] = [
    ("1", "Legend", "Top 10 holders"),
    ("2", "Champion", "Top 100 holders"),
    ("3", "Challenger", "Tournament finalists"),
    ("4", "Rookie", "Every holder"),
];

fn leaderboard() -> Markup {
    html! {
        section #leaderboard class="section leaderboard fade-in" {
            div.section-inner {
                h2 { "Leaderboard" }
                p { "Climb the ranks by holding, raiding and playing. Season one opens at launch." }
                table {
                    thead {
                        tr {
                            th { "Rank" }
                            th { "Tier" }
                            th { "Requirement" }
                        }
                    }
                    tbody {
                        @for (rank, tier, requirement) in TIERS {
                            tr {
                                td { (rank) }
                                td { (tier) }
                                td { (requirement) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Top navigation with links to the linkable blocks on the page.
pub fn render_nav(ctx: &RenderContext<'_>, blocks: &[Block]) -> Markup {
    let links: Vec<(&str, &str)> = blocks
        .iter()
        .filter_map(|b| Some((b.anchor()?, b.nav_label()?)))
        .collect();
    html! {
        nav.site-nav {
            a.brand href="#top" {
                img src=(trusted_url(&ctx.data.logo_url)) alt="";
                span { (Text(&ctx.data.project_name)) }
            }
            ul.nav-links {
                @for (anchor, label) in &links {
                    li { a href={ "#" (anchor) } { (label) } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_template;
    use crate::test_helpers::{sample_analysis, sample_data};

    fn ctx<'a>(
        data: &'a TemplateData,
        analysis: &'a ProjectAnalysis,
        template: &'static str,
    ) -> RenderContext<'a> {
        RenderContext {
            data,
            analysis,
            template: find_template(template).unwrap(),
            credit: "Launched with EZCTO",
        }
    }

    fn names(blocks: &[Block]) -> Vec<&'static str> {
        blocks.iter().map(Block::name).collect()
    }

    #[test]
    fn plan_inserts_narrative_blocks_before_footer() {
        let data = sample_data();
        let template = find_template("dark-cyberpunk").unwrap();
        let blocks = plan_blocks(template, NarrativeType::Culture, &data);
        assert_eq!(
            names(&blocks),
            [
                "hero",
                "features",
                "banner-divider",
                "tokenomics",
                "cta",
                "story",
                "gallery",
                "footer"
            ]
        );
    }

    #[test]
    fn plan_skips_sections_template_already_has() {
        let data = sample_data();
        let template = find_template("minimal-focus").unwrap();
        let blocks = plan_blocks(template, NarrativeType::Tech, &data);
        let features = blocks.iter().filter(|b| b.name() == "features").count();
        assert_eq!(features, 1);
        assert!(blocks.contains(&Block::Roadmap));
    }

    #[test]
    fn plan_drops_tokenomics_without_data() {
        let mut data = sample_data();
        data.content = None;
        let template = find_template("minimal-focus").unwrap();
        let blocks = plan_blocks(template, NarrativeType::Community, &data);
        assert!(!names(&blocks).contains(&"tokenomics"));
        assert_eq!(blocks.first().map(Block::name), Some("hero"));
        assert_eq!(blocks.last().map(Block::name), Some("footer"));
    }

    #[test]
    fn hero_class_matches_layout_style() {
        let data = sample_data();
        for style in LayoutStyle::ALL {
            let mut analysis = sample_analysis();
            analysis.layout_style = style;
            let ctx = ctx(&data, &analysis, "minimal-focus");
            let html = render_section(&ctx, &LayoutSection::new(SectionType::Hero)).into_string();
            assert!(
                html.contains(&format!("class=\"hero {} hero-centered", style.as_str())),
                "{style}: {html}"
            );
        }
    }

    #[test]
    fn hero_variants_have_distinct_decorations() {
        let data = sample_data();
        let mut analysis = sample_analysis();
        let expected = [
            (LayoutStyle::Minimal, "hero-rule"),
            (LayoutStyle::Playful, "bubble-1"),
            (LayoutStyle::Cyberpunk, "scanline"),
            (LayoutStyle::Retro, "sunburst"),
        ];
        for (style, marker) in expected {
            analysis.layout_style = style;
            let ctx = ctx(&data, &analysis, "bold-showcase");
            let html = render_section(&ctx, &LayoutSection::new(SectionType::Hero)).into_string();
            assert!(html.contains(marker), "{style} missing {marker}");
        }
    }

    #[test]
    fn hero_background_from_strategy() {
        let data = sample_data();
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "story-driven");
        let html = render_section(&ctx, &ctx.template.sections[0]).into_string();
        assert!(html.contains("has-banner-bg"));
        assert!(html.contains("background-image: url('https://cdn.test/banner.png')"));
        assert!(html.contains("parallax"));
    }

    #[test]
    fn divider_below_renders_banner_after_section() {
        let data = sample_data();
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "retro-arcade");
        let html = render_section(&ctx, &ctx.template.sections[0]).into_string();
        let hero_at = html.find("id=\"top\"").unwrap();
        let divider_at = html.find("banner-divider").unwrap();
        assert!(divider_at > hero_at);
    }

    #[test]
    fn empty_tokenomics_drops_its_dividers_too() {
        let mut data = sample_data();
        data.content = None;
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "retro-arcade");
        let section = ctx
            .template
            .sections
            .iter()
            .find(|s| s.kind == SectionType::Tokenomics)
            .unwrap();
        assert_eq!(section.banner, Some(BannerUsage::DividerAbove));
        assert_eq!(render_section(&ctx, section).into_string(), "");
    }

    #[test]
    fn community_section_lists_only_present_links() {
        let data = sample_data();
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "minimal-focus");
        let html = render_section(&ctx, &LayoutSection::new(SectionType::Community)).into_string();
        assert!(html.contains("Join Our Community"));
        assert!(html.contains("https://x.com/frog"));
        assert!(!html.contains("Discord"));
    }

    #[test]
    fn community_without_links_says_so() {
        let mut data = sample_data();
        data.social = Default::default();
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "minimal-focus");
        let html = render_section(&ctx, &LayoutSection::new(SectionType::Community)).into_string();
        assert!(html.contains("coming soon"));
        assert!(!html.contains("social-links"));
    }

    #[test]
    fn tokenomics_renders_figures_and_copy_button() {
        let data = sample_data();
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "minimal-focus");
        let html =
            render_section(&ctx, &LayoutSection::new(SectionType::Tokenomics)).into_string();
        assert!(html.contains("1,000,000,000"));
        assert!(html.contains("data-copy=\"0xF00D\""));
    }

    #[test]
    fn tokenomics_empty_without_data() {
        let mut data = sample_data();
        data.content = None;
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "minimal-focus");
        let html =
            render_section(&ctx, &LayoutSection::new(SectionType::Tokenomics)).into_string();
        assert!(html.is_empty());
    }

    #[test]
    fn generated_features_replace_defaults() {
        let data = sample_data();
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "minimal-focus");
        let html = render_section(&ctx, &LayoutSection::new(SectionType::Features)).into_string();
        assert!(html.contains("Zero tax"));
        assert!(!html.contains("Fast Finality"));
    }

    #[test]
    fn default_features_per_narrative() {
        let mut data = sample_data();
        data.content = None;
        let mut analysis = sample_analysis();
        analysis.narrative_type = NarrativeType::Gaming;
        let ctx = ctx(&data, &analysis, "minimal-focus");
        let html = render_section(&ctx, &LayoutSection::new(SectionType::Features)).into_string();
        assert!(html.contains("Game Features"));
        assert!(html.contains("Play to Earn"));
    }

    #[test]
    fn gallery_includes_posters() {
        let mut data = sample_data();
        data.poster_urls = vec!["https://cdn.test/p1.png".into(), "https://cdn.test/p2.png".into()];
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "minimal-focus");
        let html = render_section(&ctx, &LayoutSection::new(SectionType::Gallery)).into_string();
        assert_eq!(html.matches("<figure>").count(), 4);
        assert!(html.contains("Moon Frog poster 2"));
    }

    #[test]
    fn footer_hides_empty_credit() {
        let data = sample_data();
        let analysis = sample_analysis();
        let mut ctx = ctx(&data, &analysis, "bold-showcase");
        ctx.credit = "";
        let html = render_section(&ctx, &LayoutSection::new(SectionType::Footer)).into_string();
        assert!(!html.contains("class=\"credit\""));
        ctx.credit = "Made with love";
        let html = render_section(&ctx, &LayoutSection::new(SectionType::Footer)).into_string();
        assert!(html.contains("Made with love"));
    }

    #[test]
    fn nav_links_follow_blocks() {
        let data = sample_data();
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "dark-cyberpunk");
        let blocks = plan_blocks(ctx.template, NarrativeType::Tech, &data);
        let html = render_nav(&ctx, &blocks).into_string();
        assert!(html.contains("href=\"#features\""));
        assert!(html.contains("href=\"#roadmap\""));
        assert!(!html.contains("href=\"#cta\""));
    }

    #[test]
    fn free_text_escaped_in_every_section() {
        let mut data = sample_data();
        data.project_name = "<b>Frog</b>".to_string();
        data.description = "it's <i>great</i>".to_string();
        data.contract_address = Some("\"><script>".to_string());
        data.content = None;
        let analysis = sample_analysis();
        let ctx = ctx(&data, &analysis, "story-driven");
        let all = [
            SectionType::Hero,
            SectionType::About,
            SectionType::Features,
            SectionType::Community,
            SectionType::Gallery,
            SectionType::BannerDivider,
            SectionType::Story,
            SectionType::Cta,
            SectionType::Footer,
        ];
        for kind in all {
            let html = render_section(&ctx, &LayoutSection::new(kind)).into_string();
            assert!(!html.contains("<b>Frog"), "{kind}");
            assert!(!html.contains("<i>great"), "{kind}");
            assert!(!html.contains("<script>"), "{kind}");
            assert!(!html.contains("it's"), "{kind}");
        }
    }
}
