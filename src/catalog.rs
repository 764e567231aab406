//! Static catalog of page layouts.
//!
//! Each [`LayoutTemplate`] declares an ordered list of sections, a hero
//! arrangement and a banner placement strategy. The `best_for_*` sets are
//! consulted only by the selector in [`crate::select`].
//!
//! The catalog is a `static` table: built at compile time, never mutated,
//! shared by every render. [`validate_catalog`] checks the structural
//! invariants (one hero, at least one footer) and is run by the `check`
//! command and the test suite rather than on every render.

use crate::types::{NarrativeType, Vibe};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("template '{template}' has {count} hero sections, expected exactly one")]
    HeroCount { template: &'static str, count: usize },
    #[error("template '{0}' has no footer section")]
    MissingFooter(&'static str),
    #[error("template '{0}' must start with its hero section")]
    HeroNotFirst(&'static str),
    #[error("template '{template}' repeats the '{section}' section")]
    DuplicateSection {
        template: &'static str,
        section: SectionType,
    },
    #[error("duplicate template name '{0}'")]
    DuplicateName(&'static str),
}

/// Semantic block type of a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionType {
    Hero,
    About,
    Features,
    Tokenomics,
    Community,
    Gallery,
    BannerDivider,
    Story,
    Cta,
    Footer,
}

impl SectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::About => "about",
            SectionType::Features => "features",
            SectionType::Tokenomics => "tokenomics",
            SectionType::Community => "community",
            SectionType::Gallery => "gallery",
            SectionType::BannerDivider => "banner-divider",
            SectionType::Story => "story",
            SectionType::Cta => "cta",
            SectionType::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the project banner image appears relative to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerUsage {
    None,
    Background,
    DividerAbove,
    DividerBelow,
    InlineDecoration,
    FooterDecoration,
}

impl BannerUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            BannerUsage::None => "none",
            BannerUsage::Background => "background",
            BannerUsage::DividerAbove => "divider-above",
            BannerUsage::DividerBelow => "divider-below",
            BannerUsage::InlineDecoration => "inline-decoration",
            BannerUsage::FooterDecoration => "footer-decoration",
        }
    }
}

/// Presentation hints, emitted as CSS classes on the section element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleHint {
    FullWidth,
    DarkOverlay,
    Parallax,
    Centered,
}

impl StyleHint {
    pub fn class_name(self) -> &'static str {
        match self {
            StyleHint::FullWidth => "full-width",
            StyleHint::DarkOverlay => "dark-overlay",
            StyleHint::Parallax => "parallax",
            StyleHint::Centered => "centered",
        }
    }
}

/// Arrangement of the hero block, independent of the visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroStyle {
    Centered,
    Split,
    Fullscreen,
    Stacked,
}

impl HeroStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            HeroStyle::Centered => "centered",
            HeroStyle::Split => "split",
            HeroStyle::Fullscreen => "fullscreen",
            HeroStyle::Stacked => "stacked",
        }
    }
}

/// Template-wide banner placement, applied to sections that leave their
/// own [`BannerUsage`] unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStrategy {
    HeroBackground,
    Dividers,
    Decorative,
    Subtle,
}

impl BannerStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            BannerStrategy::HeroBackground => "hero-background",
            BannerStrategy::Dividers => "dividers",
            BannerStrategy::Decorative => "decorative",
            BannerStrategy::Subtle => "subtle",
        }
    }

    /// Banner usage a section gets when it declares none.
    pub fn default_usage(self, kind: SectionType) -> BannerUsage {
        match (self, kind) {
            (BannerStrategy::HeroBackground, SectionType::Hero) => BannerUsage::Background,
            (BannerStrategy::Decorative, SectionType::Hero) => BannerUsage::InlineDecoration,
            (BannerStrategy::Decorative | BannerStrategy::Subtle, SectionType::Footer) => {
                BannerUsage::FooterDecoration
            }
            _ => BannerUsage::None,
        }
    }
}

/// One entry in a template's section list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSection {
    pub kind: SectionType,
    /// `None` defers to the template's [`BannerStrategy`].
    pub banner: Option<BannerUsage>,
    pub hints: &'static [StyleHint],
}

impl LayoutSection {
    pub const fn new(kind: SectionType) -> Self {
        Self {
            kind,
            banner: None,
            hints: &[],
        }
    }

    pub const fn banner(self, usage: BannerUsage) -> Self {
        Self {
            banner: Some(usage),
            ..self
        }
    }

    pub const fn hints(self, hints: &'static [StyleHint]) -> Self {
        Self { hints, ..self }
    }

    /// Effective banner usage under a template's strategy.
    pub fn banner_usage(&self, strategy: BannerStrategy) -> BannerUsage {
        self.banner
            .unwrap_or_else(|| strategy.default_usage(self.kind))
    }

    pub fn has_hint(&self, hint: StyleHint) -> bool {
        self.hints.contains(&hint)
    }
}

/// A named page layout.
#[derive(Debug)]
pub struct LayoutTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub best_for_vibes: &'static [Vibe],
    pub best_for_narratives: &'static [NarrativeType],
    pub sections: &'static [LayoutSection],
    pub hero_style: HeroStyle,
    pub banner_strategy: BannerStrategy,
}

impl LayoutTemplate {
    pub fn has_section(&self, kind: SectionType) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }
}

use self::BannerUsage as B;
use self::SectionType as S;
use self::StyleHint as H;

pub static CATALOG: &[LayoutTemplate] = &[
    LayoutTemplate {
        name: "minimal-focus",
        description: "Clean, content-first layout with generous whitespace",
        best_for_vibes: &[Vibe::Friendly, Vibe::Mysterious],
        best_for_narratives: &[NarrativeType::Tech, NarrativeType::Community],
        sections: &[
            LayoutSection::new(S::Hero).hints(&[H::Centered]),
            LayoutSection::new(S::About),
            LayoutSection::new(S::Features),
            LayoutSection::new(S::BannerDivider),
            LayoutSection::new(S::Tokenomics),
            LayoutSection::new(S::Community),
            LayoutSection::new(S::Footer),
        ],
        hero_style: HeroStyle::Centered,
        banner_strategy: BannerStrategy::Subtle,
    },
    LayoutTemplate {
        name: "dark-cyberpunk",
        description: "Neon-on-black layout with a full-bleed banner hero",
        best_for_vibes: &[Vibe::Edgy, Vibe::Mysterious],
        best_for_narratives: &[NarrativeType::Tech, NarrativeType::Gaming],
        sections: &[
            LayoutSection::new(S::Hero)
                .banner(B::Background)
                .hints(&[H::FullWidth, H::DarkOverlay]),
            LayoutSection::new(S::Features),
            LayoutSection::new(S::BannerDivider).hints(&[H::FullWidth]),
            LayoutSection::new(S::Tokenomics),
            LayoutSection::new(S::Cta).hints(&[H::DarkOverlay]),
            LayoutSection::new(S::Footer),
        ],
        hero_style: HeroStyle::Fullscreen,
        banner_strategy: BannerStrategy::HeroBackground,
    },
    LayoutTemplate {
        name: "playful-community",
        description: "Bright, bouncy layout that puts the community up front",
        best_for_vibes: &[Vibe::Friendly, Vibe::Energetic],
        best_for_narratives: &[NarrativeType::Community, NarrativeType::Culture],
        sections: &[
            LayoutSection::new(S::Hero),
            LayoutSection::new(S::About).banner(B::InlineDecoration),
            LayoutSection::new(S::Community).hints(&[H::Centered]),
            LayoutSection::new(S::Gallery),
            LayoutSection::new(S::Tokenomics),
            LayoutSection::new(S::Cta).hints(&[H::Centered]),
            LayoutSection::new(S::Footer),
        ],
        hero_style: HeroStyle::Split,
        banner_strategy: BannerStrategy::Decorative,
    },
    LayoutTemplate {
        name: "retro-arcade",
        description: "Pixel-framed arcade cabinet layout with banner dividers",
        best_for_vibes: &[Vibe::Energetic, Vibe::Edgy],
        best_for_narratives: &[NarrativeType::Gaming, NarrativeType::Culture],
        sections: &[
            LayoutSection::new(S::Hero)
                .banner(B::DividerBelow)
                .hints(&[H::Centered]),
            LayoutSection::new(S::Features),
            LayoutSection::new(S::Gallery),
            LayoutSection::new(S::Tokenomics).banner(B::DividerAbove),
            LayoutSection::new(S::Cta),
            LayoutSection::new(S::Footer),
        ],
        hero_style: HeroStyle::Stacked,
        banner_strategy: BannerStrategy::Dividers,
    },
    LayoutTemplate {
        name: "story-driven",
        description: "Narrative scroll with a parallax banner and lore sections",
        best_for_vibes: &[Vibe::Mysterious, Vibe::Friendly],
        best_for_narratives: &[NarrativeType::Culture, NarrativeType::Community],
        sections: &[
            LayoutSection::new(S::Hero).hints(&[H::FullWidth, H::Parallax, H::DarkOverlay]),
            LayoutSection::new(S::Story),
            LayoutSection::new(S::About),
            LayoutSection::new(S::Gallery),
            LayoutSection::new(S::BannerDivider).hints(&[H::Parallax]),
            LayoutSection::new(S::Community),
            LayoutSection::new(S::Footer),
        ],
        hero_style: HeroStyle::Fullscreen,
        banner_strategy: BannerStrategy::HeroBackground,
    },
    LayoutTemplate {
        name: "bold-showcase",
        description: "High-contrast split hero with stacked feature and token blocks",
        best_for_vibes: &[Vibe::Energetic, Vibe::Edgy],
        best_for_narratives: &[
            NarrativeType::Tech,
            NarrativeType::Gaming,
            NarrativeType::Community,
        ],
        sections: &[
            LayoutSection::new(S::Hero),
            LayoutSection::new(S::BannerDivider).hints(&[H::FullWidth]),
            LayoutSection::new(S::Features),
            LayoutSection::new(S::Tokenomics),
            LayoutSection::new(S::Community),
            LayoutSection::new(S::Cta).hints(&[H::FullWidth, H::Centered]),
            LayoutSection::new(S::Footer).banner(B::FooterDecoration),
        ],
        hero_style: HeroStyle::Split,
        banner_strategy: BannerStrategy::Dividers,
    },
];

/// Look up a catalog entry by name.
pub fn find_template(name: &str) -> Option<&'static LayoutTemplate> {
    CATALOG.iter().find(|t| t.name == name)
}

/// Check the structural invariants of every catalog entry.
///
/// - exactly one `hero`, and it comes first
/// - at least one `footer`
/// - no repeated section type other than `banner-divider` and `footer`
/// - unique template names
pub fn validate_catalog() -> Result<(), CatalogError> {
    validate_templates(CATALOG)
}

fn validate_templates(templates: &'static [LayoutTemplate]) -> Result<(), CatalogError> {
    if templates.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut names = HashSet::new();
    for template in templates {
        if !names.insert(template.name) {
            return Err(CatalogError::DuplicateName(template.name));
        }

        let heroes = template
            .sections
            .iter()
            .filter(|s| s.kind == SectionType::Hero)
            .count();
        if heroes != 1 {
            return Err(CatalogError::HeroCount {
                template: template.name,
                count: heroes,
            });
        }
        if template.sections[0].kind != SectionType::Hero {
            return Err(CatalogError::HeroNotFirst(template.name));
        }
        if !template.has_section(SectionType::Footer) {
            return Err(CatalogError::MissingFooter(template.name));
        }

        let mut seen = HashSet::new();
        for section in template.sections {
            let repeatable = matches!(section.kind, SectionType::BannerDivider | SectionType::Footer);
            if !repeatable && !seen.insert(section.kind) {
                return Err(CatalogError::DuplicateSection {
                    template: template.name,
                    section: section.kind,
                });
            }
        }
    }
    Ok(())
}
