//! Input records for website generation.
//!
//! Both records arrive as JSON from upstream services: the analysis from an
//! LLM call, the template data from the asset pipeline and the submission
//! form. Field names follow their camelCase wire format.
//!
//! ```json
//! {
//!   "data": {
//!     "projectName": "Moon Frog",
//!     "ticker": "FROG",
//!     "description": "The frog that jumped over the moon.",
//!     "logoUrl": "https://cdn.example.com/frog/logo.png",
//!     "bannerUrl": "https://cdn.example.com/frog/banner.png",
//!     "social": { "twitter": "https://x.com/moonfrog" },
//!     "contractAddress": "0xabc..."
//!   },
//!   "analysis": {
//!     "narrativeType": "community",
//!     "layoutStyle": "playful",
//!     "colorPalette": {
//!       "primary": "#22c55e", "secondary": "#a3e635",
//!       "background": "#0f172a", "text": "#f8fafc", "accent": "#facc15"
//!     },
//!     "vibe": "friendly",
//!     "targetAudience": "Meme traders"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Thematic framing of a project. Picks the secondary page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeType {
    Community,
    Tech,
    Culture,
    Gaming,
}

impl NarrativeType {
    pub const ALL: [NarrativeType; 4] = [
        NarrativeType::Community,
        NarrativeType::Tech,
        NarrativeType::Culture,
        NarrativeType::Gaming,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NarrativeType::Community => "community",
            NarrativeType::Tech => "tech",
            NarrativeType::Culture => "culture",
            NarrativeType::Gaming => "gaming",
        }
    }
}

impl fmt::Display for NarrativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual theme. Picks the hero variant and the CSS theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    Minimal,
    Playful,
    Cyberpunk,
    Retro,
}

impl LayoutStyle {
    pub const ALL: [LayoutStyle; 4] = [
        LayoutStyle::Minimal,
        LayoutStyle::Playful,
        LayoutStyle::Cyberpunk,
        LayoutStyle::Retro,
    ];

    /// Class name used on the hero section and the page wrapper.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutStyle::Minimal => "minimal",
            LayoutStyle::Playful => "playful",
            LayoutStyle::Cyberpunk => "cyberpunk",
            LayoutStyle::Retro => "retro",
        }
    }
}

impl fmt::Display for LayoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotional tone. Only affects animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Friendly,
    Edgy,
    Mysterious,
    Energetic,
}

impl Vibe {
    pub const ALL: [Vibe; 4] = [Vibe::Friendly, Vibe::Edgy, Vibe::Mysterious, Vibe::Energetic];

    pub fn as_str(self) -> &'static str {
        match self {
            Vibe::Friendly => "friendly",
            Vibe::Edgy => "edgy",
            Vibe::Mysterious => "mysterious",
            Vibe::Energetic => "energetic",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five named CSS colors. Values are passed through to the stylesheet
/// without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#6366f1".to_string(),
            secondary: "#ec4899".to_string(),
            background: "#0b0b12".to_string(),
            text: "#f5f5f7".to_string(),
            accent: "#facc15".to_string(),
        }
    }
}

/// Project classification produced by the analysis step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    pub narrative_type: NarrativeType,
    pub layout_style: LayoutStyle,
    pub color_palette: ColorPalette,
    pub vibe: Vibe,
    /// Free text, display only.
    #[serde(default)]
    pub target_audience: String,
}

/// Optional social links. Each one is rendered only when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    /// Present links as `(label, url)` in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Twitter", &self.twitter),
            ("Telegram", &self.telegram),
            ("Discord", &self.discord),
            ("Website", &self.website),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.links().is_empty()
    }
}

/// Token supply figures shown in the tokenomics section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokenomics {
    pub total_supply: String,
    pub distribution: String,
}

/// Generated marketing copy. Every field is optional; the renderer falls
/// back to the project name and description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebsiteContent {
    pub headline: Option<String>,
    pub tagline: Option<String>,
    pub about: Option<String>,
    pub features: Vec<String>,
    pub tokenomics: Option<Tokenomics>,
}

/// Project data interpolated into the page.
///
/// Free text (name, ticker, description, contract address, copy) is escaped
/// on output. URLs come from the internal asset pipeline and are emitted as
/// given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub project_name: String,
    pub ticker: String,
    pub description: String,
    pub logo_url: String,
    pub banner_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub poster_urls: Vec<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<WebsiteContent>,
}

impl TemplateData {
    /// Ticker with a single leading `$`, whatever the input carried.
    pub fn ticker_symbol(&self) -> String {
        format!("${}", self.ticker.trim().trim_start_matches('$'))
    }

    pub fn headline(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.headline.as_deref())
            .unwrap_or(&self.project_name)
    }

    pub fn tagline(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.tagline.as_deref())
            .unwrap_or(&self.description)
    }

    pub fn about(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.about.as_deref())
            .unwrap_or(&self.description)
    }

    /// Generated feature lines; empty when the copy step produced none.
    pub fn features(&self) -> &[String] {
        self.content
            .as_ref()
            .map(|c| c.features.as_slice())
            .unwrap_or_default()
    }

    pub fn tokenomics(&self) -> Option<&Tokenomics> {
        self.content.as_ref().and_then(|c| c.tokenomics.as_ref())
    }
}

/// One project file: the data and its analysis side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub data: TemplateData,
    pub analysis: ProjectAnalysis,
}
