//! Shared fixtures for unit tests.
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let data = sample_data();
//! let mut analysis = sample_analysis();
//! analysis.layout_style = LayoutStyle::Retro;
//! ```

use crate::types::{
    ColorPalette, LayoutStyle, NarrativeType, ProjectAnalysis, ProjectInput, SocialLinks,
    TemplateData, Tokenomics, Vibe, WebsiteContent,
};

/// "Moon Frog": twitter link only, contract address, full generated copy.
pub fn sample_data() -> TemplateData {
    TemplateData {
        project_name: "Moon Frog".to_string(),
        ticker: "FROG".to_string(),
        description: "The frog that jumped over the moon.".to_string(),
        logo_url: "https://cdn.test/logo.png".to_string(),
        banner_url: "https://cdn.test/banner.png".to_string(),
        poster_urls: Vec::new(),
        social: SocialLinks {
            twitter: Some("https://x.com/frog".to_string()),
            ..SocialLinks::default()
        },
        contract_address: Some("0xF00D".to_string()),
        content: Some(WebsiteContent {
            headline: Some("Hop to the moon".to_string()),
            tagline: Some("One small hop for a frog".to_string()),
            about: Some("Moon Frog is a community token for pond dwellers.".to_string()),
            features: vec![
                "Zero tax".to_string(),
                "Liquidity locked".to_string(),
                "Community owned".to_string(),
            ],
            tokenomics: Some(Tokenomics {
                total_supply: "1,000,000,000".to_string(),
                distribution: "95% LP, 5% community".to_string(),
            }),
        }),
    }
}

/// friendly / community / minimal, which always selects `minimal-focus`.
pub fn sample_analysis() -> ProjectAnalysis {
    ProjectAnalysis {
        narrative_type: NarrativeType::Community,
        layout_style: LayoutStyle::Minimal,
        color_palette: ColorPalette::default(),
        vibe: Vibe::Friendly,
        target_audience: "Meme traders".to_string(),
    }
}

pub fn sample_input() -> ProjectInput {
    ProjectInput {
        data: sample_data(),
        analysis: sample_analysis(),
    }
}

/// Serialized [`sample_input`], as a project file on disk would hold it.
pub fn sample_input_json() -> String {
    serde_json::to_string_pretty(&sample_input()).unwrap()
}
