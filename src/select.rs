//! Template selection.
//!
//! Every catalog entry is scored against the project analysis and the
//! highest total wins:
//!
//! ```text
//! score = 2 · [vibe ∈ best_for_vibes]
//!       + 2 · [narrative ∈ best_for_narratives]
//!       + Σ bonuses for (layout style, template) and (narrative, template)
//!       + jitter ∈ [0, 1)
//! ```
//!
//! The fixed bonuses live in [`BONUSES`], next to the catalog they weigh.
//! Jitter gives visual variety across repeated generations for similar
//! projects. It is smaller than any integer score step, so it only ever
//! reorders templates whose fixed scores tie. The randomness source is
//! passed in as a [`Jitter`] so tests and seeded builds stay reproducible.

use crate::catalog::{CATALOG, LayoutTemplate};
use crate::config::SelectionConfig;
use crate::types::{LayoutStyle, NarrativeType, Vibe};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Points for an entry whose `best_for_vibes` contains the project vibe.
pub const VIBE_MATCH: u32 = 2;
/// Points for an entry whose `best_for_narratives` contains the narrative.
pub const NARRATIVE_MATCH: u32 = 2;

/// What a fixed bonus is keyed on besides the template name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusKey {
    Style(LayoutStyle),
    Narrative(NarrativeType),
}

#[derive(Debug)]
pub struct Bonus {
    pub key: BonusKey,
    pub template: &'static str,
    pub points: u32,
}

const fn style_bonus(style: LayoutStyle, template: &'static str, points: u32) -> Bonus {
    Bonus {
        key: BonusKey::Style(style),
        template,
        points,
    }
}

const fn narrative_bonus(narrative: NarrativeType, template: &'static str, points: u32) -> Bonus {
    Bonus {
        key: BonusKey::Narrative(narrative),
        template,
        points,
    }
}

pub static BONUSES: &[Bonus] = &[
    style_bonus(LayoutStyle::Minimal, "minimal-focus", 3),
    style_bonus(LayoutStyle::Cyberpunk, "dark-cyberpunk", 4),
    style_bonus(LayoutStyle::Playful, "playful-community", 3),
    style_bonus(LayoutStyle::Playful, "bold-showcase", 1),
    style_bonus(LayoutStyle::Retro, "retro-arcade", 4),
    style_bonus(LayoutStyle::Minimal, "story-driven", 1),
    narrative_bonus(NarrativeType::Tech, "dark-cyberpunk", 1),
    narrative_bonus(NarrativeType::Gaming, "retro-arcade", 1),
    narrative_bonus(NarrativeType::Culture, "story-driven", 2),
    narrative_bonus(NarrativeType::Community, "playful-community", 1),
];

/// Sum of fixed bonuses for a template under a given key.
pub fn bonus_for(key: BonusKey, template: &str) -> u32 {
    BONUSES
        .iter()
        .filter(|b| b.key == key && b.template == template)
        .map(|b| b.points)
        .sum()
}

/// Deterministic part of a template's score.
pub fn base_score(
    template: &LayoutTemplate,
    vibe: Vibe,
    narrative: NarrativeType,
    style: LayoutStyle,
) -> u32 {
    let mut score = 0;
    if template.best_for_vibes.contains(&vibe) {
        score += VIBE_MATCH;
    }
    if template.best_for_narratives.contains(&narrative) {
        score += NARRATIVE_MATCH;
    }
    score += bonus_for(BonusKey::Style(style), template.name);
    score += bonus_for(BonusKey::Narrative(narrative), template.name);
    score
}

/// Source of the tie-breaking term.
pub enum Jitter<'a> {
    /// No jitter. Exact ties go to the earlier catalog entry.
    Disabled,
    /// Draw each template's bonus uniformly from `[0, 1)`.
    Rng(&'a mut dyn RngCore),
}

impl Jitter<'_> {
    fn sample(&mut self) -> f64 {
        match self {
            Jitter::Disabled => 0.0,
            Jitter::Rng(rng) => rng.random::<f64>(),
        }
    }
}

impl std::fmt::Debug for Jitter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Jitter::Disabled => f.write_str("Jitter::Disabled"),
            Jitter::Rng(_) => f.write_str("Jitter::Rng(..)"),
        }
    }
}

/// A catalog entry with its score broken down.
#[derive(Debug, Clone, Copy)]
pub struct ScoredTemplate {
    pub template: &'static LayoutTemplate,
    pub base: u32,
    pub jitter: f64,
}

impl ScoredTemplate {
    pub fn total(&self) -> f64 {
        f64::from(self.base) + self.jitter
    }
}

/// Score every catalog entry, in catalog order.
pub fn score_templates(
    vibe: Vibe,
    narrative: NarrativeType,
    style: LayoutStyle,
    jitter: &mut Jitter<'_>,
) -> Vec<ScoredTemplate> {
    CATALOG
        .iter()
        .map(|template| {
            let scored = ScoredTemplate {
                template,
                base: base_score(template, vibe, narrative, style),
                jitter: jitter.sample(),
            };
            log::debug!(
                "template {} scored {} + {:.3}",
                template.name,
                scored.base,
                scored.jitter
            );
            scored
        })
        .collect()
}

/// Highest total; the earliest entry wins an exact tie.
pub fn best(scores: &[ScoredTemplate]) -> Option<&ScoredTemplate> {
    scores.iter().fold(None, |leader, candidate| match leader {
        Some(l) if l.total() >= candidate.total() => Some(l),
        _ => Some(candidate),
    })
}

/// Pick the best-matching layout template for a project.
pub fn select_layout_template(
    vibe: Vibe,
    narrative: NarrativeType,
    style: LayoutStyle,
    jitter: &mut Jitter<'_>,
) -> &'static LayoutTemplate {
    let scores = score_templates(vibe, narrative, style, jitter);
    // The catalog is a non-empty static table.
    let winner = best(&scores).map(|s| s.template).unwrap_or(&CATALOG[0]);
    log::info!(
        "selected template {} for {}/{}/{}",
        winner.name,
        vibe,
        narrative,
        style
    );
    winner
}

/// Run `f` with the jitter source described by the selection config.
///
/// - `jitter = false` → [`Jitter::Disabled`]
/// - `seed = Some(n)` → a `StdRng` seeded with `n`
/// - otherwise → the thread-local rng
pub fn with_jitter<T>(selection: &SelectionConfig, f: impl FnOnce(&mut Jitter<'_>) -> T) -> T {
    if !selection.jitter {
        return f(&mut Jitter::Disabled);
    }
    match selection.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            f(&mut Jitter::Rng(&mut rng))
        }
        None => {
            let mut rng = rand::rng();
            f(&mut Jitter::Rng(&mut rng))
        }
    }
}

/// Score every entry under the config's jitter settings.
pub fn select_with_config(
    vibe: Vibe,
    narrative: NarrativeType,
    style: LayoutStyle,
    selection: &SelectionConfig,
) -> Vec<ScoredTemplate> {
    with_jitter(selection, |jitter| {
        score_templates(vibe, narrative, style, jitter)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_template;

    fn select_fixed(vibe: Vibe, narrative: NarrativeType, style: LayoutStyle) -> &'static str {
        select_layout_template(vibe, narrative, style, &mut Jitter::Disabled).name
    }

    #[test]
    fn friendly_community_minimal_picks_minimal_focus() {
        assert_eq!(
            select_fixed(Vibe::Friendly, NarrativeType::Community, LayoutStyle::Minimal),
            "minimal-focus"
        );
    }

    #[test]
    fn friendly_community_minimal_survives_any_jitter() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let template = select_layout_template(
                Vibe::Friendly,
                NarrativeType::Community,
                LayoutStyle::Minimal,
                &mut Jitter::Rng(&mut rng),
            );
            assert_eq!(template.name, "minimal-focus", "seed {seed}");
        }
    }

    #[test]
    fn cyberpunk_edgy_tech_picks_dark_cyberpunk() {
        assert_eq!(
            select_fixed(Vibe::Edgy, NarrativeType::Tech, LayoutStyle::Cyberpunk),
            "dark-cyberpunk"
        );
    }

    #[test]
    fn retro_energetic_gaming_picks_retro_arcade() {
        assert_eq!(
            select_fixed(Vibe::Energetic, NarrativeType::Gaming, LayoutStyle::Retro),
            "retro-arcade"
        );
    }

    #[test]
    fn mysterious_culture_picks_story_driven() {
        assert_eq!(
            select_fixed(Vibe::Mysterious, NarrativeType::Culture, LayoutStyle::Minimal),
            "story-driven"
        );
    }

    #[test]
    fn base_score_adds_matches_and_bonuses() {
        let template = find_template("minimal-focus").unwrap();
        let score = base_score(
            template,
            Vibe::Friendly,
            NarrativeType::Community,
            LayoutStyle::Minimal,
        );
        assert_eq!(score, VIBE_MATCH + NARRATIVE_MATCH + 3);

        let score = base_score(template, Vibe::Edgy, NarrativeType::Gaming, LayoutStyle::Retro);
        assert_eq!(score, 0);
    }

    #[test]
    fn bonus_table_names_real_templates() {
        for bonus in BONUSES {
            assert!(
                find_template(bonus.template).is_some(),
                "bonus for unknown template {}",
                bonus.template
            );
            assert!((1..=4).contains(&bonus.points));
        }
    }

    #[test]
    fn bonus_for_sums_matching_rows() {
        assert_eq!(
            bonus_for(BonusKey::Style(LayoutStyle::Cyberpunk), "dark-cyberpunk"),
            4
        );
        assert_eq!(
            bonus_for(BonusKey::Style(LayoutStyle::Cyberpunk), "minimal-focus"),
            0
        );
    }

    #[test]
    fn jitter_stays_below_one() {
        let mut rng = StdRng::seed_from_u64(99);
        let scores = score_templates(
            Vibe::Friendly,
            NarrativeType::Tech,
            LayoutStyle::Playful,
            &mut Jitter::Rng(&mut rng),
        );
        assert_eq!(scores.len(), CATALOG.len());
        for s in &scores {
            assert!((0.0..1.0).contains(&s.jitter));
        }
    }

    #[test]
    fn disabled_jitter_is_zero() {
        let scores = score_templates(
            Vibe::Friendly,
            NarrativeType::Tech,
            LayoutStyle::Playful,
            &mut Jitter::Disabled,
        );
        assert!(scores.iter().all(|s| s.jitter == 0.0));
    }

    #[test]
    fn exact_tie_goes_to_earlier_entry() {
        let a = ScoredTemplate {
            template: &CATALOG[0],
            base: 4,
            jitter: 0.0,
        };
        let b = ScoredTemplate {
            template: &CATALOG[1],
            base: 4,
            jitter: 0.0,
        };
        assert_eq!(best(&[a, b]).unwrap().template.name, CATALOG[0].name);
        assert!(best(&[]).is_none());
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let selection = SelectionConfig {
            jitter: true,
            seed: Some(1234),
        };
        let first = with_jitter(&selection, |j| {
            select_layout_template(Vibe::Edgy, NarrativeType::Community, LayoutStyle::Playful, j)
        });
        for _ in 0..10 {
            let again = with_jitter(&selection, |j| {
                select_layout_template(
                    Vibe::Edgy,
                    NarrativeType::Community,
                    LayoutStyle::Playful,
                    j,
                )
            });
            assert_eq!(again.name, first.name);
        }
    }

    #[test]
    fn select_with_config_respects_disabled_jitter() {
        let selection = SelectionConfig {
            jitter: false,
            seed: Some(7),
        };
        let scores = select_with_config(
            Vibe::Friendly,
            NarrativeType::Community,
            LayoutStyle::Minimal,
            &selection,
        );
        assert!(scores.iter().all(|s| s.jitter == 0.0));
        assert_eq!(best(&scores).unwrap().template.name, "minimal-focus");
    }

    #[test]
    fn every_combination_selects_something() {
        for vibe in Vibe::ALL {
            for narrative in NarrativeType::ALL {
                for style in LayoutStyle::ALL {
                    let name = select_fixed(vibe, narrative, style);
                    assert!(find_template(name).is_some());
                }
            }
        }
    }
}
