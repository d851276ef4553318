//! Localized content catalog keyed by orientation type.
//!
//! Narrative entries that only exist for some types fall back to a generic
//! placeholder so the results view always has something to show.

mod color_cards;
mod narrative;
mod types;
mod ui;

pub use color_cards::{classify_score, color_bands, ColorBand};
pub use narrative::{ResourceTriple, Storyline, StorylineKind};
pub use types::{type_profile, TypeDetail, TypeProfile};
pub use ui::{
    ui_text, FeatureText, FooterText, HomeText, NavText, ProfileText, ResourceLabels,
    ResultsText, StorylineLabels, TestText, TypesText, UiText,
};

use crate::locale::Language;
use crate::questionnaire::OrientationType;
use serde::Serialize;

const FALLBACK_ZH: &str = "保持自我认同，尊重多元，积极探索自我。";
const FALLBACK_EN: &str = "Respect diversity and keep exploring yourself.";

/// Placeholder shown when a type has no dedicated entry.
pub fn fallback_text(language: Language) -> &'static str {
    match language {
        Language::Zh => FALLBACK_ZH,
        Language::En => FALLBACK_EN,
    }
}

fn fallback_list(language: Language) -> &'static [&'static str] {
    match language {
        Language::Zh => &[FALLBACK_ZH],
        Language::En => &[FALLBACK_EN],
    }
}

pub fn characteristics(orientation: OrientationType, language: Language) -> &'static [&'static str] {
    narrative::characteristics(orientation, language).unwrap_or_else(|| fallback_list(language))
}

pub fn recommendations(orientation: OrientationType, language: Language) -> &'static [&'static str] {
    narrative::recommendations(orientation, language).unwrap_or_else(|| fallback_list(language))
}

pub fn story_highlight(orientation: OrientationType, language: Language) -> &'static str {
    narrative::story_highlight(orientation, language)
}

pub fn storyline(
    kind: StorylineKind,
    orientation: OrientationType,
    language: Language,
) -> Storyline {
    narrative::storyline(kind, orientation, language).unwrap_or_else(|| {
        let text = fallback_text(language);
        Storyline {
            story: fallback_list(language),
            risk: text,
            opportunity: text,
            suggestion: text,
        }
    })
}

pub fn resources(orientation: OrientationType, language: Language) -> ResourceTriple {
    narrative::resources(orientation, language)
}

/// One heading on the types overview page and the cards beneath it.
#[derive(Debug, Clone, Serialize)]
pub struct TypeGroup {
    pub title: &'static str,
    pub types: Vec<TypeProfile>,
}

pub fn types_overview(language: Language) -> Vec<TypeGroup> {
    vec![TypeGroup {
        title: ui_text(language).types.main_group,
        types: OrientationType::ordered()
            .into_iter()
            .map(|orientation| type_profile(orientation, language))
            .collect(),
    }]
}
