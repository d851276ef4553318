//! Assembles the localized results view from a scored hand-off.

mod views;

pub use views::{
    ColorCardView, DimensionScoreView, PrimarySource, RadarChartView, RadarIndicator,
    ResultsView, StorylineView,
};

use crate::content::{self, StorylineKind};
use crate::locale::Language;
use crate::navigation::ResultsHandoff;
use crate::questionnaire::{Dimension, OrientationType};
use crate::safety::SafetyReading;
use crate::scoring::RadarDatum;

const RADAR_MAX: u8 = 100;

impl ResultsView {
    /// `safety` is `None` while the location lookup is still pending.
    pub fn build(
        handoff: &ResultsHandoff,
        language: Language,
        safety: Option<&SafetyReading>,
    ) -> Self {
        let (primary_type, primary_source) = match handoff.primary_type {
            Some(orientation) if !handoff.radar_data.is_empty() => {
                (orientation, PrimarySource::Radar)
            }
            _ => (
                content::classify_score(handoff.scores.attraction_percent()),
                PrimarySource::AttractionBand,
            ),
        };
        let primary = content::type_profile(primary_type, language);
        let text = &content::ui_text(language).results;

        let safety_line = match safety {
            Some(reading) => reading.line(language),
            None => text.fetching_location.to_string(),
        };

        Self {
            language,
            title: text.title,
            warning: text.warning,
            primary,
            primary_source,
            type_definition: primary.short_desc,
            dimension_scores: dimension_scores(handoff, language),
            characteristics: content::characteristics(primary_type, language),
            recommendations: content::recommendations(primary_type, language),
            story_highlight: content::story_highlight(primary_type, language),
            storylines: storylines(primary_type, language),
            resources: content::resources(primary_type, language),
            color_cards: color_cards(primary_type, language),
            radar: radar_chart(&handoff.radar_data, language),
            safety_line,
        }
    }
}

fn dimension_scores(handoff: &ResultsHandoff, language: Language) -> Vec<DimensionScoreView> {
    Dimension::ordered()
        .into_iter()
        .map(|dimension| {
            let score = handoff.scores.get(dimension);
            DimensionScoreView {
                dimension,
                label: dimension.label(language),
                score,
                percent: (score * 100.0).round().clamp(0.0, 100.0) as u8,
            }
        })
        .collect()
}

fn storylines(primary_type: OrientationType, language: Language) -> Vec<StorylineView> {
    let text = &content::ui_text(language).results;
    StorylineKind::ordered()
        .into_iter()
        .map(|kind| {
            let line = content::storyline(kind, primary_type, language);
            let (title, label) = match kind {
                StorylineKind::Suppressed => {
                    (text.suppressed_title, text.storyline_labels.suppressed)
                }
                StorylineKind::ComingOut => {
                    (text.coming_out_title, text.storyline_labels.coming_out)
                }
                StorylineKind::Fluidity => (text.fluidity_title, text.storyline_labels.fluidity),
            };
            StorylineView {
                kind,
                title,
                label,
                story: line.story,
                risk: line.risk,
                opportunity: line.opportunity,
                suggestion: line.suggestion,
            }
        })
        .collect()
}

fn color_cards(primary_type: OrientationType, language: Language) -> Vec<ColorCardView> {
    content::color_bands()
        .map(|band| {
            let profile = content::type_profile(band.orientation, language);
            ColorCardView {
                min: band.min,
                max: band.max,
                orientation: band.orientation,
                label: profile.label,
                icon: profile.icon,
                color: profile.color,
                current: band.orientation == primary_type,
            }
        })
        .collect()
}

fn radar_chart(radar_data: &[RadarDatum], language: Language) -> Option<RadarChartView> {
    if radar_data.is_empty() {
        return None;
    }
    let text = &content::ui_text(language).results;
    let indicators = radar_data
        .iter()
        .map(|datum| RadarIndicator {
            key: datum.name,
            name: content::type_profile(datum.name, language).label,
            max: RADAR_MAX,
        })
        .collect();

    Some(RadarChartView {
        title: text.radar_title,
        note: text.radar_note,
        indicators,
        values: radar_data.iter().map(|datum| datum.value).collect(),
    })
}
