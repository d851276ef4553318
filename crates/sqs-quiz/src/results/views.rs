use crate::content::{ResourceTriple, StorylineKind, TypeProfile};
use crate::locale::Language;
use crate::questionnaire::{Dimension, OrientationType};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DimensionScoreView {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score: f64,
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarIndicator {
    pub key: OrientationType,
    pub name: &'static str,
    pub max: u8,
}

/// Chart input for an external renderer: indicators and the matching series.
#[derive(Debug, Clone, Serialize)]
pub struct RadarChartView {
    pub title: &'static str,
    pub note: &'static str,
    pub indicators: Vec<RadarIndicator>,
    pub values: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorCardView {
    pub min: u8,
    pub max: u8,
    pub orientation: OrientationType,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorylineView {
    pub kind: StorylineKind,
    pub title: &'static str,
    pub label: &'static str,
    pub story: &'static [&'static str],
    pub risk: &'static str,
    pub opportunity: &'static str,
    pub suggestion: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimarySource {
    /// Arg-max of the radar vector.
    Radar,
    /// Colour-card band of the attraction score.
    AttractionBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub language: Language,
    pub title: &'static str,
    pub warning: &'static str,
    pub primary: TypeProfile,
    pub primary_source: PrimarySource,
    pub type_definition: &'static str,
    pub dimension_scores: Vec<DimensionScoreView>,
    pub characteristics: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub story_highlight: &'static str,
    pub storylines: Vec<StorylineView>,
    pub resources: ResourceTriple,
    pub color_cards: Vec<ColorCardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarChartView>,
    pub safety_line: String,
}
