use crate::questionnaire::OrientationType;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Score bands of the colour-card table, in display order.
const BANDS: [(u8, u8, OrientationType); 9] = [
    (0, 19, OrientationType::Heterosexual),
    (20, 39, OrientationType::Homosexual),
    (40, 54, OrientationType::Bisexual),
    (55, 64, OrientationType::Pansexual),
    (65, 74, OrientationType::Graysexual),
    (75, 84, OrientationType::Asexual),
    (85, 89, OrientationType::Skoliosexual),
    (90, 94, OrientationType::Objectum),
    (95, 100, OrientationType::Sapiosexual),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorBand {
    pub min: u8,
    pub max: u8,
    pub orientation: OrientationType,
}

impl ColorBand {
    pub fn range(&self) -> RangeInclusive<u8> {
        self.min..=self.max
    }
}

pub fn color_bands() -> impl Iterator<Item = ColorBand> {
    BANDS
        .into_iter()
        .map(|(min, max, orientation)| ColorBand { min, max, orientation })
}

/// Fallback classifier used when no radar data reached the results view.
/// Scores above 100 clamp into the last band.
pub fn classify_score(score: u8) -> OrientationType {
    let score = score.min(100);
    color_bands()
        .find(|band| band.range().contains(&score))
        .map(|band| band.orientation)
        .unwrap_or(OrientationType::Sapiosexual)
}
