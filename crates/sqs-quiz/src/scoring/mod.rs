//! Dimension scoring and orientation classification.
//!
//! Scoring is a pure fold over the answer vector and the question table: the
//! three dimension sub-scores come from fixed ten-question slices, while the
//! radar vector buckets every answer by its question's orientation tag.

mod radar;

pub use radar::{primary_type, radar_data, CategoryTally, RadarDatum};

use crate::questionnaire::{
    AnswerVector, Dimension, OrientationType, Question, MAX_AGREEMENT, QUESTION_COUNT,
    SECTION_SIZE,
};
use serde::{Deserialize, Serialize};

/// Full-scale sum of one section: ten answers at the top of the scale.
const SECTION_MAX: f64 = (SECTION_SIZE as u32 * MAX_AGREEMENT as u32) as f64;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionScores {
    pub attraction: f64,
    pub relationship: f64,
    pub identity: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Attraction => self.attraction,
            Dimension::Relationship => self.relationship,
            Dimension::Identity => self.identity,
        }
    }

    /// Attraction score on the 0-100 scale used by the colour-card fallback.
    pub fn attraction_percent(&self) -> u8 {
        (self.attraction * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub dimension_scores: DimensionScores,
    pub radar_data: Vec<RadarDatum>,
    pub primary_type: OrientationType,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("questions {unanswered:?} are unanswered; every question must be answered before scoring")]
    Incomplete { unanswered: Vec<u8> },
    #[error("expected {QUESTION_COUNT} questions, got {actual}")]
    QuestionCount { actual: usize },
}

/// Scores a finished questionnaire.
///
/// Incomplete vectors are rejected rather than scored: summing unanswered
/// slots would silently deflate the fixed-denominator dimension scores.
pub fn score(answers: &AnswerVector, questions: &[Question]) -> Result<ScoreReport, ScoringError> {
    if questions.len() != QUESTION_COUNT {
        return Err(ScoringError::QuestionCount {
            actual: questions.len(),
        });
    }

    let unanswered = answers.unanswered_in(0..QUESTION_COUNT);
    if !unanswered.is_empty() {
        return Err(ScoringError::Incomplete { unanswered });
    }

    let dimension_scores = dimension_scores(answers);
    let tallies = CategoryTally::collect(answers, questions);
    let radar_data = radar_data(&tallies);
    let primary_type = primary_type(&radar_data);

    Ok(ScoreReport {
        dimension_scores,
        radar_data,
        primary_type,
    })
}

fn dimension_scores(answers: &AnswerVector) -> DimensionScores {
    let section = |dimension: Dimension| {
        let sum: u32 = answers.slots()[dimension.range()]
            .iter()
            .flatten()
            .map(|level| u32::from(level.value()))
            .sum();
        f64::from(sum) / SECTION_MAX
    };

    DimensionScores {
        attraction: section(Dimension::Attraction),
        relationship: section(Dimension::Relationship),
        identity: section(Dimension::Identity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use crate::questionnaire::{AgreementLevel, QuestionBank};

    fn bank() -> QuestionBank {
        QuestionBank::for_language(Language::En)
    }

    fn answers_from(raw: &[i64]) -> AnswerVector {
        AnswerVector::from_raw(raw).expect("valid answers")
    }

    fn value_of(report: &ScoreReport, orientation: OrientationType) -> u8 {
        report
            .radar_data
            .iter()
            .find(|datum| datum.name == orientation)
            .map(|datum| datum.value)
            .expect("orientation present")
    }

    #[test]
    fn all_zero_answers_score_nothing() {
        let answers = AnswerVector::filled(AgreementLevel::StronglyDisagree);
        let report = score(&answers, bank().questions()).expect("complete vector scores");

        assert_eq!(report.dimension_scores, DimensionScores::default());
        assert!(report.radar_data.iter().all(|datum| datum.value == 0));
        assert_eq!(report.primary_type, OrientationType::Heterosexual);
    }

    #[test]
    fn all_four_answers_score_full_marks() {
        let answers = AnswerVector::filled(AgreementLevel::StronglyAgree);
        let report = score(&answers, bank().questions()).expect("complete vector scores");

        assert_eq!(report.dimension_scores.attraction, 1.0);
        assert_eq!(report.dimension_scores.relationship, 1.0);
        assert_eq!(report.dimension_scores.identity, 1.0);
        assert_eq!(report.radar_data.len(), 9);
        assert!(report.radar_data.iter().all(|datum| datum.value == 100));
    }

    #[test]
    fn sectioned_answers_produce_expected_profile() {
        let mut raw = vec![4_i64; 10];
        raw.extend(vec![0; 10]);
        raw.extend(vec![2; 10]);
        let report = score(&answers_from(&raw), bank().questions()).expect("scores");

        assert_eq!(report.dimension_scores.attraction, 1.0);
        assert_eq!(report.dimension_scores.relationship, 0.0);
        assert_eq!(report.dimension_scores.identity, 0.5);

        assert_eq!(value_of(&report, OrientationType::Heterosexual), 50);
        assert_eq!(value_of(&report, OrientationType::Homosexual), 67);
        assert_eq!(value_of(&report, OrientationType::Bisexual), 50);
        assert_eq!(value_of(&report, OrientationType::Pansexual), 33);
        assert_eq!(value_of(&report, OrientationType::Asexual), 75);
        assert_eq!(value_of(&report, OrientationType::Graysexual), 63);
        assert_eq!(value_of(&report, OrientationType::Skoliosexual), 50);
        assert_eq!(value_of(&report, OrientationType::Objectum), 75);
        assert_eq!(value_of(&report, OrientationType::Sapiosexual), 17);
        assert_eq!(report.primary_type, OrientationType::Asexual);
    }

    #[test]
    fn section_exclusive_categories_hit_the_extremes() {
        let mut questions = bank().questions().to_vec();
        for (index, question) in questions.iter_mut().enumerate() {
            question.orientation = match index {
                0..=9 => OrientationType::Objectum,
                10..=19 => OrientationType::Sapiosexual,
                _ => OrientationType::Bisexual,
            };
        }
        let mut raw = vec![4_i64; 10];
        raw.extend(vec![0; 10]);
        raw.extend(vec![2; 10]);

        let report = score(&answers_from(&raw), &questions).expect("scores");

        assert_eq!(value_of(&report, OrientationType::Objectum), 100);
        assert_eq!(value_of(&report, OrientationType::Sapiosexual), 0);
        assert_eq!(value_of(&report, OrientationType::Bisexual), 50);
        assert_eq!(value_of(&report, OrientationType::Heterosexual), 0);
        assert_eq!(report.primary_type, OrientationType::Objectum);
    }

    #[test]
    fn dimension_scores_match_slice_sums() {
        let raw: Vec<i64> = (0..30).map(|index| (index * 7 % 5) as i64).collect();
        let answers = answers_from(&raw);
        let report = score(&answers, bank().questions()).expect("scores");

        for dimension in Dimension::ordered() {
            let expected = raw[dimension.range()].iter().sum::<i64>() as f64 / 40.0;
            let actual = report.dimension_scores.get(dimension);
            assert_eq!(actual, expected);
            assert!((0.0..=1.0).contains(&actual));
        }
        assert!(report.radar_data.iter().all(|datum| datum.value <= 100));
    }

    #[test]
    fn scoring_is_idempotent() {
        let raw: Vec<i64> = (0..30).map(|index| (index % 5) as i64).collect();
        let answers = answers_from(&raw);
        let first = score(&answers, bank().questions()).expect("scores");
        let second = score(&answers, bank().questions()).expect("scores");
        assert_eq!(first, second);
    }

    #[test]
    fn incomplete_vectors_are_rejected() {
        let mut raw = vec![3_i64; 30];
        raw[4] = -1;
        raw[29] = -1;

        let err = score(&answers_from(&raw), bank().questions()).expect_err("must reject");
        assert_eq!(
            err,
            ScoringError::Incomplete {
                unanswered: vec![5, 30]
            }
        );
    }

    #[test]
    fn truncated_question_tables_are_rejected() {
        let answers = AnswerVector::filled(AgreementLevel::Agree);
        let bank = bank();
        let questions = &bank.questions()[..29];
        assert_eq!(
            score(&answers, questions),
            Err(ScoringError::QuestionCount { actual: 29 })
        );
    }

    #[test]
    fn attraction_percent_rounds_for_the_fallback_card() {
        let scores = DimensionScores {
            attraction: 0.7,
            relationship: 0.0,
            identity: 0.0,
        };
        assert_eq!(scores.attraction_percent(), 70);
    }
}
