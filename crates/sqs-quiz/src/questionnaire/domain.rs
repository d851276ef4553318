use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const QUESTION_COUNT: usize = 30;
pub const SECTION_SIZE: usize = 10;
pub const MAX_AGREEMENT: u8 = 4;

/// One of the nine orientation categories questions are tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationType {
    Heterosexual,
    Homosexual,
    Bisexual,
    Pansexual,
    Asexual,
    Graysexual,
    Skoliosexual,
    Objectum,
    Sapiosexual,
}

impl OrientationType {
    /// Canonical order used for radar data and tie-breaking.
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Heterosexual,
            Self::Homosexual,
            Self::Bisexual,
            Self::Pansexual,
            Self::Asexual,
            Self::Graysexual,
            Self::Skoliosexual,
            Self::Objectum,
            Self::Sapiosexual,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Heterosexual => "heterosexual",
            Self::Homosexual => "homosexual",
            Self::Bisexual => "bisexual",
            Self::Pansexual => "pansexual",
            Self::Asexual => "asexual",
            Self::Graysexual => "graysexual",
            Self::Skoliosexual => "skoliosexual",
            Self::Objectum => "objectum",
            Self::Sapiosexual => "sapiosexual",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ordered()
            .into_iter()
            .find(|orientation| orientation.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for OrientationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrientation(pub String);

impl fmt::Display for UnknownOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown orientation type '{}'", self.0)
    }
}

impl std::error::Error for UnknownOrientation {}

impl FromStr for OrientationType {
    type Err = UnknownOrientation;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_key(value).ok_or_else(|| UnknownOrientation(value.to_string()))
    }
}

/// The three ten-question sections of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Attraction,
    Relationship,
    Identity,
}

impl Dimension {
    pub const fn ordered() -> [Self; 3] {
        [Self::Attraction, Self::Relationship, Self::Identity]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ordered().get(index).copied()
    }

    /// Answer slice covered by this section.
    pub const fn range(self) -> std::ops::Range<usize> {
        let start = self.index() * SECTION_SIZE;
        start..start + SECTION_SIZE
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Attraction, Language::Zh) => "情感吸引光谱",
            (Self::Relationship, Language::Zh) => "关系构建模式",
            (Self::Identity, Language::Zh) => "社会身份认知",
            (Self::Attraction, Language::En) => "Attraction Spectrum",
            (Self::Relationship, Language::En) => "Relationship Patterns",
            (Self::Identity, Language::En) => "Identity Cognition",
        }
    }
}

/// Five-point agreement scale; the discriminant is the scored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgreementLevel {
    StronglyDisagree = 0,
    Disagree = 1,
    NotSure = 2,
    Agree = 3,
    StronglyAgree = 4,
}

impl AgreementLevel {
    /// Display order of the option buttons, most agreeable first.
    pub const fn display_order() -> [Self; 5] {
        [
            Self::StronglyAgree,
            Self::Agree,
            Self::NotSure,
            Self::Disagree,
            Self::StronglyDisagree,
        ]
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::StronglyDisagree),
            1 => Some(Self::Disagree),
            2 => Some(Self::NotSure),
            3 => Some(Self::Agree),
            4 => Some(Self::StronglyAgree),
            _ => None,
        }
    }

    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::StronglyDisagree, Language::Zh) => "非常不同意",
            (Self::Disagree, Language::Zh) => "比较不同意",
            (Self::NotSure, Language::Zh) => "不确定",
            (Self::Agree, Language::Zh) => "比较同意",
            (Self::StronglyAgree, Language::Zh) => "非常同意",
            (Self::StronglyDisagree, Language::En) => "Strongly Disagree",
            (Self::Disagree, Language::En) => "Disagree",
            (Self::NotSure, Language::En) => "Not Sure",
            (Self::Agree, Language::En) => "Agree",
            (Self::StronglyAgree, Language::En) => "Strongly Agree",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u8,
    pub dimension: Dimension,
    pub orientation: OrientationType,
    pub text: &'static str,
    pub note: &'static str,
}

/// Raw answer outside the `-1..=4` wire range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("answer {value} at position {position} is outside -1..=4")]
pub struct InvalidAnswer {
    pub position: usize,
    pub value: i64,
}

/// Fixed-length answer vector; `None` marks an unanswered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerVector([Option<AgreementLevel>; QUESTION_COUNT]);

impl Default for AnswerVector {
    fn default() -> Self {
        Self::unanswered()
    }
}

impl AnswerVector {
    pub const fn unanswered() -> Self {
        Self([None; QUESTION_COUNT])
    }

    pub fn filled(level: AgreementLevel) -> Self {
        Self([Some(level); QUESTION_COUNT])
    }

    /// Builds a vector from wire integers where `-1` means unanswered.
    pub fn from_raw(raw: &[i64]) -> Result<Self, InvalidAnswer> {
        let mut answers = [None; QUESTION_COUNT];
        for (position, slot) in answers.iter_mut().enumerate() {
            let value = raw.get(position).copied().unwrap_or(-1);
            *slot = match value {
                -1 => None,
                0..=4 => AgreementLevel::from_value(value as u8),
                _ => return Err(InvalidAnswer { position, value }),
            };
        }
        if raw.len() > QUESTION_COUNT {
            return Err(InvalidAnswer {
                position: QUESTION_COUNT,
                value: raw[QUESTION_COUNT],
            });
        }
        Ok(Self(answers))
    }

    pub fn to_raw(&self) -> Vec<i8> {
        self.0
            .iter()
            .map(|answer| answer.map_or(-1, |level| level.value() as i8))
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<AgreementLevel> {
        self.0.get(index).copied().flatten()
    }

    pub(crate) fn set(&mut self, index: usize, level: AgreementLevel) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = Some(level);
                true
            }
            None => false,
        }
    }

    pub fn slots(&self) -> &[Option<AgreementLevel>; QUESTION_COUNT] {
        &self.0
    }

    /// One-based ids of unanswered questions within `range`.
    pub fn unanswered_in(&self, range: std::ops::Range<usize>) -> Vec<u8> {
        range
            .filter(|&index| self.0[index].is_none())
            .map(|index| index as u8 + 1)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_indices() {
        for (position, orientation) in OrientationType::ordered().into_iter().enumerate() {
            assert_eq!(orientation.index(), position);
            assert_eq!(OrientationType::from_key(orientation.key()), Some(orientation));
        }
        assert!("unicorn".parse::<OrientationType>().is_err());
    }

    #[test]
    fn dimension_ranges_cover_the_questionnaire() {
        assert_eq!(Dimension::Attraction.range(), 0..10);
        assert_eq!(Dimension::Relationship.range(), 10..20);
        assert_eq!(Dimension::Identity.range(), 20..30);
        assert_eq!(Dimension::Identity.next(), None);
    }

    #[test]
    fn raw_answers_reject_out_of_scale_values() {
        let mut raw = vec![2_i64; QUESTION_COUNT];
        raw[7] = 5;
        let err = AnswerVector::from_raw(&raw).expect_err("5 is not on the scale");
        assert_eq!(err.position, 7);

        raw[7] = -1;
        let answers = AnswerVector::from_raw(&raw).expect("-1 marks unanswered");
        assert_eq!(answers.get(7), None);
        assert_eq!(answers.unanswered_in(0..10), vec![8]);
        assert_eq!(answers.to_raw()[7], -1);
    }

    #[test]
    fn short_raw_input_is_padded_as_unanswered() {
        let answers = AnswerVector::from_raw(&[4, 4]).expect("short input accepted");
        assert_eq!(answers.get(0), Some(AgreementLevel::StronglyAgree));
        assert!(!answers.is_complete());
        assert_eq!(answers.unanswered_in(0..3), vec![3]);
    }
}
