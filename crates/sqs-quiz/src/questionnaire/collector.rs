use super::bank::QuestionBank;
use super::domain::{AgreementLevel, AnswerVector, Dimension, Question, QUESTION_COUNT};
use crate::locale::Language;
use crate::navigation::ResultsHandoff;
use crate::scoring::{self, ScoringError};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("question index {index} is outside 0..{QUESTION_COUNT}")]
    IndexOutOfRange { index: usize },
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Result of pressing the advance control.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// The active section still has unanswered questions; nothing changed.
    Blocked { section: Dimension, missing: Vec<u8> },
    NextSection(Dimension),
    Completed(ResultsHandoff),
}

/// Walks a respondent forward through the three questionnaire sections.
#[derive(Debug, Clone)]
pub struct AnswerCollector {
    bank: QuestionBank,
    answers: AnswerVector,
    section: Dimension,
}

impl AnswerCollector {
    pub fn new(language: Language) -> Self {
        Self {
            bank: QuestionBank::for_language(language),
            answers: AnswerVector::unanswered(),
            section: Dimension::Attraction,
        }
    }

    pub fn language(&self) -> Language {
        self.bank.language()
    }

    /// Swaps the question text set; recorded answers are kept.
    pub fn switch_language(&mut self, language: Language) {
        if self.bank.language() != language {
            self.bank = QuestionBank::for_language(language);
        }
    }

    pub fn current_section(&self) -> Dimension {
        self.section
    }

    pub fn is_last_section(&self) -> bool {
        self.section.next().is_none()
    }

    /// Questions of the active section paired with their absolute index.
    pub fn current_questions(&self) -> impl Iterator<Item = (usize, &Question)> {
        let range = self.section.range();
        let start = range.start;
        self.bank
            .section(self.section)
            .iter()
            .enumerate()
            .map(move |(offset, question)| (start + offset, question))
    }

    pub fn answers(&self) -> &AnswerVector {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<AgreementLevel> {
        self.answers.get(index)
    }

    pub fn record_answer(
        &mut self,
        index: usize,
        level: AgreementLevel,
    ) -> Result<(), CollectorError> {
        if !self.answers.set(index, level) {
            return Err(CollectorError::IndexOutOfRange { index });
        }
        debug!(question = index + 1, value = level.value(), "answer recorded");
        Ok(())
    }

    pub fn is_section_complete(&self, section: Dimension) -> bool {
        self.missing_in_section(section).is_empty()
    }

    /// One-based ids of unanswered questions in `section`.
    pub fn missing_in_section(&self, section: Dimension) -> Vec<u8> {
        self.answers.unanswered_in(section.range())
    }

    /// Whether the advance control is enabled for the active section.
    pub fn can_advance(&self) -> bool {
        self.is_section_complete(self.section)
    }

    pub fn advance(&mut self) -> Result<AdvanceOutcome, CollectorError> {
        let missing = self.missing_in_section(self.section);
        if !missing.is_empty() {
            return Ok(AdvanceOutcome::Blocked {
                section: self.section,
                missing,
            });
        }

        if let Some(next) = self.section.next() {
            self.section = next;
            debug!(section = ?next, "advanced to next section");
            return Ok(AdvanceOutcome::NextSection(next));
        }

        let report = scoring::score(&self.answers, self.bank.questions())?;
        info!(
            primary_type = %report.primary_type,
            attraction = report.dimension_scores.attraction,
            relationship = report.dimension_scores.relationship,
            identity = report.dimension_scores.identity,
            "questionnaire submitted"
        );
        Ok(AdvanceOutcome::Completed(ResultsHandoff::from_report(
            &self.answers,
            report,
        )))
    }

    /// Clears every answer and returns to the first section.
    pub fn reset(&mut self) {
        self.answers = AnswerVector::unanswered();
        self.section = Dimension::Attraction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::OrientationType;

    fn answer_section(collector: &mut AnswerCollector, level: AgreementLevel) {
        let indices: Vec<usize> = collector.current_questions().map(|(index, _)| index).collect();
        for index in indices {
            collector.record_answer(index, level).expect("index in range");
        }
    }

    #[test]
    fn one_missing_answer_keeps_advance_disabled() {
        for last in AgreementLevel::display_order() {
            let mut collector = AnswerCollector::new(Language::En);
            for index in 0..9 {
                collector
                    .record_answer(index, AgreementLevel::Agree)
                    .expect("in range");
            }

            assert!(!collector.can_advance());
            assert_eq!(
                collector.advance().expect("no error"),
                AdvanceOutcome::Blocked {
                    section: Dimension::Attraction,
                    missing: vec![10],
                }
            );
            assert_eq!(collector.current_section(), Dimension::Attraction);

            collector.record_answer(9, last).expect("in range");
            assert!(collector.can_advance(), "value {} should unlock", last.value());
            assert_eq!(
                collector.advance().expect("no error"),
                AdvanceOutcome::NextSection(Dimension::Relationship)
            );
        }
    }

    #[test]
    fn answers_outside_the_active_section_do_not_unlock_it() {
        let mut collector = AnswerCollector::new(Language::Zh);
        for index in 10..30 {
            collector
                .record_answer(index, AgreementLevel::Agree)
                .expect("in range");
        }
        assert!(!collector.can_advance());
        assert!(collector.is_section_complete(Dimension::Identity));
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mut collector = AnswerCollector::new(Language::En);
        let err = collector
            .record_answer(QUESTION_COUNT, AgreementLevel::Agree)
            .expect_err("index 30 is out of range");
        assert!(matches!(err, CollectorError::IndexOutOfRange { index: 30 }));
    }

    #[test]
    fn final_advance_hands_off_scored_results() {
        let mut collector = AnswerCollector::new(Language::En);

        answer_section(&mut collector, AgreementLevel::StronglyAgree);
        collector.advance().expect("advance");
        answer_section(&mut collector, AgreementLevel::StronglyDisagree);
        collector.advance().expect("advance");
        answer_section(&mut collector, AgreementLevel::NotSure);
        assert!(collector.is_last_section());

        match collector.advance().expect("scoring succeeds") {
            AdvanceOutcome::Completed(handoff) => {
                assert_eq!(handoff.scores.attraction, 1.0);
                assert_eq!(handoff.scores.relationship, 0.0);
                assert_eq!(handoff.scores.identity, 0.5);
                assert_eq!(handoff.answers.len(), QUESTION_COUNT);
                assert_eq!(handoff.radar_data.len(), 9);
                assert_eq!(handoff.primary_type, Some(OrientationType::Asexual));
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn reset_starts_a_retake() {
        let mut collector = AnswerCollector::new(Language::En);
        answer_section(&mut collector, AgreementLevel::Agree);
        collector.advance().expect("advance");

        collector.reset();
        assert_eq!(collector.current_section(), Dimension::Attraction);
        assert_eq!(collector.answer(0), None);
    }

    #[test]
    fn switching_language_keeps_answers() {
        let mut collector = AnswerCollector::new(Language::Zh);
        collector
            .record_answer(0, AgreementLevel::Agree)
            .expect("in range");
        collector.switch_language(Language::En);

        assert_eq!(collector.language(), Language::En);
        assert_eq!(collector.answer(0), Some(AgreementLevel::Agree));
        let (_, first) = collector.current_questions().next().expect("question");
        assert!(first.text.starts_with("The scent"));
    }
}
