use crate::questionnaire::{AnswerVector, OrientationType, Question, MAX_AGREEMENT};
use serde::{Deserialize, Serialize};

/// Running agreement sum and answered-question count for one orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTally {
    pub total: u32,
    pub count: u32,
}

impl CategoryTally {
    /// Folds answered (question, answer) pairs into canonical-order tallies.
    pub fn collect(answers: &AnswerVector, questions: &[Question]) -> [CategoryTally; 9] {
        questions
            .iter()
            .zip(answers.slots())
            .filter_map(|(question, answer)| answer.map(|level| (question.orientation, level)))
            .fold([CategoryTally::default(); 9], |mut tallies, (orientation, level)| {
                let tally = &mut tallies[orientation.index()];
                tally.total += u32::from(level.value());
                tally.count += 1;
                tallies
            })
    }

    /// Mean agreement as a 0-100 percentage; zero when nothing was answered.
    pub fn percent(&self) -> u8 {
        if self.count == 0 {
            return 0;
        }
        let max = f64::from(self.count * u32::from(MAX_AGREEMENT));
        (f64::from(self.total) / max * 100.0).round() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarDatum {
    pub name: OrientationType,
    pub value: u8,
}

pub fn radar_data(tallies: &[CategoryTally; 9]) -> Vec<RadarDatum> {
    OrientationType::ordered()
        .into_iter()
        .map(|name| RadarDatum {
            name,
            value: tallies[name.index()].percent(),
        })
        .collect()
}

/// Highest radar value; the earliest category in canonical order wins ties.
pub fn primary_type(radar: &[RadarDatum]) -> OrientationType {
    let mut best: Option<RadarDatum> = None;
    for datum in radar {
        match best {
            Some(current) if datum.value <= current.value => {}
            _ => best = Some(*datum),
        }
    }
    best.map(|datum| datum.name)
        .unwrap_or(OrientationType::Heterosexual)
}
