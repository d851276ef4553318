//! In-process navigation surface and the state handed to the results view.

use crate::questionnaire::{AnswerVector, OrientationType};
use crate::scoring::{DimensionScores, RadarDatum, ScoreReport};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "overlay", rename_all = "snake_case")]
pub enum Route {
    Home,
    Test,
    Results,
    Profile,
    /// Types overview; `Some` opens the detail overlay for that type.
    Types(Option<OrientationType>),
}

impl Route {
    /// Resolves a path. Unknown `/types/:type` keys open the overview with no
    /// overlay; any other unknown path is `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Self::Home),
            ["test"] => Some(Self::Test),
            ["results"] => Some(Self::Results),
            ["profile"] => Some(Self::Profile),
            ["types"] => Some(Self::Types(None)),
            ["types", key] => Some(Self::Types(OrientationType::from_key(key))),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Test => "/test".to_string(),
            Self::Results => "/results".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Types(None) => "/types".to_string(),
            Self::Types(Some(orientation)) => format!("/types/{}", orientation.key()),
        }
    }

    /// Closing a type overlay returns to the overview.
    pub fn close_overlay(self) -> Self {
        match self {
            Self::Types(Some(_)) => Self::Types(None),
            other => other,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Transient state passed from the quiz to the results view on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsHandoff {
    pub scores: DimensionScores,
    pub answers: Vec<i8>,
    #[serde(default)]
    pub radar_data: Vec<RadarDatum>,
    #[serde(default)]
    pub primary_type: Option<OrientationType>,
}

impl ResultsHandoff {
    pub fn from_report(answers: &AnswerVector, report: ScoreReport) -> Self {
        Self {
            scores: report.dimension_scores,
            answers: answers.to_raw(),
            radar_data: report.radar_data,
            primary_type: Some(report.primary_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn routes_round_trip_through_paths() {
        let mut routes = vec![
            Route::Home,
            Route::Test,
            Route::Results,
            Route::Profile,
            Route::Types(None),
        ];
        routes.extend(
            OrientationType::ordered()
                .into_iter()
                .map(|orientation| Route::Types(Some(orientation))),
        );

        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn unknown_type_opens_no_overlay() {
        assert_eq!(Route::parse("/types/dragon"), Some(Route::Types(None)));
        assert_eq!(Route::parse("/types/asexual/"), Some(Route::Types(Some(OrientationType::Asexual))));
        assert_eq!(Route::parse("/nowhere"), None);
        assert_eq!(Route::parse("/test?lang=en"), Some(Route::Test));
    }

    #[test]
    fn closing_an_overlay_returns_to_overview() {
        let route = Route::Types(Some(OrientationType::Objectum));
        assert_eq!(route.close_overlay(), Route::Types(None));
        assert_eq!(Route::Profile.close_overlay(), Route::Profile);
    }

    #[test]
    fn handoff_serializes_with_navigation_field_names() {
        let handoff = ResultsHandoff {
            scores: DimensionScores {
                attraction: 1.0,
                relationship: 0.0,
                identity: 0.5,
            },
            answers: vec![4; 30],
            radar_data: vec![RadarDatum {
                name: OrientationType::Bisexual,
                value: 50,
            }],
            primary_type: Some(OrientationType::Bisexual),
        };

        let value = serde_json::to_value(&handoff).expect("serializes");
        assert_eq!(value["primaryType"], json!("bisexual"));
        assert_eq!(value["radarData"][0], json!({ "name": "bisexual", "value": 50 }));
        assert_eq!(value["scores"]["identity"], json!(0.5));

        let parsed: ResultsHandoff = serde_json::from_value(json!({
            "scores": { "attraction": 0.25, "relationship": 0.0, "identity": 0.0 },
            "answers": [1, 2, 3]
        }))
        .expect("legacy state without radar data parses");
        assert!(parsed.radar_data.is_empty());
        assert_eq!(parsed.primary_type, None);
    }
}
