use crate::infra::{AppState, QuizState};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqs_quiz::content::{self, TypeGroup, TypeProfile, TypesText};
use sqs_quiz::error::AppError;
use sqs_quiz::locale::Language;
use sqs_quiz::navigation::{ResultsHandoff, Route};
use sqs_quiz::profile::ProfileEntryView;
use sqs_quiz::questionnaire::{
    AgreementLevel, AnswerVector, Dimension, OrientationType, QuestionBank,
};
use sqs_quiz::results::ResultsView;
use sqs_quiz::safety::{self, SafetyReading};
use sqs_quiz::scoring;
use tracing::info;

/// Optional `?lang=` override; the shared language context applies otherwise.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LanguageQuery {
    #[serde(default)]
    pub(crate) lang: Option<Language>,
}

impl LanguageQuery {
    fn resolve(&self, state: &QuizState) -> Language {
        self.lang.unwrap_or_else(|| state.current_language())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) id: u8,
    pub(crate) index: usize,
    pub(crate) orientation: OrientationType,
    pub(crate) text: &'static str,
    pub(crate) note: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SectionView {
    pub(crate) dimension: Dimension,
    pub(crate) label: &'static str,
    pub(crate) questions: Vec<QuestionView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OptionView {
    pub(crate) value: u8,
    pub(crate) label: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse {
    pub(crate) language: Language,
    pub(crate) title: &'static str,
    pub(crate) required: &'static str,
    pub(crate) sections: Vec<SectionView>,
    pub(crate) options: Vec<OptionView>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultsRequest {
    pub(crate) answers: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResultsResponse {
    pub(crate) handoff: ResultsHandoff,
    pub(crate) view: ResultsView,
}

#[derive(Debug, Serialize)]
pub(crate) struct TypesResponse {
    pub(crate) groups: Vec<TypeGroup>,
    pub(crate) labels: &'static TypesText,
}

#[derive(Debug, Serialize)]
pub(crate) struct TypeDetailResponse {
    pub(crate) profile: TypeProfile,
    pub(crate) labels: &'static TypesText,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProfileResponse {
    pub(crate) title: &'static str,
    pub(crate) history_title: &'static str,
    pub(crate) history: Vec<ProfileEntryView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LanguageResponse {
    pub(crate) language: Language,
    pub(crate) toggle_caption: &'static str,
}

impl From<Language> for LanguageResponse {
    fn from(language: Language) -> Self {
        Self {
            language,
            toggle_caption: language.toggle_caption(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SafetyResponse {
    pub(crate) line: String,
    pub(crate) reading: SafetyReading,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteQuery {
    pub(crate) path: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RouteResponse {
    pub(crate) path: String,
    pub(crate) route: Route,
    /// Where closing the type overlay leads; the route itself otherwise.
    pub(crate) close: Route,
}

pub(crate) fn quiz_router(state: QuizState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questions", get(questions_endpoint))
        .route("/api/v1/results", post(results_endpoint))
        .route("/api/v1/types", get(types_endpoint))
        .route("/api/v1/types/:type", get(type_detail_endpoint))
        .route("/api/v1/profile", get(profile_endpoint))
        .route("/api/v1/language", get(language_endpoint))
        .route("/api/v1/language/toggle", post(toggle_language_endpoint))
        .route("/api/v1/safety", get(safety_endpoint))
        .route("/api/v1/route", get(route_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_endpoint(
    State(state): State<QuizState>,
    Query(query): Query<LanguageQuery>,
) -> Json<QuestionsResponse> {
    let language = query.resolve(&state);
    let bank = QuestionBank::for_language(language);
    let text = &content::ui_text(language).test;

    let sections = Dimension::ordered()
        .into_iter()
        .map(|dimension| SectionView {
            dimension,
            label: dimension.label(language),
            questions: bank
                .section(dimension)
                .iter()
                .zip(dimension.range())
                .map(|(question, index)| QuestionView {
                    id: question.id,
                    index,
                    orientation: question.orientation,
                    text: question.text,
                    note: question.note,
                })
                .collect(),
        })
        .collect();

    let options = AgreementLevel::display_order()
        .into_iter()
        .map(|level| OptionView {
            value: level.value(),
            label: level.label(language),
        })
        .collect();

    Json(QuestionsResponse {
        language,
        title: text.title,
        required: text.required,
        sections,
        options,
    })
}

pub(crate) async fn results_endpoint(
    State(state): State<QuizState>,
    Query(query): Query<LanguageQuery>,
    Json(payload): Json<ResultsRequest>,
) -> Result<Json<ResultsResponse>, AppError> {
    let language = query.resolve(&state);
    let answers = AnswerVector::from_raw(&payload.answers)?;
    let bank = QuestionBank::for_language(language);
    let report = scoring::score(&answers, bank.questions())?;
    let primary_type = report.primary_type;

    state
        .history
        .lock()
        .expect("history mutex poisoned")
        .record(primary_type, Utc::now());
    info!(primary_type = %primary_type, "results recorded");

    let handoff = ResultsHandoff::from_report(&answers, report);
    let view = ResultsView::build(&handoff, language, None);
    Ok(Json(ResultsResponse { handoff, view }))
}

pub(crate) async fn types_endpoint(
    State(state): State<QuizState>,
    Query(query): Query<LanguageQuery>,
) -> Json<TypesResponse> {
    let language = query.resolve(&state);
    Json(TypesResponse {
        groups: content::types_overview(language),
        labels: &content::ui_text(language).types,
    })
}

pub(crate) async fn type_detail_endpoint(
    State(state): State<QuizState>,
    Path(key): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<TypeDetailResponse>, AppError> {
    let language = query.resolve(&state);
    let orientation: OrientationType = key.parse()?;
    Ok(Json(TypeDetailResponse {
        profile: content::type_profile(orientation, language),
        labels: &content::ui_text(language).types,
    }))
}

pub(crate) async fn profile_endpoint(
    State(state): State<QuizState>,
    Query(query): Query<LanguageQuery>,
) -> Json<ProfileResponse> {
    let language = query.resolve(&state);
    let text = &content::ui_text(language).profile;
    let history = state
        .history
        .lock()
        .expect("history mutex poisoned")
        .views(language);

    Json(ProfileResponse {
        title: text.title,
        history_title: text.history,
        history,
    })
}

pub(crate) async fn language_endpoint(State(state): State<QuizState>) -> Json<LanguageResponse> {
    Json(state.current_language().into())
}

pub(crate) async fn toggle_language_endpoint(
    State(state): State<QuizState>,
) -> Result<Json<LanguageResponse>, AppError> {
    let language = state
        .language
        .lock()
        .expect("language mutex poisoned")
        .toggle()?;
    info!(language = %language, "language toggled");
    Ok(Json(language.into()))
}

pub(crate) async fn safety_endpoint(
    State(state): State<QuizState>,
    Query(query): Query<LanguageQuery>,
) -> Json<SafetyResponse> {
    let language = query.resolve(&state);
    let reading = safety::lookup(state.locator.as_ref(), language).await;
    Json(SafetyResponse {
        line: reading.line(language),
        reading,
    })
}

pub(crate) async fn route_endpoint(Query(query): Query<RouteQuery>) -> Response {
    match Route::parse(&query.path) {
        Some(route) => Json(RouteResponse {
            path: route.path(),
            route,
            close: route.close_overlay(),
        })
        .into_response(),
        None => {
            let payload = json!({ "error": format!("no page at '{}'", query.path) });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use sqs_quiz::locale::{InMemoryPreferenceStore, LanguageContext, PreferenceStore};
    use sqs_quiz::safety::{GeoError, GeoLocation, GeoLocator};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct OfflineLocator;

    #[async_trait]
    impl GeoLocator for OfflineLocator {
        async fn locate(&self) -> Result<GeoLocation, GeoError> {
            Err(GeoError::Status(500))
        }
    }

    fn quiz_state(language: Language) -> QuizState {
        let store: Arc<dyn PreferenceStore> = Arc::new(InMemoryPreferenceStore::default());
        let mut context = LanguageContext::load(store);
        context.set(language).expect("in-memory store accepts writes");
        QuizState::new(context, Arc::new(OfflineLocator))
    }

    fn app(state: QuizState) -> Router {
        let app_state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        quiz_router(state).layer(Extension(app_state))
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request builds")
    }

    fn e2e_answers() -> Vec<i64> {
        let mut answers = vec![4; 10];
        answers.extend([0; 10]);
        answers.extend([2; 10]);
        answers
    }

    #[tokio::test]
    async fn questions_are_grouped_into_three_sections() {
        let response = app(quiz_state(Language::En))
            .oneshot(get_request("/api/v1/questions"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json_body(response).await;
        let sections = body["sections"].as_array().expect("sections");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1]["label"], "Relationship Patterns");
        assert_eq!(sections[2]["questions"][0]["id"], 21);
        assert_eq!(body["options"][0]["value"], 4);
    }

    #[tokio::test]
    async fn results_are_scored_and_recorded_in_profile() {
        let state = quiz_state(Language::En);
        let response = app(state.clone())
            .oneshot(post_json("/api/v1/results", json!({ "answers": e2e_answers() })))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json_body(response).await;
        assert_eq!(body["handoff"]["primaryType"], "asexual");
        assert_eq!(body["handoff"]["scores"]["attraction"], 1.0);
        assert_eq!(body["view"]["primary"]["label"], "Asexual");
        assert_eq!(body["view"]["radar"]["values"][1], 67);

        let response = app(state)
            .oneshot(get_request("/api/v1/profile?lang=zh"))
            .await
            .expect("request succeeds");
        let body = read_json_body(response).await;
        assert_eq!(body["history"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["history"][0]["result"], "无性恋 Asexual");
    }

    #[tokio::test]
    async fn incomplete_answers_are_unprocessable() {
        let mut answers = e2e_answers();
        answers[12] = -1;
        let response = app(quiz_state(Language::En))
            .oneshot(post_json("/api/v1/results", json!({ "answers": answers })))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json_body(response).await;
        assert!(body["error"].as_str().expect("message").contains("13"));

        let response = app(quiz_state(Language::En))
            .oneshot(post_json("/api/v1/results", json!({ "answers": [7] })))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn type_detail_rejects_unknown_keys() {
        let response = app(quiz_state(Language::Zh))
            .oneshot(get_request("/api/v1/types/objectum"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["profile"]["icon"], "🏛️");
        assert_eq!(body["labels"]["misunderstandings"], "常见误解");

        let response = app(quiz_state(Language::Zh))
            .oneshot(get_request("/api/v1/types/dragon"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn toggling_language_changes_question_text() {
        let state = quiz_state(Language::Zh);
        let response = app(state.clone())
            .oneshot(Request::post("/api/v1/language/toggle").body(Body::empty()).expect("request"))
            .await
            .expect("request succeeds");
        let body = read_json_body(response).await;
        assert_eq!(body["language"], "en");
        assert_eq!(body["toggle_caption"], "中文");

        let response = app(state)
            .oneshot(get_request("/api/v1/questions"))
            .await
            .expect("request succeeds");
        let body = read_json_body(response).await;
        assert_eq!(body["language"], "en");
        assert_eq!(body["title"], "Sexual Orientation Awareness Test");
    }

    #[tokio::test]
    async fn safety_falls_back_when_lookup_fails() {
        let response = app(quiz_state(Language::En))
            .oneshot(get_request("/api/v1/safety"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["reading"]["fallback"], true);
        assert_eq!(body["reading"]["score"], 60);
    }

    #[tokio::test]
    async fn route_lookup_resolves_overlays() {
        let response = app(quiz_state(Language::En))
            .oneshot(get_request("/api/v1/route?path=/types/asexual"))
            .await
            .expect("request succeeds");
        let body = read_json_body(response).await;
        assert_eq!(body["route"], json!({ "page": "types", "overlay": "asexual" }));
        assert_eq!(body["close"], json!({ "page": "types", "overlay": null }));

        let response = app(quiz_state(Language::En))
            .oneshot(get_request("/api/v1/route?path=/profile"))
            .await
            .expect("request succeeds");
        let body = read_json_body(response).await;
        assert_eq!(body["close"], body["route"]);

        let response = app(quiz_state(Language::En))
            .oneshot(get_request("/api/v1/route?path=/nowhere"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn operational_endpoints_respond() {
        let response = app(quiz_state(Language::En))
            .oneshot(get_request("/ready"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(quiz_state(Language::En))
            .oneshot(get_request("/health"))
            .await
            .expect("request succeeds");
        assert_eq!(read_json_body(response).await, json!({ "status": "ok" }));
    }
}
