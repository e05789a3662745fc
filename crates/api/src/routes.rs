use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use uranai_core::config::Settings;
use uranai_core::domain::error::{FieldError, InputValidationError, REJECTED_TITLE};
use uranai_core::domain::request::{FortuneForm, NameFortuneForm};
use uranai_core::domain::result::{NameFortuneResult, WeeklyFortune};
use uranai_core::fortune::{generate_name_fortune, generate_weekly_fortune};

const WELCOME_TITLE: &str = "四柱推命占いシステムへようこそ";

#[derive(Debug, Clone)]
pub struct AppState {
    settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/fortune", post(weekly_fortune))
        .route("/name-fortune", post(name_fortune))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexView {
    title: &'static str,
    weekly_fields: [&'static str; 4],
    name_fields: [&'static str; 3],
}

async fn index() -> Json<IndexView> {
    Json(IndexView {
        title: WELCOME_TITLE,
        weekly_fields: ["birthDate", "birthTime", "prefecture", "gender"],
        name_fields: ["familyName", "givenName", "gender"],
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RejectedView {
    title: &'static str,
    errors: Vec<FieldError>,
    form: serde_json::Value,
}

#[derive(Debug)]
enum ApiError {
    Rejected(RejectedView),
    Internal,
}

impl ApiError {
    fn rejected(err: InputValidationError, form: &impl Serialize) -> Self {
        tracing::info!(error = %err, "form rejected");
        ApiError::Rejected(RejectedView {
            title: REJECTED_TITLE,
            errors: err.errors,
            form: serde_json::to_value(form).unwrap_or_default(),
        })
    }

    /// A body that could not be decoded at all; nothing to echo back.
    fn undecodable(field: &'static str, rejection: FormRejection) -> Self {
        Self::rejected(
            InputValidationError::single(field, rejection.body_text()),
            &serde_json::Value::Null,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Rejected(view) => (StatusCode::BAD_REQUEST, Json(view)).into_response(),
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WeeklyFortuneView {
    birth_date: String,
    birth_time: String,
    prefecture: String,
    gender: String,
    #[serde(flatten)]
    fortune: WeeklyFortune,
}

async fn weekly_fortune(
    State(state): State<AppState>,
    form: Result<Form<FortuneForm>, FormRejection>,
) -> Result<Json<WeeklyFortuneView>, ApiError> {
    let Form(form) = form.map_err(|e| ApiError::undecodable("birthDate", e))?;
    let request = form
        .clone()
        .validate_and_into_request()
        .map_err(|e| ApiError::rejected(e, &form))?;

    let today = state.settings.today(chrono::Utc::now()).map_err(|e| {
        sentry_anyhow::capture_anyhow(&e);
        tracing::error!(error = %e, "failed to resolve today's date");
        ApiError::Internal
    })?;

    let fortune = generate_weekly_fortune(&request, today);

    Ok(Json(WeeklyFortuneView {
        birth_date: request.birth_date.format("%Y-%m-%d").to_string(),
        birth_time: request.birth_time.unwrap_or_default(),
        prefecture: request.prefecture,
        gender: request.gender,
        fortune,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NameFortuneView {
    family_name: String,
    given_name: String,
    gender: String,
    #[serde(flatten)]
    result: NameFortuneResult,
}

async fn name_fortune(
    form: Result<Form<NameFortuneForm>, FormRejection>,
) -> Result<Json<NameFortuneView>, ApiError> {
    let Form(form) = form.map_err(|e| ApiError::undecodable("familyName", e))?;
    let request = form
        .clone()
        .validate_and_into_request()
        .map_err(|e| ApiError::rejected(e, &form))?;

    let result = generate_name_fortune(&request);

    Ok(Json(NameFortuneView {
        family_name: request.family_name,
        given_name: request.given_name,
        gender: request.gender,
        result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn app() -> Router {
        let settings = Settings {
            today_override: NaiveDate::from_ymd_opt(2024, 1, 15),
            ..Settings::default()
        };
        router(AppState::new(settings))
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn index_shows_welcome_title() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["title"], WELCOME_TITLE);
        assert_eq!(body["weeklyFields"][0], "birthDate");
    }

    #[tokio::test]
    async fn weekly_fortune_returns_seven_days() {
        let response = app()
            .oneshot(form_post(
                "/fortune",
                "birthDate=2024-01-15&prefecture=tokyo&gender=female",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["birthDate"], "2024-01-15");
        assert_eq!(body["birthTime"], "");
        assert_eq!(body["prefecture"], "tokyo");
        assert_eq!(body["primaryElement"], "wood");

        let days = body["days"].as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["label"], "今日 (1月15日 月曜日)");
        assert_eq!(days[0]["rating"], "poor");
        assert_eq!(days[0]["ratingText"], "小吉");
        assert_eq!(days[1]["label"], "明日 (1月16日 火曜日)");
        assert_eq!(days[1]["rating"], "good");
        assert_eq!(days[2]["label"], "1月17日 (水曜日)");
    }

    #[tokio::test]
    async fn weekly_fortune_rejects_malformed_date() {
        let response = app()
            .oneshot(form_post("/fortune", "birthDate=2024%2F01%2F15&gender=male"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["title"], REJECTED_TITLE);
        assert_eq!(body["errors"][0]["field"], "birthDate");
        assert_eq!(body["form"]["birthDate"], "2024/01/15");
        assert_eq!(body["form"]["gender"], "male");
    }

    #[tokio::test]
    async fn weekly_fortune_rejects_missing_date() {
        let response = app()
            .oneshot(form_post("/fortune", "gender=male"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn name_fortune_counts_strokes() {
        // familyName=田中, givenName=太郎
        let response = app()
            .oneshot(form_post(
                "/name-fortune",
                "familyName=%E7%94%B0%E4%B8%AD&givenName=%E5%A4%AA%E9%83%8E&gender=male",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["familyName"], "田中");
        assert_eq!(body["givenName"], "太郎");
        assert_eq!(body["familyNameStrokes"], 9);
        assert_eq!(body["givenNameStrokes"], 13);
        assert_eq!(body["totalNumber"], 22);
        assert_eq!(body["personNumber"], 12);
        assert_eq!(body["rating"], "average");
        assert_eq!(body["ratingText"], "中吉");
        assert!(!body["advice"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn name_fortune_requires_both_names() {
        let response = app()
            .oneshot(form_post("/name-fortune", "familyName=%E7%94%B0%E4%B8%AD"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
        assert_eq!(body["errors"][0]["field"], "givenName");
        assert_eq!(body["form"]["familyName"], "田中");
    }

    #[tokio::test]
    async fn weekly_fortune_rejects_undecodable_body() {
        for body in ["birthDate=%FF", "birthDate=2024-01-15&birthDate=2024-01-16"] {
            let response = app().oneshot(form_post("/fortune", body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");

            let body = json_body(response).await;
            assert_eq!(body["title"], REJECTED_TITLE);
            assert_eq!(body["errors"][0]["field"], "birthDate");
        }
    }

    #[tokio::test]
    async fn name_fortune_rejects_wrong_content_type() {
        let req = Request::builder()
            .method("POST")
            .uri("/name-fortune")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("familyName=x&givenName=y"))
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["title"], REJECTED_TITLE);
        assert_eq!(body["errors"][0]["field"], "familyName");
        assert!(body["form"].is_null());
    }
}
