use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use roomlens_api::config::ServerConfig;
use roomlens_api::routes;
use roomlens_api::state::AppState;
use roomlens_core::analysis::{RenovationScenario, RoomAnalysis};
use roomlens_core::generator::{GeneratorError, ScenarioGenerator};
use roomlens_core::room::{Rating, RoomType, ScenarioTier};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8081".to_string()],
        request_timeout_secs: 30,
        body_limit_bytes: 10 * 1024 * 1024,
    }
}

/// Three well-formed scenarios in the stable tier order.
pub fn sample_scenarios() -> Vec<RenovationScenario> {
    let mut scenarios = Vec::new();
    for (tier, min, max) in [
        (ScenarioTier::BudgetRefresh, 1_500.0, 5_000.0),
        (ScenarioTier::MidRangeRemodel, 15_000.0, 30_000.0),
        (ScenarioTier::PremiumUpgrade, 45_000.0, 80_000.0),
    ] {
        scenarios.push(RenovationScenario {
            name: tier,
            total_cost_min: min,
            total_cost_max: max,
            materials_cost: min * 0.6,
            labor_cost: min * 0.4,
            time_estimate: "2-4 weeks".into(),
            permit_likelihood: Rating::Medium,
            value_impact: 6.0,
            roi_rating: Rating::Medium,
            description: format!("{tier} plan"),
        });
    }
    scenarios
}

/// How the mock generator should behave for a test.
pub enum MockBehavior {
    /// Return three well-formed scenarios in tier order.
    Ok,
    /// Return the same scenarios but shuffled (Premium, Budget, Mid-Range).
    Scrambled,
    /// Return scenarios where one tier has `totalCostMin > totalCostMax`.
    InvertedCosts,
    /// Fail the provider call with the given message.
    Fail(String),
}

/// In-memory stand-in for the Gemini client. Counts calls so tests can
/// assert that invalid requests never reach the provider.
pub struct MockGenerator {
    pub calls: Arc<AtomicUsize>,
    behavior: MockBehavior,
}

impl MockGenerator {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            behavior,
        }
    }
}

#[async_trait]
impl ScenarioGenerator for MockGenerator {
    async fn generate(
        &self,
        _image_base64: &str,
        room_type: RoomType,
    ) -> Result<RoomAnalysis, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let scenarios = match &self.behavior {
            MockBehavior::Ok => sample_scenarios(),
            MockBehavior::Scrambled => {
                let mut s = sample_scenarios();
                s.rotate_right(1);
                s
            }
            MockBehavior::InvertedCosts => {
                let mut s = sample_scenarios();
                s[1].total_cost_min = 90_000.0;
                s
            }
            MockBehavior::Fail(msg) => return Err(GeneratorError::Request(msg.clone())),
        };

        Ok(RoomAnalysis {
            room_type,
            scenarios,
        })
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and generator.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, body
/// limit, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool, generator: Arc<dyn ScenarioGenerator>) -> Router {
    build_test_app_with(pool, generator, test_config())
}

pub fn build_test_app_with(
    pool: PgPool,
    generator: Arc<dyn ScenarioGenerator>,
    config: ServerConfig,
) -> Router {
    let body_limit = config.body_limit_bytes;

    let state = AppState {
        pool,
        config: Arc::new(config),
        generator,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:8081".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Issue a GET request against the in-process router.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the in-process router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A 1x1 white-pixel PNG, base64 encoded. Small but structurally valid.
pub const PIXEL_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";
