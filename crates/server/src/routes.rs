use axum::{routing::get, Json, Router};
use common::types::Health;
use service::expenses::ExpenseService;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod expenses;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub expenses: ExpenseService,
}

impl AppState {
    pub fn new(expenses: ExpenseService) -> Self {
        Self { expenses }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health::now("Control de Gastos API"))
}

/// Build the full application router: liveness probe plus the collection API
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new().route(
        "/api/gastos",
        get(expenses::list_expenses)
            .post(expenses::append_expense)
            .put(expenses::replace_expenses)
            .delete(expenses::clear_expenses),
    );

    Router::new()
        .route("/", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
