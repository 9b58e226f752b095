use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/day/:date", get(handlers::get_day))
        .route("/api/drink", post(handlers::add_drink))
        .route("/api/goal", get(handlers::get_goal).put(handlers::set_goal))
        .route(
            "/api/presets",
            get(handlers::get_presets).post(handlers::add_preset),
        )
        .route("/api/presets/:amount", delete(handlers::remove_preset))
        .route("/api/calendar/:year/:month", get(handlers::get_calendar))
        .with_state(state)
}
