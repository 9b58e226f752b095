use crate::calendar::{build_month, date_id, parse_date_id, progress_percent, today};
use crate::errors::AppError;
use crate::models::{
    CalendarResponse, DayRecord, DayResponse, DrinkRequest, GoalRequest, GoalResponse,
    PresetRequest, PresetsResponse,
};
use crate::state::{preset_lists, AppState};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = date_id(today());
    let data = state.data.lock().await;
    let record = data.ledger.day(&date);
    Html(render_index(&date, record.total, data.goal))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let date = valid_date_id(&date)?;
    let data = state.data.lock().await;
    let record = data.ledger.day(&date);
    Ok(Json(to_day_response(date, record, data.goal)))
}

pub async fn add_drink(
    State(state): State<AppState>,
    Json(payload): Json<DrinkRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = valid_date_id(&payload.date)?;
    let amount = u64::try_from(payload.amount).unwrap_or(0);
    let Some(record) = state.add_entry(&date, amount).await else {
        return Err(AppError::bad_request(
            "amount must be a positive number of milliliters",
        ));
    };

    let goal = state.goal().await;
    Ok(Json(to_day_response(date, record, goal)))
}

pub async fn get_goal(State(state): State<AppState>) -> Result<Json<GoalResponse>, AppError> {
    Ok(Json(GoalResponse {
        goal: state.goal().await,
    }))
}

pub async fn set_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<GoalResponse>, AppError> {
    let Some(goal) = state.set_goal(&payload.goal).await else {
        return Err(AppError::bad_request("goal must be a positive integer"));
    };
    Ok(Json(GoalResponse { goal }))
}

pub async fn get_presets(
    State(state): State<AppState>,
) -> Result<Json<PresetsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(preset_lists(&data)))
}

pub async fn add_preset(
    State(state): State<AppState>,
    Json(payload): Json<PresetRequest>,
) -> Result<Json<PresetsResponse>, AppError> {
    let Some(lists) = state.add_preset(&payload.amount).await else {
        return Err(AppError::bad_request("preset must be a positive integer"));
    };
    Ok(Json(lists))
}

pub async fn remove_preset(
    State(state): State<AppState>,
    Path(amount): Path<u64>,
) -> Result<Json<PresetsResponse>, AppError> {
    Ok(Json(state.remove_preset(amount).await))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<CalendarResponse>, AppError> {
    let data = state.data.lock().await;
    build_month(year, month, &data.ledger, data.goal)
        .map(Json)
        .ok_or_else(|| AppError::bad_request("no such month"))
}

fn valid_date_id(raw: &str) -> Result<String, AppError> {
    parse_date_id(raw)
        .map(date_id)
        .ok_or_else(|| AppError::bad_request("date must be a YYYY-MM-DD day id"))
}

fn to_day_response(date: String, record: DayRecord, goal: u64) -> DayResponse {
    DayResponse {
        percent: progress_percent(record.total, goal),
        goal_met: record.total >= goal,
        total: record.total,
        entries: record.entries,
        date,
        goal,
    }
}
