use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, extract::AppJson},
    app_error::AppResult,
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistUseCases,
};

const JOINED_MESSAGE: &str = "Successfully joined the waitlist!";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinPayload {
    email: String,
    clinic_name: String,
    clinic_size: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinedEntry {
    id: Uuid,
    email: String,
    clinic_name: String,
}

#[derive(Serialize)]
struct JoinResponse {
    message: &'static str,
    entry: JoinedEntry,
}

#[derive(Serialize)]
struct StatsResponse {
    count: i64,
}

#[derive(Serialize)]
struct EntriesResponse {
    entries: Vec<WaitlistEntry>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries).post(join))
        .route("/stats", get(stats))
}

async fn join(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    AppJson(payload): AppJson<JoinPayload>,
) -> AppResult<impl IntoResponse> {
    let entry = waitlist
        .join(&payload.email, &payload.clinic_name, &payload.clinic_size)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinResponse {
            message: JOINED_MESSAGE,
            entry: JoinedEntry {
                id: entry.id,
                email: entry.email,
                clinic_name: entry.clinic_name,
            },
        }),
    ))
}

async fn stats(State(waitlist): State<Arc<WaitlistUseCases>>) -> AppResult<impl IntoResponse> {
    let count = waitlist.stats().await?;
    Ok(Json(StatsResponse { count }))
}

async fn list_entries(
    State(waitlist): State<Arc<WaitlistUseCases>>,
) -> AppResult<impl IntoResponse> {
    let entries = waitlist.list().await?;
    Ok(Json(EntriesResponse { entries }))
}
