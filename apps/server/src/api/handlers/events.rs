//! Event handlers

use crate::{
    api::response::{DataResponse, PageResponse},
    db::{EventSelection, FilterMap, EVENT_FILTERS},
    models::{Event, EventLookup},
    state::AppState,
    Result,
};
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<PageResponse<Event>> {
    let filter = FilterMap::from_params(&params, EVENT_FILTERS);
    let events = state.calendar.events().find_all(&filter).await?;
    Ok(PageResponse::new(events))
}

/// GET /events/next
///
/// Answers `{"data": null}` rather than 404 when nothing is scheduled.
pub async fn next_event(State(state): State<AppState>) -> Result<DataResponse<Event>> {
    let event = state.calendar.next_event().await?;
    Ok(DataResponse::from(event))
}

/// GET /events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let lookup = EventLookup::parse(&id)?;

    let response = match state.calendar.find_events(&lookup).await? {
        EventSelection::Many(events) => PageResponse::new(events).into_response(),
        EventSelection::One(event) => DataResponse::new(event).into_response(),
    };
    Ok(response)
}
