//! Race handlers

use crate::{
    api::response::{DataResponse, PageResponse},
    db::{FilterMap, RACE_FILTERS, RACE_YEAR_FILTERS},
    models::{Event, Race, RaceLookup},
    services::RaceSelection,
    state::AppState,
    Result,
};
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

/// GET /races
pub async fn list_races(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<PageResponse<Race>> {
    let filter = FilterMap::from_params(&params, RACE_FILTERS);
    let races = state.calendar.races().find_all(&filter).await?;
    Ok(PageResponse::new(races))
}

/// GET /races/next
pub async fn next_race(State(state): State<AppState>) -> Result<DataResponse<Race>> {
    let race = state.calendar.next_race().await?;
    Ok(DataResponse::new(race))
}

/// GET /races/{idOrYear}
///
/// A four-character segment is a season, anything else a race id.
pub async fn get_race(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let lookup = RaceLookup::parse(&key)?;
    let filter = match lookup {
        RaceLookup::Year(_) => FilterMap::from_params(&params, RACE_YEAR_FILTERS),
        RaceLookup::Id(_) => FilterMap::new(),
    };

    let selection = state.calendar.find_races(&lookup, &filter).await?;
    Ok(render(selection))
}

/// GET /races/{raceId}/events
pub async fn race_events(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<PageResponse<Event>> {
    let events = state
        .calendar
        .events()
        .find_by_race_id(&race_id, &FilterMap::new())
        .await?;
    Ok(PageResponse::new(events))
}

/// GET /races/{year}/{round}
pub async fn race_by_round(
    State(state): State<AppState>,
    Path((year, round)): Path<(String, String)>,
) -> Result<Response> {
    let lookup = RaceLookup::from_round(&year, &round)?;
    let selection = state.calendar.find_races(&lookup, &FilterMap::new()).await?;
    Ok(render(selection))
}

fn render(selection: RaceSelection) -> Response {
    match selection {
        RaceSelection::Many(races) => PageResponse::new(races).into_response(),
        RaceSelection::One(race) => DataResponse::new(race).into_response(),
    }
}
