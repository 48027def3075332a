//! /events endpoints

#[allow(unused)]
mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{
    assert_plain_text, assert_status, event, insert_event, page_ids, page_items, single_item,
    utc, TestApp,
};

#[tokio::test]
async fn list_events_ordered_by_date_and_time() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, body) = app.get_json("/events").await?;
    assert_status(status, StatusCode::OK, "list events");
    assert_eq!(
        page_ids(&body)?,
        vec![
            "2024_1_RACE",
            "2024_2_RACE",
            "2024_6_RACE",
            "2024_7_PRACTICE_1",
            "2024_7_QUALIFYING",
            "2024_7_RACE",
            "2024_8_QUALIFYING",
            "2024_8_RACE",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn type_filter_is_case_insensitive() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (_, body) = app.get_json("/events?type=qualifying").await?;
    assert_eq!(
        page_ids(&body)?,
        vec!["2024_7_QUALIFYING", "2024_8_QUALIFYING"]
    );

    let (_, upper) = app.get_json("/events?type=QUALIFYING").await?;
    assert_eq!(body, upper);

    Ok(())
}

#[tokio::test]
async fn filters_combine_conjunctively() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (_, body) = app.get_json("/events?raceId=2024_8&type=race").await?;
    assert_eq!(page_ids(&body)?, vec!["2024_8_RACE"]);

    let (_, body) = app.get_json("/events?raceId=2024_8&type=practice").await?;
    assert!(page_items(&body)?.is_empty());

    Ok(())
}

#[tokio::test]
async fn gmt_offset_filter_accepts_every_spelling() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let european = vec![
        "2024_7_PRACTICE_1",
        "2024_7_QUALIFYING",
        "2024_7_RACE",
        "2024_8_QUALIFYING",
        "2024_8_RACE",
    ];

    // Percent-encoded plus sign.
    let (_, body) = app.get_json("/events?gmtOffset=%2B02:00").await?;
    assert_eq!(page_ids(&body)?, european);

    // A raw `+` decodes to a space.
    let (_, body) = app.get_json("/events?gmtOffset=+02:00").await?;
    assert_eq!(page_ids(&body)?, european);

    // Unsigned offsets are positive.
    let (_, body) = app.get_json("/events?gmtOffset=02:00").await?;
    assert_eq!(page_ids(&body)?, european);

    let (_, body) = app.get_json("/events?gmtOffset=-04:00").await?;
    assert_eq!(page_ids(&body)?, vec!["2024_6_RACE"]);

    Ok(())
}

#[tokio::test]
async fn repeated_param_uses_first_value() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (_, body) = app.get_json("/events?raceId=2024_1&raceId=2024_2").await?;
    assert_eq!(page_ids(&body)?, vec!["2024_1_RACE"]);

    Ok(())
}

#[tokio::test]
async fn two_segment_id_lists_events_of_race() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, body) = app.get_json("/events/2024_8").await?;
    assert_status(status, StatusCode::OK, "events of race");
    assert_eq!(
        page_ids(&body)?,
        vec!["2024_8_QUALIFYING", "2024_8_RACE"]
    );

    Ok(())
}

#[tokio::test]
async fn three_segment_id_returns_single_event() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, body) = app.get_json("/events/2024_8_RACE").await?;
    assert_status(status, StatusCode::OK, "single event");
    assert_eq!(
        single_item(&body)?,
        &json!({
            "id": "2024_8_RACE",
            "raceId": "2024_8",
            "title": "Race",
            "date": "2024-05-26",
            "type": "RACE",
            "time": "13:00:00",
            "gmtOffset": "+02:00"
        })
    );

    let (status, body) = app.get_json("/events/2024_7_PRACTICE_1").await?;
    assert_status(status, StatusCode::OK, "four segment id");
    assert_eq!(single_item(&body)?["type"], "PRACTICE");

    Ok(())
}

#[tokio::test]
async fn unknown_event_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, headers, _) = app.get("/events/2024_8_SPRINT").await?;
    assert_status(status, StatusCode::NOT_FOUND, "unknown event");
    assert_plain_text(&headers);

    Ok(())
}

#[tokio::test]
async fn single_segment_id_is_bad_request() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, headers, _) = app.get("/events/2024").await?;
    assert_status(status, StatusCode::BAD_REQUEST, "one segment");
    assert_plain_text(&headers);

    Ok(())
}

#[tokio::test]
async fn next_event_prefers_same_day_over_tomorrow() -> anyhow::Result<()> {
    let app = TestApp::empty().await?.at(utc(2024, 6, 9, 22, 0));
    for session in [
        event("2024_9", "Practice 1", "2024-06-09", "08:00:00", "-04:00"),
        event("2024_9", "Qualifying", "2024-06-09", "23:00:00", "-04:00"),
        event("2024_9", "Race", "2024-06-10", "01:00:00", "-04:00"),
    ] {
        insert_event(&app.pool, &session).await?;
    }

    let (status, body) = app.get_json("/events/next").await?;
    assert_status(status, StatusCode::OK, "next event");
    assert_eq!(single_item(&body)?["id"], "2024_9_QUALIFYING");

    Ok(())
}

#[tokio::test]
async fn next_event_includes_sessions_within_grace_window() -> anyhow::Result<()> {
    let app = TestApp::new().await?.at(utc(2024, 5, 19, 14, 59));
    let (_, body) = app.get_json("/events/next").await?;
    assert_eq!(single_item(&body)?["id"], "2024_7_RACE");

    // Exactly two hours after the start the session is no longer next.
    let app = TestApp::new().await?.at(utc(2024, 5, 19, 15, 0));
    let (_, body) = app.get_json("/events/next").await?;
    assert_eq!(single_item(&body)?["id"], "2024_8_QUALIFYING");

    Ok(())
}

#[tokio::test]
async fn next_event_when_nothing_is_scheduled_is_null() -> anyhow::Result<()> {
    let app = TestApp::new().await?.at(utc(2025, 1, 1, 0, 0));

    let (status, body) = app.get_json("/events/next").await?;
    assert_status(status, StatusCode::OK, "no next event");
    assert_eq!(body, json!({"data": null}));

    let app = TestApp::empty().await?;
    let (status, body) = app.get_json("/events/next").await?;
    assert_status(status, StatusCode::OK, "empty table");
    assert_eq!(body, json!({"data": null}));

    Ok(())
}

#[tokio::test]
async fn unreadable_event_time_is_internal_error() -> anyhow::Result<()> {
    let app = TestApp::empty().await?.at(utc(2024, 6, 1, 0, 0));
    insert_event(
        &app.pool,
        &event("2024_9", "Race", "2024-06-09", "20h00", "-04:00"),
    )
    .await?;

    let (status, headers, body) = app.get("/events/next").await?;
    assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "bad time");
    assert_plain_text(&headers);
    assert_eq!(body.as_ref(), b"Internal server error.");

    Ok(())
}

#[tokio::test]
async fn null_gmt_offset_is_internal_error() -> anyhow::Result<()> {
    let app = TestApp::empty().await?;
    sqlx::query(
        "INSERT INTO events (raceId, title, date, type_, time, gmtOffset, id_) \
         VALUES ('2024_1', 'Race', '2024-03-02', 'RACE', '15:00:00', NULL, '2024_1_RACE')",
    )
    .execute(&app.pool)
    .await?;

    let (status, headers, body) = app.get("/events").await?;
    assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "null gmtOffset");
    assert_plain_text(&headers);
    assert_eq!(body.as_ref(), b"Internal server error.");

    Ok(())
}
