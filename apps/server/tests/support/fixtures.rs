use anyhow::Context as _;
use pitwall::models::{Event, Race};
use sqlx::SqlitePool;

/// Tables as the scraper creates them.
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE races (
        year INTEGER,
        round_ INTEGER,
        name TEXT,
        location TEXT,
        trackMap TEXT,
        circuitId TEXT,
        id_ TEXT,
        PRIMARY KEY (id_)
    )"#,
    r#"CREATE TABLE events (
        raceId TEXT,
        title TEXT,
        date TEXT,
        type_ TEXT,
        time TEXT,
        gmtOffset TEXT,
        id_ TEXT,
        PRIMARY KEY (id_)
    )"#,
];

pub async fn create_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("create table")?;
    }
    Ok(())
}

pub fn race(year: i32, round: i32, name: &str, location: &str, circuit_id: &str) -> Race {
    Race {
        id: Race::compose_id(year, round),
        year,
        round,
        name: name.to_string(),
        location: location.to_string(),
        track_map: format!("https://media.example.org/tracks/{circuit_id}.png"),
        circuit_id: circuit_id.to_string(),
    }
}

/// Session with an id derived the way the scraper derives it.
pub fn event(race_id: &str, title: &str, date: &str, time: &str, gmt_offset: &str) -> Event {
    let upper = title.to_uppercase().replace(' ', "_");
    let event_type = match upper.as_str() {
        t if t.starts_with("PRACTICE") => "PRACTICE".to_string(),
        t => t.to_string(),
    };

    Event {
        id: format!("{race_id}_{upper}"),
        race_id: race_id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        event_type,
        time: time.to_string(),
        gmt_offset: gmt_offset.to_string(),
    }
}

pub async fn insert_race(pool: &SqlitePool, race: &Race) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO races (year, round_, name, location, trackMap, circuitId, id_) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(race.year)
    .bind(race.round)
    .bind(&race.name)
    .bind(&race.location)
    .bind(&race.track_map)
    .bind(&race.circuit_id)
    .bind(&race.id)
    .execute(pool)
    .await
    .with_context(|| format!("insert race {}", race.id))?;
    Ok(())
}

pub async fn insert_event(pool: &SqlitePool, event: &Event) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO events (raceId, title, date, type_, time, gmtOffset, id_) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&event.race_id)
    .bind(&event.title)
    .bind(&event.date)
    .bind(&event.event_type)
    .bind(&event.time)
    .bind(&event.gmt_offset)
    .bind(&event.id)
    .execute(pool)
    .await
    .with_context(|| format!("insert event {}", event.id))?;
    Ok(())
}

pub fn season_races() -> Vec<Race> {
    vec![
        race(2023, 1, "Bahrain Grand Prix", "Sakhir", "bahrain"),
        race(2023, 22, "Abu Dhabi Grand Prix", "Yas Marina", "yas_marina"),
        race(2024, 1, "Bahrain Grand Prix", "Sakhir", "bahrain"),
        race(2024, 2, "Saudi Arabian Grand Prix", "Jeddah", "jeddah"),
        race(2024, 6, "Miami Grand Prix", "Miami", "miami"),
        race(2024, 7, "Emilia Romagna Grand Prix", "Imola", "imola"),
        race(2024, 8, "Monaco Grand Prix", "Monaco", "monaco"),
    ]
}

pub fn season_events() -> Vec<Event> {
    vec![
        event("2024_1", "Race", "2024-03-02", "15:00:00", "+03:00"),
        event("2024_2", "Race", "2024-03-09", "17:00:00", "+03:00"),
        event("2024_6", "Race", "2024-05-05", "16:00:00", "-04:00"),
        event("2024_7", "Practice 1", "2024-05-17", "11:30:00", "+02:00"),
        event("2024_7", "Qualifying", "2024-05-18", "14:00:00", "+02:00"),
        event("2024_7", "Race", "2024-05-19", "13:00:00", "+02:00"),
        event("2024_8", "Qualifying", "2024-05-25", "14:00:00", "+02:00"),
        event("2024_8", "Race", "2024-05-26", "13:00:00", "+02:00"),
    ]
}

/// Load [`season_races`] and [`season_events`].
pub async fn seed_season(pool: &SqlitePool) -> anyhow::Result<()> {
    for race in season_races() {
        insert_race(pool, &race).await?;
    }
    for event in season_events() {
        insert_event(pool, &event).await?;
    }
    Ok(())
}
