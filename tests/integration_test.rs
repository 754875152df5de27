//! End-to-end checks against a running server.
//!
//! Start the service (e.g. `PREFERENCE_BACKEND=memory`) and set `BASE_URL`;
//! without it these tests return early.

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Hive {
    id: String,
    status: String,
    pesticides_detected: bool,
}

#[derive(Debug, Deserialize)]
struct Stats {
    min: f64,
    avg: f64,
    max: f64,
}

#[derive(Debug, Deserialize)]
struct PairStats {
    internal: Stats,
    external: Stats,
}

#[derive(Debug, Deserialize)]
struct Day {
    day: String,
    internal_temp: f64,
}

#[derive(Debug, Deserialize)]
struct Weekly {
    hive_id: String,
    week_data: Vec<Day>,
    temp_stats: PairStats,
    humidity_stats: PairStats,
}

#[derive(Debug, Deserialize)]
struct LanguageState {
    language: String,
    badge: String,
}

fn base_url() -> Option<String> {
    std::env::var("BASE_URL").ok()
}

#[tokio::test]
async fn weekly_endpoint_matches_invariants() -> Result<()> {
    // ---
    let Some(base) = base_url() else {
        eprintln!("BASE_URL not set, skipping");
        return Ok(());
    };

    let client = Client::new();
    let all: Vec<Weekly> = client
        .get(format!("{base}/weekly"))
        .send()
        .await?
        .json()
        .await?;

    assert!(!all.is_empty(), "No weekly series returned");

    for series in &all {
        // ---
        assert_eq!(series.week_data.len(), 7, "{} week length", series.hive_id);
        assert_eq!(series.week_data[0].day, "Lunes");
        assert_eq!(series.week_data[6].day, "Domingo");

        for stats in [
            &series.temp_stats.internal,
            &series.temp_stats.external,
            &series.humidity_stats.internal,
            &series.humidity_stats.external,
        ] {
            assert!(
                stats.min <= stats.avg && stats.avg <= stats.max,
                "{}: min/avg/max out of order: {:?}",
                series.hive_id,
                stats
            );
        }
    }

    let a002: Weekly = client
        .get(format!("{base}/hives/A002/weekly"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(a002.week_data[0].internal_temp, 38.0);

    Ok(())
}

#[tokio::test]
async fn hive_filters_and_lookup() -> Result<()> {
    // ---
    let Some(base) = base_url() else {
        eprintln!("BASE_URL not set, skipping");
        return Ok(());
    };
    let client = Client::new();

    let alerts: Vec<Hive> = client
        .get(format!("{base}/hives?status=alert"))
        .send()
        .await?
        .json()
        .await?;
    for hive in &alerts {
        assert_eq!(hive.status, "alert", "Status filter failed for {}", hive.id);
        assert!(hive.pesticides_detected);
    }

    let missing = client.get(format!("{base}/hives/Z999")).send().await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn language_toggle_round_trips() -> Result<()> {
    // ---
    let Some(base) = base_url() else {
        eprintln!("BASE_URL not set, skipping");
        return Ok(());
    };
    let client = Client::new();

    let before: LanguageState = client
        .get(format!("{base}/language"))
        .send()
        .await?
        .json()
        .await?;

    let toggled: LanguageState = client
        .post(format!("{base}/language/toggle"))
        .send()
        .await?
        .json()
        .await?;
    assert_ne!(toggled.language, before.language);

    let back: LanguageState = client
        .post(format!("{base}/language/toggle"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(back.language, before.language);
    assert_eq!(back.badge, before.badge);

    let rejected = client
        .put(format!("{base}/language"))
        .json(&serde_json::json!({ "language": "klingon" }))
        .send()
        .await?;
    assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
