use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::ApiError;
use crate::models::{HiveReading, HiveStatus, WeeklyStatSeries};
use crate::{hives, stats};

// ---

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // ---
    Router::new()
        .route("/hives", get(list_hives))
        .route("/hives/{id}", get(get_hive))
        .route("/hives/{id}/weekly", get(get_weekly))
        .route("/weekly", get(list_weekly))
}

/// Query parameters for filtering the hive list
#[derive(Debug, Default, Deserialize)]
pub struct HivesQuery {
    status: Option<HiveStatus>,
    pesticides: Option<bool>,
    /// Only hives flagged or with pesticides (`true`), or only the rest
    attention: Option<bool>,
    /// Substring of the hive id or name
    search: Option<String>,
}

async fn list_hives(Query(params): Query<HivesQuery>) -> Json<Vec<HiveReading>> {
    // ---
    let hives = apply_filters(hives::all_hives(), &params);
    info!("GET /hives - returning {} hives", hives.len());
    Json(hives)
}

async fn get_hive(Path(id): Path<String>) -> Result<Json<HiveReading>, ApiError> {
    // ---
    debug!("GET /hives/{}", id);
    hives::find_hive(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::HiveNotFound(id))
}

async fn get_weekly(Path(id): Path<String>) -> Result<Json<WeeklyStatSeries>, ApiError> {
    // ---
    debug!("GET /hives/{}/weekly", id);
    stats::weekly_stats_for(&id)
        .map(Json)
        .ok_or(ApiError::HiveNotFound(id))
}

async fn list_weekly() -> Json<Vec<WeeklyStatSeries>> {
    Json(stats::weekly_stats_for_all())
}

/// Apply query filters to the hive catalogue
fn apply_filters(hives: &[HiveReading], params: &HivesQuery) -> Vec<HiveReading> {
    // ---
    debug!("Apply filter: {:?}", params);
    hives
        .iter()
        .filter(|h| params.status.map_or(true, |s| h.status == s))
        .filter(|h| {
            params
                .pesticides
                .map_or(true, |p| h.pesticides_detected == p)
        })
        .filter(|h| params.attention.map_or(true, |a| h.needs_attention() == a))
        .filter(|h| {
            params
                .search
                .as_deref()
                .map_or(true, |needle| h.matches_search(needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_no_filters_returns_everything() {
        // ---
        let all = apply_filters(hives::all_hives(), &HivesQuery::default());
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].id, "A002");
    }

    #[test]
    fn test_status_filter() {
        // ---
        let params = HivesQuery {
            status: Some(HiveStatus::Alert),
            ..Default::default()
        };
        let ids: Vec<_> = apply_filters(hives::all_hives(), &params)
            .iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, ["A004", "A006", "A009"]);
    }

    #[test]
    fn test_search_and_pesticide_filters_combine() {
        // ---
        let params = HivesQuery {
            pesticides: Some(false),
            search: Some("colmena 1".to_string()),
            ..Default::default()
        };
        let ids: Vec<_> = apply_filters(hives::all_hives(), &params)
            .iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, ["A002"]);
    }

    #[test]
    fn test_attention_filter() {
        // ---
        let params = HivesQuery {
            attention: Some(false),
            ..Default::default()
        };
        let calm = apply_filters(hives::all_hives(), &params);
        assert_eq!(calm.len(), 5);
        assert!(calm.iter().all(|h| !h.needs_attention()));
    }

    #[tokio::test]
    async fn test_get_hive_not_found() {
        // ---
        let err = get_hive(Path("Z999".to_string())).await.unwrap_err();
        assert!(matches!(err, ApiError::HiveNotFound(ref id) if id == "Z999"));
    }

    #[tokio::test]
    async fn test_get_weekly_for_known_hive() {
        // ---
        let Json(series) = get_weekly(Path("A004".to_string())).await.unwrap();
        assert_eq!(series.hive_id, "A004");
        assert_eq!(series.week_data.len(), stats::DAYS_PER_WEEK);
    }

    #[tokio::test]
    async fn test_list_weekly_covers_catalogue() {
        // ---
        let Json(all) = list_weekly().await;
        let ids: Vec<_> = all.iter().map(|s| s.hive_id.as_str()).collect();
        let expected: Vec<_> = hives::all_hives().iter().map(|h| h.id).collect();
        assert_eq!(ids, expected);
    }
}
