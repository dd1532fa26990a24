use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use pitchcast::api::{create_router, AppState};
use pitchcast::domain::{PitchMap, PitchRecord, PlayerId, PlayerName};
use pitchcast::error::{PitchError, Result};
use pitchcast::services::{AnalysisSettings, PitchAnalysisService};
use pitchcast::{MemoryCache, PitchDataSource};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Serves a fixed set of games for Logan Webb and counts fetches
#[derive(Default)]
struct FakeSource {
    fetches: AtomicUsize,
    fail_fetch: bool,
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 4, d).unwrap()
}

fn game(codes: &[&str], d: u32) -> Vec<PitchRecord> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let mut record = PitchRecord::new(*code, day(d));
            record.pitch_number = Some(i as u32 + 1);
            record
        })
        .collect()
}

#[async_trait]
impl PitchDataSource for FakeSource {
    async fn resolve_player_id(&self, name: &PlayerName) -> Result<PlayerId> {
        if name.first == "Logan" && name.last == "Webb" {
            Ok(PlayerId(657277))
        } else {
            Err(PitchError::PlayerNotFound {
                first: name.first.clone(),
                last: name.last.clone(),
            })
        }
    }

    async fn fetch_pitches(
        &self,
        _player_id: PlayerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PitchRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(PitchError::Upstream("Statcast search returned 503".into()));
        }

        let mut all = game(&["FF", "FF", "FF", "SL", "FF", "FF", "FF", "CU"], 8);
        all.extend(game(&["SI", "CH"], 14));
        Ok(all
            .into_iter()
            .filter(|p| p.game_date >= start && p.game_date <= end)
            .collect())
    }
}

fn app_with(source: Arc<FakeSource>, cached: bool) -> Router {
    let mut service = PitchAnalysisService::new(
        source,
        PitchMap::default(),
        AnalysisSettings::default(),
    );
    if cached {
        service = service.with_cache(Arc::new(MemoryCache::new()));
    }
    create_router(AppState::new(
        service,
        vec!["Logan Webb".to_string(), "Zac Gallen".to_string()],
    ))
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn index_lists_configured_players() {
    let app = app_with(Arc::new(FakeSource::default()), false);
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Logan Webb"));
    assert!(page.contains("Zac Gallen"));
}

#[tokio::test]
async fn player_stats_lists_game_dates() {
    let app = app_with(Arc::new(FakeSource::default()), false);
    let response = app
        .oneshot(form_post("/get_player_stats", "player=Logan+Webb"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["selected_player"], "Logan Webb");
    assert_eq!(
        body["game_dates"],
        serde_json::json!(["2023-04-08", "2023-04-14"])
    );
}

#[tokio::test]
async fn player_stats_uses_cache_across_requests() {
    let source = Arc::new(FakeSource::default());
    let app = app_with(source.clone(), true);

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(form_post("/get_player_stats", "player=Logan%20Webb"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn game_stats_reports_predictions_and_accuracy() {
    let app = app_with(Arc::new(FakeSource::default()), true);
    let response = app
        .oneshot(form_post(
            "/get_game_stats",
            "selected_player=Logan+Webb&game_date=2023-04-08",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    let stats = body["game_stats"].as_array().unwrap();
    assert_eq!(stats.len(), 8);
    assert_eq!(stats[3]["pitch_type"], "SL");
    assert_eq!(stats[3]["pitch_type_simplified"], "curve");
    assert_eq!(stats[3]["pitch_type_predicted"], "fast");
    assert_eq!(stats[3]["is_correct"], false);
    assert_eq!(stats[7]["pitch_type_predicted"], "curve");
    assert_eq!(stats[7]["is_correct"], true);
    assert_eq!(stats[7]["is_naive_correct"], false);

    assert_eq!(body["model_accuracy"], 0.875);
    assert_eq!(body["naive_accuracy"], 0.75);
    assert_eq!(body["model_rolling_accuracy"].as_array().unwrap().len(), 8);
    assert_eq!(body["naive_rolling_accuracy"][7], 0.75);
}

#[tokio::test]
async fn missing_form_field_is_bad_request() {
    let app = app_with(Arc::new(FakeSource::default()), false);
    let response = app
        .oneshot(form_post("/get_game_stats", "selected_player=Logan+Webb"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn form_without_content_type_is_json_bad_request() {
    let app = app_with(Arc::new(FakeSource::default()), false);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/get_player_stats")
                .body(Body::from("player=Logan+Webb"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = json_body(response).await;
    assert_eq!(body["error"], "invalid_request");
    assert!(body["message"].as_str().unwrap().contains("Content-Type"));
}

#[tokio::test]
async fn single_word_name_is_bad_request() {
    let app = app_with(Arc::new(FakeSource::default()), false);
    let response = app
        .oneshot(form_post("/get_player_stats", "player=Webb"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_player_is_not_found() {
    let app = app_with(Arc::new(FakeSource::default()), false);
    let response = app
        .oneshot(form_post("/get_player_stats", "player=Nobody+Here"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "player_not_found");
}

#[tokio::test]
async fn game_without_pitches_is_not_found() {
    let app = app_with(Arc::new(FakeSource::default()), false);
    let response = app
        .oneshot(form_post(
            "/get_game_stats",
            "selected_player=Logan+Webb&game_date=2023-04-09",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "no_pitch_data");
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway_without_retry() {
    let source = Arc::new(FakeSource {
        fail_fetch: true,
        ..FakeSource::default()
    });
    let app = app_with(source.clone(), true);
    let response = app
        .oneshot(form_post("/get_player_stats", "player=Logan+Webb"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(response).await["error"], "upstream");
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn stop_server_triggers_shutdown() {
    let state = AppState::new(
        PitchAnalysisService::new(
            Arc::new(FakeSource::default()),
            PitchMap::default(),
            AnalysisSettings::default(),
        ),
        vec!["Logan Webb".to_string()],
    );
    let shutdown = state.shutdown.clone();
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stopServer")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["success"], true);
    assert!(shutdown.is_triggered());
}

#[tokio::test]
async fn health_reports_uptime_and_cache() {
    let app = app_with(Arc::new(FakeSource::default()), true);
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cache_enabled"], true);
}
