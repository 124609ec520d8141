//! Integration tests for the HTTP surface.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use cinesaga_engine::config::AppConfig;
use cinesaga_engine::state::AppState;
use common::{body_json, build_test_app, get, send};

// ---------------------------------------------------------------------------
// Test: GET /api/v1/health reports the corpus size
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_corpus_size() {
    let response = get(build_test_app(40), "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["movies"], 40);
}

// ---------------------------------------------------------------------------
// Test: level batches carry tier, size and well-formed questions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn game_start_serves_a_level_batch() {
    let response = get(build_test_app(300), "/api/v1/game/start?level=150&seed=7").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["level"], 150);
    assert_eq!(json["tier"], "expert");
    assert_eq!(json["daily"], false);
    assert_eq!(json["batch_id"].as_str().map(str::len), Some(36));

    let questions = json["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 3);
    for q in questions {
        let answer = q["answer"].as_str().expect("answer");
        let hint = q["hint"].as_str().expect("hint");
        assert!(!hint.is_empty());
        assert!(!hint.contains(answer));
        if q["input_mode"] == "select" {
            let options: Vec<&str> = q["options"].as_array().expect("options").iter().filter_map(|o| o.as_str()).collect();
            assert_eq!(options.iter().filter(|o| **o == answer).count(), 1);
        }
    }
}

#[tokio::test]
async fn missing_level_defaults_to_one() {
    let json = body_json(get(build_test_app(50), "/api/v1/game/start").await).await;
    assert_eq!(json["level"], 1);
    assert_eq!(json["tier"], "novice");
    assert_eq!(json["questions"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["questions"][0]["type"], "visual");
}

#[tokio::test]
async fn seed_replays_the_same_questions() {
    let app = build_test_app(300);
    let a = body_json(get(app.clone(), "/api/v1/game/start?level=420&seed=99").await).await;
    let b = body_json(get(app, "/api/v1/game/start?level=420&seed=99").await).await;
    assert_eq!(a["questions"], b["questions"]);
    assert_ne!(a["batch_id"], b["batch_id"]);
}

// ---------------------------------------------------------------------------
// Test: daily batches are a single LEGEND question without clean visuals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn daily_serves_one_legend_question() {
    let app = build_test_app(200);
    for seed in 0..25 {
        let json = body_json(get(app.clone(), &format!("/api/v1/game/daily?level=3&seed={seed}")).await).await;
        assert_eq!(json["daily"], true);
        assert_eq!(json["tier"], "legend");
        let questions = json["questions"].as_array().expect("questions array");
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert!(!(q["type"] == "visual" && q["image_effect"] == ""));
    }
}

// ---------------------------------------------------------------------------
// Test: a failed reload reports the error and keeps the old corpus
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_reload_keeps_serving() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.corpus.path = dir.path().join("missing.json").display().to_string();
    let state = Arc::new(AppState::new(config, common::corpus(30)));
    let app = cinesaga_engine::routes::build_router(state);

    let response = send(app.clone(), Method::POST, "/api/v1/corpus/reload").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["movies"], 30);
    assert!(json["error"].as_str().is_some_and(|e| e.contains("missing.json")));

    let health = body_json(get(app, "/api/v1/health").await).await;
    assert_eq!(health["movies"], 30);
}

#[tokio::test]
async fn reload_publishes_new_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.json");
    let movies: Vec<_> = (1..=12).map(common::movie).collect();
    std::fs::write(&path, serde_json::to_string(&movies).unwrap()).unwrap();

    let mut config = AppConfig::default();
    config.corpus.path = path.display().to_string();
    let state = Arc::new(AppState::new(config, common::corpus(30)));
    let app = cinesaga_engine::routes::build_router(state);

    let json = body_json(send(app.clone(), Method::POST, "/api/v1/corpus/reload").await).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["movies"], 12);
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_test_app(10), "/api/v1/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
