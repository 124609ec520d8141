use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinesaga_engine::config::{AppConfig, CorpusSettings};
use cinesaga_engine::domain::{CastMember, Movie};
use cinesaga_engine::provider::MovieCorpus;
use cinesaga_engine::routes::build_router;
use cinesaga_engine::state::AppState;

pub fn movie(id: i64) -> Movie {
    Movie {
        id,
        title: format!("Picture {id}"),
        overview: Some(format!("A detective follows strange footprints across frozen mountains {id}.")),
        tagline: Some(format!("Every trail ends somewhere {id}")),
        release_date: Some(format!("{}-03-15", 1970 + id % 50)),
        poster_path: Some(format!("/p{id}.jpg")),
        backdrop_path: Some(format!("/b{id}.jpg")),
        cast: (0..4)
            .map(|slot| CastMember {
                name: format!("Actor {id}-{slot}"),
                character: format!("Role {slot}"),
            })
            .collect(),
        genre_ids: vec![80, 53],
        popularity: 5000.0 - id as f64,
    }
}

pub fn corpus(n: i64) -> MovieCorpus {
    MovieCorpus::from_movies((1..=n).map(movie).collect(), &CorpusSettings::default())
}

pub fn build_test_app(n: i64) -> Router {
    let state = Arc::new(AppState::new(AppConfig::default(), corpus(n)));
    build_router(state)
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
