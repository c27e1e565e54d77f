mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use starwars_favorites_api::{
    routes::{create_api_router, not_found},
    state::AppState,
};
use tower::ServiceExt;

fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_router())
        .fallback(not_found)
        .with_state(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn favorite_planet_round_trip_over_http() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let tatooine = common::insert_planet(&state, "Tatooine").await?;
    let app = app(state);

    let (status, _) = send(&app, Method::POST, "/api/users", Some(json!({ "username": "luke" }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/favorite/planet/{}", tatooine.id);
    let (status, body) = send(&app, Method::POST, &uri, Some(json!({ "username": "luke" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["person"], Value::Null);
    assert_eq!(body["data"]["starship"], Value::Null);
    assert_eq!(body["data"]["planet"]["name"], "Tatooine");

    let (status, body) = send(&app, Method::POST, &uri, Some(json!({ "username": "luke" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "Favorite already exists");

    let (status, body) = send(&app, Method::GET, "/api/users/favorites?username=luke", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["meta"]["total"], 1);

    let delete_uri = format!("{uri}?username=luke");
    let (status, body) = send(&app, Method::DELETE, &delete_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite planet removed");

    let (status, body) = send(&app, Method::DELETE, &delete_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["error"], "Favorite not found");
    Ok(())
}

#[tokio::test]
async fn people_path_segment_targets_persons() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let leia = common::insert_person(&state, "Leia Organa").await?;
    let app = app(state);
    send(&app, Method::POST, "/api/users", Some(json!({ "username": "han" }))).await;

    let uri = format!("/api/favorite/people/{}", leia.id);
    let (status, body) = send(&app, Method::POST, &uri, Some(json!({ "username": "han" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["person"]["name"], "Leia Organa");

    let (status, _) = send(&app, Method::POST, "/api/favorite/droid/1", Some(json!({ "username": "han" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn missing_username_and_unknown_user() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = app(state);

    let (status, _) = send(&app, Method::GET, "/api/users/favorites", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/users/favorites?username=ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["error"], "User not found");

    let (status, _) = send(&app, Method::POST, "/api/favorite/starship/1", Some(json!({ "username": "ghost" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn catalog_routes_list_and_fetch() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let xwing = common::insert_starship(&state, "X-wing").await?;
    common::insert_planet(&state, "Hoth").await?;
    let app = app(state);

    let (status, body) = send(&app, Method::GET, "/api/starships", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "X-wing");

    let (status, body) = send(&app, Method::GET, &format!("/api/starships/{}", xwing.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["starship_class"], "Starfighter");

    let (status, body) = send(&app, Method::GET, "/api/planets/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["error"], "Planet not found");

    let (status, body) = send(&app, Method::GET, "/api/people", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn deleting_user_over_http() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = app(state);
    let (_, body) = send(&app, Method::POST, "/api/users", Some(json!({ "username": "vader" }))).await;
    let id = body["data"]["id"].as_i64().unwrap_or_default();

    let (status, body) = send(&app, Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "vader");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn user_named_like_a_route_can_be_deleted() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = app(state);
    let (status, body) =
        send(&app, Method::POST, "/api/users", Some(json!({ "username": "favorites" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap_or_default();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["error"], "User not found");
    Ok(())
}

#[tokio::test]
async fn malformed_requests_use_the_error_envelope() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = app(state);

    let (status, body) = send(&app, Method::GET, "/api/planets/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].is_string());
    assert_eq!(body["message"], body["data"]["error"]);

    let (status, body) = send(&app, Method::POST, "/api/favorite/droid/1", Some(json!({ "username": "han" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].is_string());

    let (status, body) = send(&app, Method::POST, "/api/users", Some(json!({ "name": "han" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn unknown_paths_are_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = app(state);

    let (status, body) = send(&app, Method::GET, "/api/droids", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["error"], "No route for /api/droids");
    assert!(body["meta"].is_object());
    Ok(())
}
