use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        pages::index,
        pets::{create_pet, delete_pet, search_pet, update_pet},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout();

    Router::new()
        .route("/", get(index))
        .route("/pet", post(create_pet))
        .route("/pet/search", post(search_pet))
        .route("/pet/{id}", post(update_pet).delete(delete_pet))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{header, Request, Response},
    };
    use http_body_util::BodyExt;
    use mock_petstore::{Endpoint, MockPetstore};
    use serde_json::json;
    use tower::ServiceExt;

    const FORM: &str = "application/x-www-form-urlencoded";

    async fn setup() -> (MockPetstore, Router) {
        let mock = MockPetstore::new();
        let addr = mock.spawn().await.unwrap();
        let config = Config {
            api_url: format!("http://{addr}"),
            api_timeout_secs: 2,
            flash_ttl_seconds: 300,
            session_cookie_name: "petstore_session".to_string(),
        };
        let state = AppState::from_config(config).unwrap();
        (mock, create_app(state))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: &str,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, FORM);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        app.clone()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    /// Submit a form and return the session cookie the redirect issued.
    async fn submit(app: &Router, method: &str, uri: &str, body: &str) -> String {
        let response = send(app, method, uri, body, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn page(app: &Router, cookie: &str) -> String {
        let response = send(app, "GET", "/", "", Some(cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let (_mock, app) = setup().await;

        let response = send(&app, "GET", "/", "", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("Pet Store"));
        assert!(html.contains(r#"<option value="available">"#));
        assert!(html.contains(r#"<option value="pending">"#));
        assert!(html.contains(r#"<option value="sold">"#));
        assert!(html.contains(r#"data-modal="""#));
    }

    #[tokio::test]
    async fn test_search_shows_pet_once() {
        let (mock, app) = setup().await;
        mock.insert_pet(json!({"id": 5, "name": "Rex", "status": "available"}))
            .await;

        let cookie = submit(&app, "POST", "/pet/search", "id=5").await;
        assert!(cookie.starts_with("petstore_session="));

        let html = page(&app, &cookie).await;
        assert!(html.contains("<h2>Rex</h2>"));
        assert!(html.contains(r#"value="5""#));

        let html = page(&app, &cookie).await;
        assert!(!html.contains("<h2>Rex</h2>"));
    }

    #[tokio::test]
    async fn test_search_missing_pet() {
        let (_mock, app) = setup().await;

        let cookie = submit(&app, "POST", "/pet/search", "id=404").await;
        let html = page(&app, &cookie).await;
        assert!(html.contains("Pet not found"));
        assert!(html.contains(r#"value="404""#));
    }

    #[tokio::test]
    async fn test_search_rejects_non_numeric_id_without_upstream_call() {
        let (mock, app) = setup().await;

        let cookie = submit(&app, "POST", "/pet/search", "id=abc").await;
        let html = page(&app, &cookie).await;
        assert!(html.contains("Invalid ID supplied"));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_with_invalid_status_reopens_add_modal() {
        let (mock, app) = setup().await;

        let cookie = submit(
            &app,
            "POST",
            "/pet",
            "id=12&name=Rex&status=invalid_value",
        )
        .await;
        let html = page(&app, &cookie).await;

        assert!(html.contains(r#"data-modal="add""#));
        assert!(html.contains("The selected status is invalid."));
        assert!(html.contains(r#"value="Rex""#));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_reshapes_payload() {
        let (mock, app) = setup().await;

        let body = "id=12&name=Rex&category_id=4&category_name=Dogs\
                    &photoUrls%5B%5D=&photoUrls%5B%5D=http%3A%2F%2Fimg.test%2Frex.png\
                    &tags%5B0%5D%5Bname%5D=&tags%5B1%5D%5Bname%5D=good\
                    &tags%5B2%5D%5Bname%5D=&tags%5B3%5D%5Bname%5D=loud\
                    &status=available";
        let cookie = submit(&app, "POST", "/pet", body).await;

        let stored = mock.pet(12).await.unwrap();
        assert_eq!(stored["category"], json!({"id": 4, "name": "Dogs"}));
        assert_eq!(stored["photoUrls"], json!(["http://img.test/rex.png"]));
        assert_eq!(
            stored["tags"],
            json!([{"id": 2, "name": "good"}, {"id": 4, "name": "loud"}])
        );

        let html = page(&app, &cookie).await;
        assert!(html.contains("Pet created successfully!"));
        assert!(html.contains(r#"value="12""#));
    }

    #[tokio::test]
    async fn test_create_maps_405_to_invalid_input() {
        let (mock, app) = setup().await;
        mock.fail(Endpoint::Create, 405).await;

        let cookie = submit(&app, "POST", "/pet", "id=12&name=Rex&status=sold").await;
        let html = page(&app, &cookie).await;
        assert!(html.contains("Invalid input"));
        assert!(html.contains(r#"data-modal="""#));
    }

    #[tokio::test]
    async fn test_update_success() {
        let (mock, app) = setup().await;
        mock.insert_pet(json!({"id": 7, "name": "Old", "status": "available"}))
            .await;

        let cookie = submit(&app, "POST", "/pet/7", "name=New&status=sold").await;
        let html = page(&app, &cookie).await;

        assert!(html.contains("Pet updated successfully!"));
        assert!(html.contains("<h2>New</h2>"));
        assert_eq!(mock.pet(7).await.unwrap()["status"], "sold");
    }

    #[tokio::test]
    async fn test_update_with_failed_read_back_is_a_failure() {
        let (mock, app) = setup().await;
        mock.insert_pet(json!({"id": 7, "name": "Old", "status": "available"}))
            .await;
        mock.fail(Endpoint::Get, 404).await;

        let cookie = submit(&app, "POST", "/pet/7", "name=New&status=sold").await;
        let html = page(&app, &cookie).await;

        assert!(!html.contains("Pet updated successfully!"));
        assert!(html.contains("Pet not found"));
        assert!(html.contains(r#"value="7""#));
        assert!(html.contains(r#"data-modal="""#));
    }

    #[tokio::test]
    async fn test_update_failure_reopens_edit_with_context() {
        let (mock, app) = setup().await;
        mock.insert_pet(json!({"id": 7, "name": "Old", "status": "available"}))
            .await;
        mock.fail(Endpoint::Update, 500).await;

        let cookie = submit(&app, "POST", "/pet/7", "name=New&status=sold").await;
        let html = page(&app, &cookie).await;

        assert!(html.contains(r#"data-modal="edit""#));
        assert!(html.contains("Failed to update pet"));
        assert!(html.contains(r#"value="New""#));
    }

    #[tokio::test]
    async fn test_update_validation_failure_reopens_edit() {
        let (mock, app) = setup().await;
        mock.insert_pet(json!({"id": 7, "name": "Old", "status": "available"}))
            .await;

        let cookie = submit(&app, "POST", "/pet/7", "name=&status=lost").await;
        let html = page(&app, &cookie).await;

        assert!(html.contains(r#"data-modal="edit""#));
        assert!(html.contains("The name field is required."));
        assert!(html.contains("The selected status is invalid."));
        assert_eq!(mock.pet(7).await.unwrap()["name"], "Old");
    }

    #[tokio::test]
    async fn test_update_validation_failure_without_context() {
        let (_mock, app) = setup().await;

        let cookie = submit(&app, "POST", "/pet/8", "name=&status=sold").await;
        let html = page(&app, &cookie).await;

        assert!(html.contains(r#"data-modal="""#));
        assert!(html.contains("Pet not found"));
        assert!(!html.contains("The name field is required."));
    }

    #[tokio::test]
    async fn test_spoofed_delete_then_repeat() {
        let (mock, app) = setup().await;
        mock.insert_pet(json!({"id": 3, "name": "Gone"})).await;

        let cookie = submit(&app, "POST", "/pet/3", "_method=DELETE").await;
        let html = page(&app, &cookie).await;
        assert!(html.contains("Pet deleted successfully!"));
        assert!(mock.pet(3).await.is_none());

        let response = send(&app, "DELETE", "/pet/3", "", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let html = page(&app, &cookie).await;
        assert!(html.contains("Pet not found"));
    }

    #[tokio::test]
    async fn test_non_integer_path_id_is_a_failure() {
        let (mock, app) = setup().await;

        let cookie = submit(&app, "DELETE", "/pet/abc", "").await;
        let html = page(&app, &cookie).await;
        assert!(html.contains("Invalid ID supplied"));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_search_with_repeated_id_uses_last_value() {
        let (mock, app) = setup().await;
        mock.insert_pet(json!({"id": 2, "name": "Misty", "status": "pending"}))
            .await;

        let cookie = submit(&app, "POST", "/pet/search", "id=1&id=2").await;
        let html = page(&app, &cookie).await;
        assert!(html.contains("<h2>Misty</h2>"));
    }

    #[tokio::test]
    async fn test_update_with_repeated_keys_uses_last_values() {
        let (mock, app) = setup().await;
        mock.insert_pet(json!({"id": 7, "name": "Old", "status": "available"}))
            .await;

        let cookie = submit(&app, "POST", "/pet/7", "name=a&name=b&status=sold").await;
        let html = page(&app, &cookie).await;

        assert!(html.contains("Pet updated successfully!"));
        assert_eq!(mock.pet(7).await.unwrap()["name"], "b");
    }

    #[tokio::test]
    async fn test_create_with_too_many_photo_urls_reopens_add_modal() {
        let (mock, app) = setup().await;

        let mut body = String::from("id=12&name=Rex&status=available");
        for i in 0..66 {
            body.push_str(&format!("&photoUrls%5B%5D=http%3A%2F%2Fimg.test%2F{i}.png"));
        }
        let cookie = submit(&app, "POST", "/pet", &body).await;
        let html = page(&app, &cookie).await;

        assert!(html.contains(r#"data-modal="add""#));
        assert!(html.contains("The photoUrls field must not have more than 64 items."));
        assert_eq!(mock.request_count(), 0);
        assert!(mock.pet(12).await.is_none());
    }

    #[tokio::test]
    async fn test_create_with_too_many_bare_photo_url_keys_is_rejected() {
        let (mock, app) = setup().await;

        let mut body = String::from("id=12&name=Rex&status=available");
        for i in 0..66 {
            body.push_str(&format!("&photoUrls=http%3A%2F%2Fimg.test%2F{i}.png"));
        }
        let cookie = submit(&app, "POST", "/pet", &body).await;
        let html = page(&app, &cookie).await;

        assert!(html.contains("The photoUrls field must not have more than 64 items."));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_with_far_tag_position_is_rejected() {
        let (mock, app) = setup().await;

        let body = "id=12&name=Rex&status=available&tags%5B100000%5D%5Bname%5D=far";
        let cookie = submit(&app, "POST", "/pet", body).await;
        let html = page(&app, &cookie).await;

        assert!(html.contains(r#"data-modal="add""#));
        assert!(html.contains("The tags field must not have more than 64 items."));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_slow_update_chain_still_redirects_with_flash() {
        let mock = MockPetstore::new();
        let addr = mock.spawn().await.unwrap();
        mock.insert_pet(json!({"id": 7, "name": "Old", "status": "available"}))
            .await;
        mock.fail(Endpoint::Get, 404).await;
        mock.set_delay(Some(Duration::from_millis(700))).await;
        let config = Config {
            api_url: format!("http://{addr}"),
            api_timeout_secs: 1,
            flash_ttl_seconds: 300,
            session_cookie_name: "petstore_session".to_string(),
        };
        assert!(config.request_timeout() > config.api_timeout() * 3);
        let app = create_app(AppState::from_config(config).unwrap());

        let cookie = submit(&app, "POST", "/pet/7", "name=New&status=sold").await;
        assert_eq!(mock.request_count(), 3);

        let html = page(&app, &cookie).await;
        assert!(html.contains("Pet not found"));
        assert!(html.contains(r#"value="7""#));
    }

    #[tokio::test]
    async fn test_upstream_timeout_is_generic_failure() {
        let mock = MockPetstore::new();
        let addr = mock.spawn().await.unwrap();
        mock.set_delay(Some(Duration::from_millis(1500))).await;
        let config = Config {
            api_url: format!("http://{addr}"),
            api_timeout_secs: 1,
            flash_ttl_seconds: 300,
            session_cookie_name: "petstore_session".to_string(),
        };
        let app = create_app(AppState::from_config(config).unwrap());

        let cookie = submit(&app, "POST", "/pet/search", "id=1").await;
        let html = page(&app, &cookie).await;
        assert!(html.contains("Unexpected error"));
    }
}
