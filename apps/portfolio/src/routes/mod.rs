pub mod effects;
pub mod health;
pub mod page;
pub mod theme;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(page::handle_page))
        // Theme preference
        .route(
            "/api/v1/theme",
            get(theme::handle_get_theme).put(theme::handle_set_theme),
        )
        .route("/api/v1/theme/toggle", post(theme::handle_toggle_theme))
        // Text effects
        .route("/api/v1/highlight", post(effects::handle_highlight))
        .route("/api/v1/hero/typing", get(effects::handle_hero_typing))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::state::test_support::test_state;

    async fn app() -> Router {
        build_router(test_state(Config::default()).await)
    }

    async fn send(router: Router, request: Request<Body>) -> Response {
        router.oneshot(request).await.unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(app().await, Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "portfolio");
    }

    #[tokio::test]
    async fn test_page_renders_with_current_theme() {
        let state = test_state(Config::default()).await;
        state.theme.set(crate::theme::Theme::Light).await.unwrap();
        let response = send(
            build_router(state),
            Request::get("/").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"data-theme="light""#));
        assert!(html.contains("Alex"));
    }

    #[tokio::test]
    async fn test_theme_get_put_toggle() {
        let router = app().await;

        let response = send(router.clone(), Request::get("/api/v1/theme").body(Body::empty()).unwrap()).await;
        assert_eq!(body_json(response).await, json!({"theme": "dark"}));

        let response = send(
            router.clone(),
            json_request("PUT", "/api/v1/theme", json!({"theme": "light"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"theme": "light"}));

        let response = send(
            router.clone(),
            Request::post("/api/v1/theme/toggle").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(body_json(response).await, json!({"theme": "dark"}));
    }

    #[tokio::test]
    async fn test_unknown_theme_rejected() {
        let response = send(
            app().await,
            json_request("PUT", "/api/v1/theme", json!({"theme": "sepia"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_highlight_endpoint() {
        let response = send(
            app().await,
            json_request(
                "POST",
                "/api/v1/highlight",
                json!({"text": "Used Next.js", "terms": ["Next", "Next.js"]}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"spans": [
                {"text": "Used ", "is_match": false},
                {"text": "Next.js", "is_match": true}
            ]})
        );
    }

    #[tokio::test]
    async fn test_highlight_rejects_oversized_text() {
        let text = "a".repeat(effects::MAX_HIGHLIGHT_TEXT + 1);
        let response = send(
            app().await,
            json_request("POST", "/api/v1/highlight", json!({"text": text, "terms": ["a"]})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hero_typing_stream_ends_with_full_line() {
        let state = test_state(Config::default()).await;
        let tagline = state.portfolio.profile.tagline.clone();

        let response = send(
            build_router(state),
            Request::get("/api/v1/hero/typing").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/event-stream"
        );

        let body = body_text(response).await;
        let states: Vec<Value> = body
            .lines()
            .filter_map(|line| line.strip_prefix("data: "))
            .map(|data| serde_json::from_str(data).unwrap())
            .collect();

        let first = states.first().unwrap();
        assert_eq!(first["displayed_prefix"], "");
        let last = states.last().unwrap();
        assert_eq!(last["displayed_prefix"], tagline.as_str());
        assert_eq!(last["done"], true);
    }
}
