// API integration tests
//
// Drives the router in-process with tower's oneshot.
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use irrigation_advisor::{create_router, AppState, ServerConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    fn create_test_app() -> (AppState, Router) {
        let state = AppState::new(&ServerConfig::default());
        let app = create_router(state.clone());
        (state, app)
    }

    // Helper: send one request, return status and JSON body (Null if not JSON)
    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
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
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn new_session(app: &Router) -> String {
        let (status, body) = send(app, "POST", "/api/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["session_id"].as_str().unwrap().to_string()
    }

    async fn guest_session(app: &Router) -> String {
        let id = new_session(app).await;
        let (status, _) = send(app, "POST", &format!("/api/sessions/{}/guest", id), None).await;
        assert_eq!(status, StatusCode::OK);
        id
    }

    async fn event(app: &Router, id: &str, event: Value) -> (StatusCode, Value) {
        send(app, "POST", &format!("/api/sessions/{}/events", id), Some(event)).await
    }

    // =========================================================================
    // Health and session lifecycle
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let (_, app) = create_test_app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_new_session_shows_sign_in() {
        let (_, app) = create_test_app();
        let (status, body) = send(&app, "POST", "/api/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["page"], "signin-page");
        assert_eq!(body["view"]["page"], "sign_in");
        assert!(body["notice"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let (_, app) = create_test_app();
        let (status, body) = send(&app, "GET", "/api/sessions/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn test_toggle_auth_pages() {
        let (_, app) = create_test_app();
        let id = new_session(&app).await;
        let (_, body) = send(&app, "POST", &format!("/api/sessions/{}/show-sign-up", id), None).await;
        assert_eq!(body["page"], "signup-page");
        let (_, body) = send(&app, "POST", &format!("/api/sessions/{}/show-sign-in", id), None).await;
        assert_eq!(body["page"], "signin-page");
    }

    // =========================================================================
    // Auth
    // =========================================================================

    #[tokio::test]
    async fn test_sign_in_validation_is_422() {
        let (_, app) = create_test_app();
        let id = new_session(&app).await;
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/sessions/{}/sign-in", id),
            Some(json!({"email": "a@b.co", "password": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Please enter your email and password.");
    }

    #[tokio::test]
    async fn test_sign_in_unknown_user_is_401_with_inline_notice() {
        let (_, app) = create_test_app();
        let id = new_session(&app).await;
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/sessions/{}/sign-in", id),
            Some(json!({"email": "ghost@farm.in", "password": "secret1"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "No account found with this email.");

        let (_, body) = send(&app, "GET", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(body["notice"]["presentation"], "inline");
        assert_eq!(body["view"]["error"], "No account found with this email.");
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in_elsewhere() {
        let (_, app) = create_test_app();
        let id = new_session(&app).await;
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/sessions/{}/sign-up", id),
            Some(json!({"name": "Asha", "email": "asha@farm.in", "password": "secret1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile_persisted"], true);
        assert_eq!(body["page"], "irrigation-page");

        // Already signed in
        let (status, _) = send(&app, "POST", &format!("/api/sessions/{}/guest", id), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let other = new_session(&app).await;
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/sessions/{}/sign-in", other),
            Some(json!({"email": "asha@farm.in", "password": "secret1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"]["page"], "entry");
    }

    #[tokio::test]
    async fn test_concurrent_auth_submission_is_409() {
        let (state, app) = create_test_app();
        let id = new_session(&app).await;

        let shared = state.sessions.get(&id).await.unwrap();
        let _in_flight = shared.lock().await;

        let (status, _) = send(&app, "POST", &format!("/api/sessions/{}/guest", id), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    // =========================================================================
    // Wizard events
    // =========================================================================

    #[tokio::test]
    async fn test_large_scale_walkthrough() {
        let (_, app) = create_test_app();
        let id = guest_session(&app).await;

        let steps = [
            (json!({"event": "choose_scale", "scale": "large"}), "large-scale-page"),
            (json!({"event": "choose_method", "method": "canal"}), "large-scale-detail-page"),
            (json!({"event": "proceed"}), "step1-large"),
            (json!({"event": "select_season", "season": "Kharif"}), "step2-large"),
            (json!({"event": "select_soil", "soil": "Black"}), "step3-large"),
        ];
        for (ev, page) in steps {
            let (status, body) = event(&app, &id, ev).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["page"], page);
        }

        let (_, body) = send(&app, "GET", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(body["view"]["page"], "results");
        assert_eq!(body["view"]["crops"], json!(["Cotton", "Soybean", "Groundnut"]));
        assert_eq!(body["view"]["summary"], "Kharif season & Black soil");

        let (status, body) = event(&app, &id, json!({"event": "open_crop_detail", "crop": "Cotton"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], "detail-page");
        assert_eq!(body["view"]["npk"], "NPK 150:75:75 kg/ha");

        let (_, body) = event(&app, &id, json!({"event": "back"})).await;
        assert_eq!(body["page"], "step3-large");
    }

    #[tokio::test]
    async fn test_events_require_sign_in() {
        let (_, app) = create_test_app();
        let id = new_session(&app).await;
        let (status, _) = event(&app, &id, json!({"event": "choose_scale", "scale": "small"})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_transition_is_409() {
        let (_, app) = create_test_app();
        let id = guest_session(&app).await;
        let (status, body) = event(&app, &id, json!({"event": "back"})).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_crop_profile_is_500() {
        let (_, app) = create_test_app();
        let id = guest_session(&app).await;
        for ev in [
            json!({"event": "choose_scale", "scale": "small"}),
            json!({"event": "choose_method", "method": "drip"}),
            json!({"event": "proceed"}),
            json!({"event": "select_season", "season": "Rabi"}),
            json!({"event": "select_soil", "soil": "Red"}),
        ] {
            let (status, _) = event(&app, &id, ev).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, _) = event(&app, &id, json!({"event": "open_crop_detail", "crop": "Beans"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (_, body) = send(&app, "GET", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(body["page"], "step3-small");
        assert_eq!(body["notice"]["presentation"], "alert");
    }

    // =========================================================================
    // Read-only lookups
    // =========================================================================

    #[tokio::test]
    async fn test_recommendation_lookup() {
        let (_, app) = create_test_app();
        let (status, body) = send(&app, "GET", "/api/recommendations/small/rabi/red", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["crops"], json!(["Peas", "Beans", "Lentil", "Chickpea"]));
        assert_eq!(body["summary"], "Rabi season on Red soil");

        let (status, _) = send(&app, "GET", "/api/recommendations/large/monsoon/black", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_crop_lookup() {
        let (_, app) = create_test_app();
        let (status, body) = send(&app, "GET", "/api/crops/large/cotton", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Cotton");

        let (status, _) = send(&app, "GET", "/api/crops/small/Bottle_Gourd", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, "GET", "/api/crops/small/Beans", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_methods_lookup() {
        let (_, app) = create_test_app();
        let (status, body) = send(&app, "GET", "/api/methods/small", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["method"], "home");

        let (status, _) = send(&app, "GET", "/api/methods/medium", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
