//! HTTP handlers and route configuration.

mod assist;
mod auth;
mod health;
mod posts;
mod sports;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/sports", web::get().to(sports::catalog))
            .route("/assist/enhance", web::post().to(assist::enhance))
            // Session routes
            .service(
                web::scope("/auth")
                    .route("/otp/request", web::post().to(auth::request_otp))
                    .route("/otp/verify", web::post().to(auth::verify_otp))
                    .route("/session", web::get().to(auth::session))
                    .route("/logout", web::post().to(auth::logout)),
            )
            // Post routes (session-gated)
            .route("/feed", web::get().to(posts::feed))
            .route("/map", web::get().to(posts::map_view))
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};

    use crate::state::AppState;

    use super::configure_routes;

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn health_answers_without_a_session() {
        let app = test_app!(AppState::in_memory().await);

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["posts"], 10);
    }

    #[actix_web::test]
    async fn sport_catalog_lists_names_with_icons() {
        let app = test_app!(AppState::in_memory().await);

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/sports").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        let sports = body["data"].as_array().unwrap();
        assert_eq!(sports.len(), 17);
        assert!(
            sports
                .iter()
                .any(|s| s["name"] == "Cricket" && s["icon"] == "🏏")
        );
    }

    #[actix_web::test]
    async fn feed_is_gated_until_signed_in() {
        let state = AppState::in_memory().await;
        let app = test_app!(state.clone());

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/feed").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 401);
        assert_eq!(body["title"], "Unauthorized");

        state.session.log_in().await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/feed").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn otp_flow_issues_verifies_and_signs_in() {
        let state = AppState::in_memory().await;
        let app = test_app!(state.clone());

        let req = test::TestRequest::post()
            .uri("/api/auth/otp/request")
            .set_json(json!({ "phone": "9876543210" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["code"], "1234");
        assert_eq!(body["data"]["phone"], "9876543210");

        let req = test::TestRequest::post()
            .uri("/api/auth/otp/verify")
            .set_json(json!({ "phone": "9876543210", "code": "1234" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(state.session.is_authenticated());

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/auth/session").to_request(),
        )
        .await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["authenticated"], true);
    }

    #[actix_web::test]
    async fn short_phone_is_a_bad_request() {
        let app = test_app!(AppState::in_memory().await);

        let req = test::TestRequest::post()
            .uri("/api/auth/otp/request")
            .set_json(json!({ "phone": "12345" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn wrong_code_leaves_the_session_signed_out() {
        let state = AppState::in_memory().await;
        let app = test_app!(state.clone());

        let req = test::TestRequest::post()
            .uri("/api/auth/otp/request")
            .set_json(json!({ "phone": "9876543210" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/otp/verify")
            .set_json(json!({ "phone": "9876543210", "code": "0000" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(!state.session.is_authenticated());
    }

    #[actix_web::test]
    async fn logout_clears_the_session() {
        let state = AppState::in_memory().await;
        state.session.log_in().await;
        let app = test_app!(state.clone());

        let res = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/auth/logout").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(!state.session.is_authenticated());
    }

    #[actix_web::test]
    async fn feed_filters_by_query_and_category() {
        let state = AppState::in_memory().await;
        state.session.log_in().await;
        let app = test_app!(state);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/feed").to_request(),
        )
        .await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["total"], 10);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/feed?q=cricket")
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["posts"][0]["sport"], "Cricket");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/feed?filter=paid")
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["posts"][0]["isPaid"], true);

        // unknown chips impose no restriction
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/feed?filter=curling")
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["total"], 10);
    }

    #[actix_web::test]
    async fn map_keeps_only_placeable_live_posts() {
        let state = AppState::in_memory().await;
        state.session.log_in().await;
        let app = test_app!(state);

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/map").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        let posts = body["data"]["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 8);
        for post in posts {
            assert_eq!(post["locationType"], "live");
            assert!(post["coordinates"]["latitude"].is_f64());
        }
        assert_eq!(body["data"]["center"]["latitude"], 28.6139);
    }

    #[actix_web::test]
    async fn composing_requires_a_session() {
        let app = test_app!(AppState::in_memory().await);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "content": "anyone up for tennis?" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn composed_post_lands_on_top_of_the_feed() {
        let state = AppState::in_memory().await;
        state.session.log_in().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "content": "Need a fourth for doubles tonight",
                "manualLocation": "Indoor Courts",
                "sport": "Badminton",
                "skillLevel": "Advanced"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["surface"], "feed");
        assert_eq!(body["data"]["post"]["sport"], "Badminton");
        assert_eq!(body["data"]["post"]["skillLevel"], "Advanced");
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 11);

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/feed").to_request()).await;
        let feed: Value = test::read_body_json(res).await;
        assert_eq!(
            feed["data"]["posts"][0]["content"],
            "Need a fourth for doubles tonight"
        );
    }

    #[actix_web::test]
    async fn live_post_reports_the_map_surface() {
        let state = AppState::in_memory().await;
        state.session.log_in().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "content": "Pickup game right now",
                "isLiveLocation": true
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["surface"], "map");
        assert_eq!(body["data"]["post"]["locationName"], "Current Location");
        assert!(body["data"]["post"]["coordinates"]["latitude"].is_f64());
    }

    #[actix_web::test]
    async fn blank_content_is_unprocessable() {
        let state = AppState::in_memory().await;
        state.session.log_in().await;
        let app = test_app!(state.clone());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "content": "   " }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 422);
        assert_eq!(state.posts.len().await, 10, "store must stay untouched");
    }

    #[actix_web::test]
    async fn post_detail_finds_seeded_posts() {
        let state = AppState::in_memory().await;
        state.session.log_in().await;
        let app = test_app!(state);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/posts/3").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["id"], "3");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/posts/999").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn enhance_always_returns_text() {
        // no session and no remote backend: the local rewrite answers
        let app = test_app!(AppState::in_memory().await);

        let req = test::TestRequest::post()
            .uri("/api/assist/enhance")
            .set_json(json!({ "text": "need a tennis partner tomorrow" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        let text = body["data"]["text"].as_str().unwrap();
        assert!(text.ends_with("need a tennis partner tomorrow"));
        assert!(text.len() > "need a tennis partner tomorrow".len());
    }
}
