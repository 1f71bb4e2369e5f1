pub mod bids;
pub mod feedbacks;
pub mod listings;
pub mod saved_ads;
pub mod tokens;
pub mod users;

use axum::{routing::get, Router};
use crate::state::AppState;

pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Car marketplace server is running" }))
        .route("/health", get(health_check))
        .merge(tokens::routes())
        .merge(users::routes(state))
        .merge(listings::routes(state))
        .merge(saved_ads::routes())
        .merge(feedbacks::routes())
        .merge(bids::routes(state))
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::sign_token;
    use crate::handlers::test_support::{state, SECRET};
    use crate::models::user::User;
    use crate::store::MarketStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use mongodb::bson::doc;
    use serde_json::{json, Map, Value};
    use tower::ServiceExt;

    fn app(state: AppState) -> Router {
        create_router(&state).with_state(state)
    }

    fn bearer(email: &str) -> String {
        format!("Bearer {}", sign_token(email, Map::new(), SECRET).unwrap())
    }

    fn post_json(uri: &str, body: Value, auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::post(uri).header("content-type", "application/json");
        if let Some(a) = auth {
            builder = builder.header("authorization", a);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn json_body(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn listing_body() -> Value {
        json!({
            "sellerEmail": "seller@x.com",
            "brand": "Toyota",
            "model": "Corolla",
            "year": 2015,
            "price": 8500.0
        })
    }

    #[tokio::test]
    async fn liveness_and_health() {
        let (state, _) = state();
        let resp = app(state.clone())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_routes_without_bearer_are_401_and_skip_store() {
        let (state, store) = state();

        for uri in ["/newCarSellByUser", "/newBid"] {
            let resp = app(state.clone())
                .oneshot(post_json(uri, listing_body(), None))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }

        let resp = app(state)
            .oneshot(Request::get("/allUsers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn wrong_scheme_and_bad_token_are_401() {
        let (state, store) = state();

        let resp = app(state.clone())
            .oneshot(post_json("/newCarSellByUser", listing_body(), Some("Basic abc")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = app(state)
            .oneshot(post_json("/newCarSellByUser", listing_body(), Some("Bearer garbage")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(resp).await["error"], "Unauthorized access");
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn issued_token_opens_protected_route() {
        let (state, _) = state();

        let resp = app(state.clone())
            .oneshot(post_json("/jwt", json!({ "email": "seller@x.com" }), None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let token = json_body(resp).await["token"].as_str().unwrap().to_string();

        let resp = app(state)
            .oneshot(post_json("/newCarSellByUser", listing_body(), Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["acknowledged"], true);
        assert!(body["insertedId"].is_string());
    }

    #[tokio::test]
    async fn duplicate_registration_returns_null_id_sentinel() {
        let (state, store) = state();
        let user = json!({ "email": "a@x.com", "name": "A" });

        let resp = app(state.clone()).oneshot(post_json("/newUserApi", user.clone(), None)).await.unwrap();
        assert!(json_body(resp).await["insertedId"].is_string());

        let resp = app(state).oneshot(post_json("/newUserApi", user, None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(json_body(resp).await["insertedId"].is_null());
        assert_eq!(store.users().len(), 1);
    }

    #[tokio::test]
    async fn bid_on_missing_listing_is_404() {
        let (state, store) = state();
        let body = json!({ "productId": mongodb::bson::oid::ObjectId::new().to_hex(), "amount": 100.0 });

        let resp = app(state)
            .oneshot(post_json("/newBid", body, Some(&bearer("buyer@x.com"))))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(store.bids().is_empty());
    }

    #[tokio::test]
    async fn admin_route_requires_admin_role() {
        let (state, store) = state();
        for (email, role) in [("admin@x.com", "admin"), ("plain@x.com", "user")] {
            store
                .insert_user(User {
                    id: None,
                    email: email.into(),
                    role: role.into(),
                    name: None,
                    photo_url: None,
                    created_at: None,
                })
                .await
                .unwrap();
        }

        let get_users = |auth: String| {
            Request::get("/allUsers")
                .header("authorization", auth)
                .body(Body::empty())
                .unwrap()
        };

        let resp = app(state.clone()).oneshot(get_users(bearer("plain@x.com"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = app(state.clone()).oneshot(get_users(bearer("ghost@x.com"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = app(state).oneshot(get_users(bearer("admin@x.com"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn single_feedback_miss_is_null() {
        let (state, _) = state();
        let resp = app(state)
            .oneshot(Request::get("/singleFeedback/nobody").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(json_body(resp).await.is_null());
    }

    #[tokio::test]
    async fn admin_promoted_by_hand_passes_gate() {
        let (state, store) = state();
        // Written directly in the database: no timestamps, no profile fields.
        let admin: User = mongodb::bson::from_document(doc! { "email": "boss@x.com", "role": "admin" }).unwrap();
        assert!(admin.created_at.is_none());
        store.insert_user(admin).await.unwrap();

        let resp = app(state.clone())
            .oneshot(
                Request::get("/allUsers")
                    .header("authorization", bearer("boss@x.com"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let users = json_body(resp).await;
        assert!(users[0]["createdAt"].is_null());

        let resp = app(state)
            .oneshot(post_json("/newUserApi", json!({ "email": "boss@x.com" }), None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(json_body(resp).await["insertedId"].is_null());
    }

    #[tokio::test]
    async fn registered_claims_cannot_be_smuggled_into_token() {
        let (state, _) = state();

        for claim in ["aud", "iss", "nbf", "exp"] {
            let mut body = json!({ "email": "a@x.com" });
            body[claim] = json!("web");
            let resp = app(state.clone()).oneshot(post_json("/jwt", body, None)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{claim}");
        }

        let resp = app(state.clone())
            .oneshot(post_json("/jwt", json!({ "email": "a@x.com", "name": "A" }), None))
            .await
            .unwrap();
        let token = json_body(resp).await["token"].as_str().unwrap().to_string();
        let resp = app(state)
            .oneshot(post_json("/newCarSellByUser", listing_body(), Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_method_on_protected_route_is_405() {
        let (state, store) = state();
        for uri in ["/newBid", "/newCarSellByUser"] {
            let resp = app(state.clone())
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        }
        assert_eq!(store.calls(), 0);
    }
}
