// Gate behaviour observed through real routes.
//
// `/api/admin/dashboard` is gated by the scope middleware, `POST /api/skills`
// by the `AdminUser` extractor, `/api/auth/me` by `AuthenticatedUser` only.
// Both admin paths must answer identically.

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use crate::common::{assert_error, read_json};
use crate::support::auth::{admin_header, bearer_header, mint_expired_token, user_header};
use crate::support::test_state::{build_state_without_db, test_security};
use crate::support::{build_test_state, create_test_app};

const ADMIN_PATHS: &[&str] = &["/api/admin/dashboard", "/api/contact"];

#[actix_web::test]
async fn no_header_is_authentication_required() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;

    for path in ADMIN_PATHS {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_error(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Authentication required",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn expired_token_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;
    let token = mint_expired_token("u1", "admin", &sec);

    for path in ADMIN_PATHS {
        let req = test::TestRequest::get()
            .uri(path)
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Invalid or expired token",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn malformed_credentials_share_one_message() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;
    let good = bearer_header("u1", "admin", &sec);
    let other_secret = backend::state::security_config::SecurityConfig::new(
        "some-other-secret".as_bytes(),
    );

    let cases = vec![
        "Bearer".to_string(),
        "Bearer ".to_string(),
        "Basic dXNlcjpwYXNz".to_string(),
        "Bearer not.a.jwt".to_string(),
        format!("{good} extra"),
        bearer_header("u1", "admin", &other_secret),
    ];

    for value in cases {
        let req = test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .insert_header(("Authorization", value.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "header {value:?} should be rejected"
        );
        assert_error(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Invalid or expired token",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn user_role_is_forbidden() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;

    for path in ADMIN_PATHS {
        let req = test::TestRequest::get()
            .uri(path)
            .insert_header(user_header(&sec))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error(
            resp,
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "Admin access required",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn forged_role_header_grants_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;

    // no credential at all
    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(("x-user-role", "admin"))
        .insert_header(("x-user-id", "u1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED",
        "Authentication required",
    )
    .await;

    // valid user credential plus forged role
    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(user_header(&sec))
        .insert_header(("x-user-role", "admin"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(
        resp,
        StatusCode::FORBIDDEN,
        "FORBIDDEN",
        "Admin access required",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn admin_identity_reaches_handler() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(admin_header(&sec))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = read_json(resp, StatusCode::OK).await;
    assert_eq!(body, json!({ "userId": "u1", "role": "admin" }));

    // authentication alone is enough for /me
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(user_header(&sec))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = read_json(resp, StatusCode::OK).await;
    assert_eq!(body, json!({ "userId": "u2", "role": "user" }));
    Ok(())
}

#[actix_web::test]
async fn admin_passes_scope_gate() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(admin_header(&sec))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn gate_runs_before_body_validation() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(user_header(&sec))
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[actix_web::test]
async fn rejection_trace_id_matches_request_id() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-request-id header");
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-trace-id header");
    assert_eq!(request_id, trace_id);
    Ok(())
}
