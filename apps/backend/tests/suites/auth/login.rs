use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::jwt::verify_access_token;
use serde_json::json;

use crate::common::{assert_error, read_json};
use crate::support::factory::seed_user;
use crate::support::test_state::test_security;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn login_issues_token_with_user_role() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let user = seed_user(&state, "owner", "correct horse", "admin").await;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "owner", "password": "correct horse" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = read_json(resp, StatusCode::OK).await;

    let token = body["token"].as_str().expect("token field");
    let claims = verify_access_token(token, &test_security()).expect("token should verify");
    assert_eq!(claims.user_id, user.id.to_string());
    assert_eq!(claims.role, "admin");
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    Ok(())
}

#[actix_web::test]
async fn issued_token_opens_admin_routes() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_user(&state, "owner", "pw", "admin").await;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "owner", "password": "pw" }))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(
        body,
        json!({ "projects": 0, "skills": 0, "contacts": 0, "unreadContacts": 0 })
    );
    Ok(())
}

#[actix_web::test]
async fn wrong_password_and_unknown_user_look_the_same() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    seed_user(&state, "owner", "pw", "admin").await;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for body in [
        json!({ "username": "owner", "password": "nope" }),
        json!({ "username": "ghost", "password": "pw" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Invalid credentials",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn missing_login_fields_are_400() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for body in [
        json!({}),
        json!({ "username": "owner" }),
        json!({ "username": "   ", "password": "pw" }),
        json!({ "username": "owner", "password": "" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error(
            resp,
            StatusCode::BAD_REQUEST,
            "MISSING_FIELDS",
            "Username and password are required",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn user_role_login_is_still_forbidden_on_admin_routes(
) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_user(&state, "viewer", "pw", "user").await;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "viewer", "password": "pw" }))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/contact")
        .insert_header(("Authorization", format!("Bearer {token}")))
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
