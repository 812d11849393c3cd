use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use crate::common::{assert_error, read_json};
use crate::support::auth::{admin_header, user_header};
use crate::support::test_state::test_security;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn get_before_any_write_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/api/about").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(
        resp,
        StatusCode::NOT_FOUND,
        "ABOUT_NOT_FOUND",
        "About information not found",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn first_write_creates_then_later_writes_replace() -> Result<(), Box<dyn std::error::Error>>
{
    let sec = test_security();
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/about")
        .insert_header(admin_header(&sec))
        .set_json(json!({
            "bio": "Backend developer",
            "profileImage": "https://img.example.test/me.png",
            "email": "me@example.test",
            "location": "Lisbon",
            "socialLinks": { "github": "https://github.com/me" }
        }))
        .to_request();
    let created = read_json(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert_eq!(created["socialLinks"]["github"], "https://github.com/me");

    let req = test::TestRequest::post()
        .uri("/api/about")
        .insert_header(admin_header(&sec))
        .set_json(json!({
            "bio": "Rust developer",
            "profileImage": "https://img.example.test/me.png",
            "email": "me@example.test"
        }))
        .to_request();
    let updated = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["bio"], "Rust developer");
    assert!(updated["location"].is_null());

    let req = test::TestRequest::get().uri("/api/about").to_request();
    let fetched = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(fetched["bio"], "Rust developer");
    Ok(())
}

#[actix_web::test]
async fn write_requires_admin_and_fields() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/about")
        .insert_header(user_header(&sec))
        .set_json(json!({ "bio": "x", "profileImage": "y", "email": "z" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(
        resp,
        StatusCode::FORBIDDEN,
        "FORBIDDEN",
        "Admin access required",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/about")
        .insert_header(admin_header(&sec))
        .set_json(json!({ "bio": "x", "email": "z" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(
        resp,
        StatusCode::BAD_REQUEST,
        "MISSING_FIELDS",
        "Missing required fields",
    )
    .await;
    Ok(())
}
