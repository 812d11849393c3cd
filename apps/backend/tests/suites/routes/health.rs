use actix_web::http::StatusCode;
use actix_web::test;

use crate::common::{assert_error, read_json};
use crate::support::test_state::build_state_without_db;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn root_banner_is_plain_text() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Portfolio backend is running");
    Ok(())
}

#[actix_web::test]
async fn health_reports_database_and_migrations() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_ne!(body["migrations"], "no_migrations");
    assert!(body.get("dbError").is_none());
    assert!(body["time"].as_str().is_some());
    Ok(())
}

#[actix_web::test]
async fn health_without_database_still_answers() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["db"], "error");
    assert_eq!(body["dbError"], "DB unavailable");
    Ok(())
}

#[actix_web::test]
async fn data_routes_without_database_are_503() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(
        resp,
        StatusCode::SERVICE_UNAVAILABLE,
        "DB_UNAVAILABLE",
        "Service temporarily unavailable",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn security_headers_are_set() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let resp = test::call_service(&app, req).await;
    let headers = resp.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(headers.get("cache-control").unwrap(), "no-store");

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().get("cache-control").is_none());
    Ok(())
}
