use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use crate::common::read_json;
use crate::support::auth::admin_header;
use crate::support::factory::{seed_contact, seed_project, seed_skill};
use crate::support::test_state::test_security;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn dashboard_counts_content() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let state = build_test_state().await?;
    seed_skill(&state, "Rust", 0).await;
    seed_skill(&state, "SQL", 1).await;
    seed_project(&state, "Site", 0).await;
    seed_contact(&state, "Ada").await;
    let read = seed_contact(&state, "Grace").await;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/contact/{}", read.id))
        .insert_header(admin_header(&sec))
        .set_json(json!({ "read": true }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(admin_header(&sec))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(
        body,
        json!({ "projects": 1, "skills": 2, "contacts": 2, "unreadContacts": 1 })
    );
    Ok(())
}
