use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;
use uuid::Uuid;

use crate::common::{assert_error, read_json};
use crate::support::auth::admin_header;
use crate::support::factory::seed_skill;
use crate::support::test_state::test_security;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn list_is_public_and_ordered() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_skill(&state, "Second", 2).await;
    seed_skill(&state, "First", 1).await;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(body[0]["order"], 1);
    assert!(body[0].get("sortOrder").is_none());
    Ok(())
}

#[actix_web::test]
async fn create_applies_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(admin_header(&sec))
        .set_json(json!({ "name": "Rust", "icon": "rust.svg", "level": 5 }))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert_eq!(body["name"], "Rust");
    assert_eq!(body["level"], 5);
    assert_eq!(body["category"], "technical");
    assert_eq!(body["order"], 0);
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    Ok(())
}

#[actix_web::test]
async fn create_rejects_missing_fields_and_bad_level() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;

    for body in [
        json!({ "icon": "x", "level": 3 }),
        json!({ "name": "Rust", "level": 3 }),
        json!({ "name": "Rust", "icon": "x" }),
        json!({ "name": "Rust", "icon": "x", "level": 0 }),
        json!({ "name": "  ", "icon": "x", "level": 3 }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/skills")
            .insert_header(admin_header(&sec))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error(
            resp,
            StatusCode::BAD_REQUEST,
            "MISSING_FIELDS",
            "Missing required fields",
        )
        .await;
    }

    for level in [6, -1, 100] {
        let req = test::TestRequest::post()
            .uri("/api/skills")
            .insert_header(admin_header(&sec))
            .set_json(json!({ "name": "Rust", "icon": "x", "level": level }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error(
            resp,
            StatusCode::BAD_REQUEST,
            "INVALID_SKILL_LEVEL",
            "Level must be between 1 and 5",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn update_changes_only_given_fields() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let state = build_test_state().await?;
    let skill = seed_skill(&state, "Go", 4).await;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/skills/{}", skill.id))
        .insert_header(admin_header(&sec))
        .set_json(json!({ "level": 5, "name": "" }))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["name"], "Go");
    assert_eq!(body["level"], 5);
    assert_eq!(body["order"], 4);
    Ok(())
}

#[actix_web::test]
async fn update_and_delete_unknown_ids() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await?;
    let missing = Uuid::new_v4();

    let req = test::TestRequest::put()
        .uri(&format!("/api/skills/{missing}"))
        .insert_header(admin_header(&sec))
        .set_json(json!({ "level": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::NOT_FOUND, "SKILL_NOT_FOUND", "Skill not found").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/skills/{missing}"))
        .insert_header(admin_header(&sec))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::NOT_FOUND, "SKILL_NOT_FOUND", "Skill not found").await;

    let req = test::TestRequest::delete()
        .uri("/api/skills/not-a-uuid")
        .insert_header(admin_header(&sec))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::BAD_REQUEST, "INVALID_ID", "Invalid id").await;
    Ok(())
}

#[actix_web::test]
async fn delete_removes_skill() -> Result<(), Box<dyn std::error::Error>> {
    let sec = test_security();
    let state = build_test_state().await?;
    let skill = seed_skill(&state, "Elm", 1).await;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/skills/{}", skill.id))
        .insert_header(admin_header(&sec))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body, json!({ "message": "Skill deleted" }));

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body, json!([]));
    Ok(())
}
