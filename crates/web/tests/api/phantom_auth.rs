use std::collections::HashSet;

use claims::assert_some;

use crate::helpers::spawn_app;

#[tokio::test]
async fn registration_returns_a_32_hex_user_id() {
    let app = spawn_app().await;

    let response = app
        .post_phantom_auth(&serde_json::json!({ "publicKey": "abc123" }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let user_id = assert_some!(body["userId"].as_str());
    assert_eq!(32, user_id.len());
    assert!(user_id
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[tokio::test]
async fn a_missing_public_key_is_accepted_as_empty() {
    // Zero-value decode, kept on purpose
    let app = spawn_app().await;

    let response = app.post_phantom_auth(&serde_json::json!({})).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_some!(body["userId"].as_str());
}

#[tokio::test]
async fn a_body_that_is_not_json_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(&format!("{}/auth/phantom", &app.address))
        .header("Content-Type", "application/json")
        .body("definitely not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    assert_eq!("Invalid request", response.text().await.unwrap());
}

#[tokio::test]
async fn the_same_public_key_registers_as_two_distinct_users() {
    let app = spawn_app().await;
    let body = serde_json::json!({ "publicKey": "pk_shared" });

    let first: serde_json::Value = app.post_phantom_auth(&body).await.json().await.unwrap();
    let second: serde_json::Value = app.post_phantom_auth(&body).await.json().await.unwrap();

    assert_ne!(first["userId"], second["userId"]);
}

#[tokio::test]
async fn fifty_registrations_mint_fifty_distinct_ids() {
    let app = spawn_app().await;

    let mut seen = HashSet::new();
    for i in 0..50 {
        let body = serde_json::json!({ "publicKey": format!("pk_{}", i) });
        let response: serde_json::Value = app.post_phantom_auth(&body).await.json().await.unwrap();
        let user_id = assert_some!(response["userId"].as_str()).to_string();
        assert!(seen.insert(user_id), "minted the same user id twice");
    }
}
