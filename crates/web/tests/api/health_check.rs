use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app.get_health().await;

    assert!(response.status().is_success());
    assert_eq!("OK", response.text().await.unwrap());
}

#[tokio::test]
async fn index_reports_liveness() {
    let app = spawn_app().await;

    let response = app.get_index().await;

    assert!(response.status().is_success());
    assert_eq!("Phantom Backend is running", response.text().await.unwrap());
}
