//! API integration tests against a running server

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Create a book with a unique accession number and return it
async fn create_book(client: &Client, title: &str) -> Value {
    let acc_no = format!("IT-{}", unique_suffix());
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "accNo": acc_no,
            "title": title,
            "author": "Stewart",
            "genre": "Mathematics",
            "price": 450
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

fn unique_suffix() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos().to_string())
        .unwrap_or_default()
}

async fn borrow(client: &Client, acc_no: &str, register_no: &str) -> reqwest::Response {
    client
        .post(format!("{}/circulation/borrow", BASE_URL))
        .json(&json!({
            "accNo": acc_no,
            "registerNo": register_no,
            "studentName": "Meena",
            "issueDate": "2025-06-02"
        }))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_ready_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_book_crud() {
    let client = Client::new();
    let book = create_book(&client, "Calculus").await;
    let id = book["id"].as_str().expect("No id in response");
    let acc_no = book["accNo"].as_str().expect("No accNo in response");

    let response = client
        .get(format!("{}/books?accNo={}", BASE_URL, acc_no))
        .send()
        .await
        .expect("Failed to send request");
    let found: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(found.as_array().map(Vec::len), Some(1));

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({
            "accNo": acc_no,
            "title": "Calculus II",
            "author": "Stewart",
            "price": ""
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["title"], "Calculus II");
    assert_eq!(updated["id"], id);
    assert_eq!(updated["price"], 0.0);

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({}));

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_borrow_and_return_cycle() {
    let client = Client::new();
    let book = create_book(&client, "Linear Algebra").await;
    let acc_no = book["accNo"].as_str().expect("No accNo in response");

    let response = borrow(&client, acc_no, "22CS001").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let record: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(record["status"], "Borrowed");
    assert_eq!(record["bookTitle"], "Linear Algebra");
    assert_eq!(record["returnDate"], "");
    let record_id = record["id"].as_str().expect("No id in response");

    // Second borrow of the same copy is refused
    let response = borrow(&client, acc_no, "22CS002").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Cannot borrow: Book is currently borrowed.");

    let response = client
        .put(format!("{}/circulation/return/{}", BASE_URL, record_id))
        .json(&json!({
            "returnDate": "2025-06-10",
            "status": "Damaged",
            "remarks": "torn cover"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let returned: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(returned["id"], record_id);
    assert_eq!(returned["status"], "Damaged");

    // Damaged is not Returned: the copy stays unavailable
    let response = client
        .get(format!("{}/availability/{}", BASE_URL, acc_no))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["availability"]["isAvailable"], false);
    assert_eq!(body["availability"]["status"], "Damaged");

    let response = client
        .get(format!("{}/availability/{}/stats", BASE_URL, acc_no))
        .send()
        .await
        .expect("Failed to send request");
    let stats: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["damaged"], 1);
}

#[tokio::test]
#[ignore]
async fn test_borrow_unknown_book() {
    let client = Client::new();

    let response = borrow(&client, "NO-SUCH-ACC", "22CS001").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book not found for the given Acc No.");
}

#[tokio::test]
#[ignore]
async fn test_history_and_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/history?status=all&page=1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let history: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(history["perPage"], 20);
    assert!(history["statusCounts"]["all"].is_number());

    let response = client
        .get(format!("{}/catalog?page=1&perPage=5", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let catalog: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(catalog["perPage"], 5);
    assert!(catalog["books"].as_array().map_or(false, |books| books.len() <= 5));

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("content-type", "application/json")
        .body("{\"accNo\": ")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let stats: Value = response.json().await.expect("Failed to parse response");
    assert!(stats["books"]["total"].is_number());
    assert!(stats["borrowing"]["borrowed"].is_number());
}
