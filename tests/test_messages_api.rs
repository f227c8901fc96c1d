//! HTTP contract: status codes, response shapes, ordering and id assignment.

mod common;

use common::{spawn_server, TestResult};
use serde_json::{json, Value};
use std::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_and_get_shape() -> TestResult {
    let server = spawn_server(Duration::from_secs(30)).await?;

    let id = server.create("abc").await?;
    assert_eq!(id, 1);

    let (status, body) = server.get(id).await?;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "id": 1, "text": "abc", "is_palindrome": null }));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_empty_text_is_accepted() -> TestResult {
    let server = spawn_server(Duration::ZERO).await?;

    let id = server.create("").await?;
    let (status, body) = server.get(id).await?;
    assert_eq!(status, 200);
    assert_eq!(body["text"], "");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_is_sorted_and_complete() -> TestResult {
    let server = spawn_server(Duration::from_secs(30)).await?;

    assert!(server.list().await?.is_empty());

    let mut ids = Vec::new();
    for text in ["one", "two", "three", "four", "five"] {
        ids.push(server.create(text).await?);
    }
    assert_eq!(server.delete(ids[1]).await?, 204);
    assert_eq!(server.update(ids[3], "four!").await?, 200);

    let messages = server.list().await?;
    let listed: Vec<u64> = messages.iter().filter_map(|m| m["id"].as_u64()).collect();
    assert_eq!(listed, vec![ids[0], ids[2], ids[3], ids[4]]);
    assert_eq!(messages[2]["text"], "four!");
    for message in &messages {
        assert!(message["is_palindrome"].is_null());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_orders_concurrent_creates() -> TestResult {
    let server = spawn_server(Duration::ZERO).await?;

    let mut handles = Vec::new();
    for i in 0..50 {
        let client = server.client.clone();
        let url = server.url("/messages");
        handles.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({ "text": format!("m{}", i) }))
                .send()
                .await
                .map(|r| r.status().as_u16())
        }));
    }
    for handle in handles {
        assert_eq!(handle.await??, 201);
    }

    let listed: Vec<u64> = server
        .list()
        .await?
        .iter()
        .filter_map(|m| m["id"].as_u64())
        .collect();
    let expected: Vec<u64> = (1..=50).collect();
    assert_eq!(listed, expected);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_ids_return_404() -> TestResult {
    let server = spawn_server(Duration::ZERO).await?;

    let (status, _) = server.get(42).await?;
    assert_eq!(status, 404);
    assert_eq!(server.update(42, "abc").await?, 404);
    assert_eq!(server.delete(42).await?, 404);

    // A failed update must not create the message.
    let (status, _) = server.get(42).await?;
    assert_eq!(status, 404);
    assert!(server.list().await?.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_delete_then_every_operation_is_404() -> TestResult {
    let server = spawn_server(Duration::ZERO).await?;

    let id = server.create("racecar").await?;
    assert_eq!(server.delete(id).await?, 204);

    let (status, _) = server.get(id).await?;
    assert_eq!(status, 404);
    assert_eq!(server.update(id, "abc").await?, 404);
    assert_eq!(server.delete(id).await?, 404);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ids_are_never_reused() -> TestResult {
    let server = spawn_server(Duration::ZERO).await?;

    let first = server.create("a").await?;
    let second = server.create("b").await?;
    assert_eq!(server.delete(second).await?, 204);

    let third = server.create("c").await?;
    assert!(third > second && second > first);

    let resp = server.client.delete(server.url("/messages")).send().await?;
    assert_eq!(resp.status().as_u16(), 204);

    let fourth = server.create("d").await?;
    assert!(fourth > third);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_delete_all_is_idempotent() -> TestResult {
    let server = spawn_server(Duration::ZERO).await?;

    let resp = server.client.delete(server.url("/messages")).send().await?;
    assert_eq!(resp.status().as_u16(), 204);
    assert!(resp.text().await?.is_empty());

    for text in ["x", "y", "z"] {
        server.create(text).await?;
    }
    let resp = server.client.delete(server.url("/messages")).send().await?;
    assert_eq!(resp.status().as_u16(), 204);

    let raw = server
        .client
        .get(server.url("/messages"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(raw, json!({ "messages": [] }));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_update_and_delete_have_empty_bodies() -> TestResult {
    let server = spawn_server(Duration::ZERO).await?;
    let id = server.create("abc").await?;

    let resp = server
        .client
        .put(server.url(&format!("/messages/{}", id)))
        .json(&json!({ "text": "aba" }))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.text().await?.is_empty());

    let resp = server
        .client
        .delete(server.url(&format!("/messages/{}", id)))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 204);
    assert!(resp.text().await?.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_malformed_requests_return_400() -> TestResult {
    let server = spawn_server(Duration::ZERO).await?;

    let resp = server.client.get(server.url("/messages/not-a-number")).send().await?;
    assert_eq!(resp.status().as_u16(), 400);
    let body = resp.json::<Value>().await?;
    assert_eq!(body["success"], false);

    let resp = server
        .client
        .post(server.url("/messages"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);

    let resp = server
        .client
        .post(server.url("/messages"))
        .json(&json!({ "body": "no text field" }))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);

    let id = server.create("abc").await?;
    let resp = server
        .client
        .put(server.url(&format!("/messages/{}", id)))
        .json(&json!({ "text": 12 }))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);

    // The rejected update left the message untouched.
    let (_, body) = server.get(id).await?;
    assert_eq!(body["text"], "abc");
    assert!(server.list().await?.len() == 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_health_reports_counts() -> TestResult {
    let server = spawn_server(Duration::from_secs(30)).await?;
    server.create("abc").await?;
    server.create("aba").await?;

    let body = server
        .client
        .get(server.url("/health"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["messages"], 2);
    assert_eq!(body["data"]["pending_jobs"], 2);
    assert_eq!(body["data"]["classification_delay_ms"], 30_000);
    Ok(())
}
