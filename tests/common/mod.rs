//! Shared helpers: run the real router in-process on an ephemeral port.
#![allow(dead_code)]

use palindrome_messages::{transport, MessageService};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub struct TestServer {
    pub base_url: String,
    pub service: Arc<MessageService>,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create(&self, text: &str) -> Result<u64, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .post(self.url("/messages"))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        assert_eq!(resp.status().as_u16(), 201);
        let body = resp.json::<Value>().await?;
        Ok(body["id"].as_u64().ok_or("missing id")?)
    }

    /// GET /messages/{id}; returns the status and the parsed body (Null when empty).
    pub async fn get(&self, id: u64) -> Result<(u16, Value), Box<dyn std::error::Error>> {
        let resp = self.client.get(self.url(&format!("/messages/{}", id))).send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        let body = if text.is_empty() { Value::Null } else { serde_json::from_str(&text)? };
        Ok((status, body))
    }

    pub async fn update(&self, id: u64, text: &str) -> Result<u16, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .put(self.url(&format!("/messages/{}", id)))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        Ok(resp.status().as_u16())
    }

    pub async fn delete(&self, id: u64) -> Result<u16, Box<dyn std::error::Error>> {
        let resp = self.client.delete(self.url(&format!("/messages/{}", id))).send().await?;
        Ok(resp.status().as_u16())
    }

    pub async fn list(&self) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
        let resp = self.client.get(self.url("/messages")).send().await?;
        assert_eq!(resp.status().as_u16(), 200);
        let body = resp.json::<Value>().await?;
        Ok(body["messages"].as_array().ok_or("messages is not an array")?.clone())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.service.shutdown();
        self.handle.abort();
    }
}

pub async fn spawn_server(delay: Duration) -> Result<TestServer, Box<dyn std::error::Error>> {
    let service = Arc::new(MessageService::new(delay));
    let router = transport::http::create_router(transport::http::AppState::new(service.clone()));

    // Bind to an ephemeral port so tests can run in parallel.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    Ok(TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        service,
        client,
        handle,
    })
}
