#![allow(dead_code)]

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Bind an ephemeral port up front so the URL is known before serving
        let listener = std::net::TcpListener::bind("127.0.0.1:0").context("failed to bind test port")?;
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();
        let base_url = format!("http://127.0.0.1:{}", port);

        // Each #[tokio::test] owns a short-lived runtime, so the server gets
        // its own thread and runtime that live as long as the test process.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("failed to build server runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("failed to adopt listener");
                axum::serve(listener, telemetry_api::routes::app())
                    .await
                    .expect("test server stopped");
            });
        });

        Ok(Self { port, base_url })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline { break; }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    // Use stable get_or_init and convert init errors into a panic with context.
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to start test server"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// GET a path and decode the body as JSON
pub async fn get_json(path: &str) -> Result<(StatusCode, serde_json::Value)> {
    let server = ensure_server().await?;
    let res = reqwest::Client::new().get(server.url(path)).send().await?;
    let status = res.status();
    let body = res.json::<serde_json::Value>().await?;
    Ok((status, body))
}

/// Packet numbers of a telemetry list response, in response order
pub fn packets(body: &serde_json::Value) -> Vec<u64> {
    body.as_array()
        .map(|rows| rows.iter().filter_map(|r| r["packet"].as_u64()).collect())
        .unwrap_or_default()
}

/// POST a JSON body and decode the JSON reply
pub async fn post_json(path: &str, body: &serde_json::Value) -> Result<(StatusCode, serde_json::Value)> {
    let server = ensure_server().await?;
    let res = reqwest::Client::new().post(server.url(path)).json(body).send().await?;
    let status = res.status();
    let body = res.json::<serde_json::Value>().await?;
    Ok((status, body))
}
