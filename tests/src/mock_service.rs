//! Mock calculation service for integration testing
//!
//! Speaks just enough HTTP/1.1 to stand in for the real calculation
//! backend: it accepts `POST /calculate`, captures every request body for
//! later assertions, and answers with a canned response.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

/// Canned response the mock returns to every request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Well-formed success body with the given result
    Success { radius_km: f64, num_sites: i64 },
    /// HTTP 200 with an arbitrary body, for malformed-payload tests
    Json(String),
    /// Non-success HTTP status with the given body
    Status { code: u16, body: String },
}

impl MockResponse {
    fn render(&self) -> (u16, String) {
        match self {
            MockResponse::Success {
                radius_km,
                num_sites,
            } => (
                200,
                serde_json::json!({
                    "radius_km": radius_km,
                    "num_sites": num_sites,
                })
                .to_string(),
            ),
            MockResponse::Json(body) => (200, body.clone()),
            MockResponse::Status { code, body } => (*code, body.clone()),
        }
    }
}

/// One-endpoint HTTP server bound to an ephemeral localhost port.
#[derive(Debug)]
pub struct MockCalculationService {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockCalculationService {
    /// Starts the mock on 127.0.0.1 with an OS-assigned port.
    ///
    /// The accept loop runs until the service is dropped and the listener
    /// task observes the closed socket.
    pub async fn start(response: MockResponse) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let captured = Arc::clone(&requests);
        let (status, body) = response.render();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let captured = Arc::clone(&captured);
                let body = body.clone();
                tokio::spawn(async move {
                    let _ = handle_connection(stream, status, body, captured).await;
                });
            }
        });

        Ok(Self { addr, requests })
    }

    /// Base URL to point a client configuration at.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request bodies received so far, in arrival order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    status: u16,
    body: String,
    captured: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    // Headers first
    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_blank_line(&buf) {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    // Then the body
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = (header_end + content_length).min(buf.len());
    let request_body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();
    captured.lock().await.push(request_body);

    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

fn find_blank_line(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}
