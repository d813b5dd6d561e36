//! One-shot HTTP fixture server for facade tests
//!
//! Binds an ephemeral local port, answers exactly one request with a
//! canned response, and hands the captured request back for
//! assertions. `Connection: close` keeps the client from reusing the
//! connection.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A raw captured HTTP request.
pub struct CapturedRequest {
    pub method: String,
    pub target: String,
    pub raw: String,
}

impl CapturedRequest {
    /// Returns a header value, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<String> {
        self.raw
            .split("\r\n\r\n")
            .next()?
            .lines()
            .skip(1)
            .find_map(|line| {
                let (header, value) = line.split_once(':')?;
                header
                    .trim()
                    .eq_ignore_ascii_case(name)
                    .then(|| value.trim().to_string())
            })
    }

    /// Returns the request body.
    pub fn body(&self) -> &str {
        self.raw
            .split_once("\r\n\r\n")
            .map_or("", |(_, body)| body)
    }
}

fn find_blank_line(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(pos) = find_blank_line(buf) else {
        return false;
    };
    let headers = String::from_utf8_lossy(&buf[..pos]);
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);
    buf.len() >= pos + 4 + content_length
}

/// Serves exactly one request. Returns the endpoint base URL (ending
/// in `/api/0.6`) and a receiver resolving to the captured request.
pub async fn serve_once(
    status_line: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture listener address");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept fixture connection");
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.expect("read fixture request");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if request_complete(&buf) {
                break;
            }
        }

        let raw = String::from_utf8_lossy(&buf).to_string();
        let mut start_line = raw.lines().next().unwrap_or("").split_whitespace();
        let method = start_line.next().unwrap_or("").to_string();
        let target = start_line.next().unwrap_or("").to_string();

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write fixture response");
        stream.shutdown().await.ok();

        let _ = tx.send(CapturedRequest {
            method,
            target,
            raw,
        });
    });

    (format!("http://{addr}/api/0.6"), rx)
}
