//! # HTTP Layer
//!
//! A deliberately small HTTP/1.1 server: one tokio task per connection, one
//! request per connection, JSON in and JSON out.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Connection Handling                                  │
//! │                                                                         │
//! │  accept() ──► spawn task ──► read until headers + body complete        │
//! │                                   │ (httparse, incremental)            │
//! │                                   ▼                                     │
//! │                              routes::dispatch()                        │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                              write response, close                     │
//! │                                                                         │
//! │  Connection: close on every response - the storefront client opens     │
//! │  a fresh connection per call, so keep-alive buys nothing here.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, warn};

use crate::routes::{self, RouteTable};
use crate::state::AppState;

/// Largest request we will buffer before giving up (64 KiB).
///
/// Order submissions are a few hundred bytes; anything near this limit is
/// not a storefront client.
const MAX_REQUEST_BYTES: usize = 64 * 1024;

// =============================================================================
// Request / Response
// =============================================================================

/// A parsed HTTP request, reduced to what the handlers need.
#[derive(Debug)]
pub struct Request {
    /// The HTTP method used in the request.
    pub method: String,
    /// The full path of the request, query string included.
    pub path: String,
    /// Body of the request (empty for bodyless methods).
    pub body: String,
}

impl Request {
    /// Creates a GET request (handler tests).
    pub fn get(path: &str) -> Request {
        Request {
            method: "GET".to_string(),
            path: path.to_string(),
            body: String::new(),
        }
    }

    /// Creates a POST request with a body (handler tests).
    pub fn post(path: &str, body: impl Into<String>) -> Request {
        Request {
            method: "POST".to_string(),
            path: path.to_string(),
            body: body.into(),
        }
    }
}

/// An HTTP response ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status code of the response.
    pub status: u16,
    /// JSON body. Content-Length is added on serialization.
    pub body: String,
}

impl Response {
    /// Creates a response by serializing a value to JSON.
    ///
    /// Serialization of our own response types cannot realistically fail;
    /// if it somehow does, the client gets a 500 instead of a broken body.
    pub fn json<T: Serialize>(status: u16, value: &T) -> Response {
        match serde_json::to_string(value) {
            Ok(body) => Response { status, body },
            Err(err) => {
                warn!(%err, "Failed to serialize response body");
                Response {
                    status: 500,
                    body: r#"{"error":"Internal server error"}"#.to_string(),
                }
            }
        }
    }

    /// Serializes the response to raw HTTP/1.1 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            reason_phrase(self.status),
            self.body.len(),
            self.body
        )
        .into_bytes()
    }
}

/// Standard reason phrase for the status codes this API emits.
pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

// =============================================================================
// Request Parsing
// =============================================================================

/// Outcome of attempting to parse the bytes buffered so far.
#[derive(Debug)]
pub enum ParseStatus {
    /// A full request (headers + body) was parsed.
    Complete(Request),
    /// More bytes are needed.
    Partial,
    /// The bytes are not a valid HTTP request.
    Invalid,
}

/// Attempts to parse a complete request out of the buffer.
///
/// httparse parses incrementally: a prefix of a valid request reports
/// `Partial`, and the caller keeps reading. After the header block, the
/// body is complete once `Content-Length` more bytes have arrived.
pub fn parse_request(buf: &[u8]) -> ParseStatus {
    let mut headers = [httparse::EMPTY_HEADER; 32];
    let mut parsed = httparse::Request::new(&mut headers);

    let header_len = match parsed.parse(buf) {
        Ok(httparse::Status::Complete(len)) => len,
        Ok(httparse::Status::Partial) => return ParseStatus::Partial,
        Err(_) => return ParseStatus::Invalid,
    };

    let body_len = parsed
        .headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case("Content-Length"))
        .and_then(|h| std::str::from_utf8(h.value).ok())
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    if buf.len() < header_len + body_len {
        return ParseStatus::Partial;
    }

    let body = String::from_utf8_lossy(&buf[header_len..header_len + body_len]).into_owned();

    ParseStatus::Complete(Request {
        method: parsed.method.unwrap_or("GET").to_string(),
        path: parsed.path.unwrap_or("/").to_string(),
        body,
    })
}

// =============================================================================
// Server Loop
// =============================================================================

/// Accepts connections forever, one handler task each.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let table = Arc::new(routes::table());

    loop {
        let (stream, peer) = listener.accept().await?;
        debug!(%peer, "Connection accepted");

        let table = Arc::clone(&table);
        let state = state.clone();
        tokio::spawn(async move {
            handle_connection(stream, &table, &state).await;
        });
    }
}

/// Reads one request, dispatches it, writes one response.
async fn handle_connection(mut stream: TcpStream, table: &RouteTable, state: &AppState) {
    let mut buf = Vec::with_capacity(4096);
    let mut chunk = [0u8; 4096];

    let request = loop {
        let read = match stream.read(&mut chunk).await {
            Ok(0) => return, // peer closed before sending a full request
            Ok(n) => n,
            Err(err) => {
                debug!(%err, "Read failed");
                return;
            }
        };
        buf.extend_from_slice(&chunk[..read]);

        match parse_request(&buf) {
            ParseStatus::Complete(request) => break request,
            ParseStatus::Partial if buf.len() > MAX_REQUEST_BYTES => {
                write_response(
                    &mut stream,
                    Response {
                        status: 400,
                        body: r#"{"error":"Request too large"}"#.to_string(),
                    },
                )
                .await;
                return;
            }
            ParseStatus::Partial => continue,
            ParseStatus::Invalid => {
                write_response(
                    &mut stream,
                    Response {
                        status: 400,
                        body: r#"{"error":"Malformed request"}"#.to_string(),
                    },
                )
                .await;
                return;
            }
        }
    };

    debug!(method = %request.method, path = %request.path, "Request");

    let response =
        routes::dispatch(state, table, &request).unwrap_or_else(|err| err.into_response());

    write_response(&mut stream, response).await;
}

/// Writes a response and closes the stream; write errors are logged only.
async fn write_response(stream: &mut TcpStream, response: Response) {
    if let Err(err) = stream.write_all(&response.to_bytes()).await {
        debug!(%err, "Failed to write response");
    }
    let _ = stream.shutdown().await;
}

// =============================================================================
// Unit Tests
// =============================================================================
