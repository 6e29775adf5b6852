//! Minimal HTTP/1.1 server that serves a catalog document and media files for
//! integration tests.
//!
//! `GET /api/v2/endpoints` returns the configured JSON document; `GET
//! /api/v2/<category>/<filename>` serves a static body. Options inject
//! transient 500s, truncated bodies, and stalled transfers.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Default)]
pub struct CatalogServerOptions {
    /// Per-path count of requests to fail with 500 before succeeding.
    /// The key "endpoints" targets the catalog document itself.
    pub fail_times: HashMap<String, u32>,
    /// Paths whose responses advertise the full length but stop half-way.
    pub truncate: Vec<String>,
    /// Paths whose responses hang after the first byte.
    pub stall: Vec<String>,
}

struct ServerState {
    endpoints_json: String,
    files: HashMap<String, Vec<u8>>,
    truncate: Vec<String>,
    stall: Vec<String>,
    fail_times: Mutex<HashMap<String, u32>>,
}

/// Starts a server in a background thread. Returns the API base URL
/// (e.g. "http://127.0.0.1:12345/api/v2"). The server runs until the process exits.
pub fn start(endpoints_json: &str, files: HashMap<String, Vec<u8>>) -> String {
    start_with_options(endpoints_json, files, CatalogServerOptions::default())
}

/// Like `start` but with failure injection (500s, truncation, stalls).
pub fn start_with_options(
    endpoints_json: &str,
    files: HashMap<String, Vec<u8>>,
    opts: CatalogServerOptions,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let state = Arc::new(ServerState {
        endpoints_json: endpoints_json.to_string(),
        files,
        truncate: opts.truncate,
        stall: opts.stall,
        fail_times: Mutex::new(opts.fail_times),
    });
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let state = Arc::clone(&state);
            thread::spawn(move || handle(stream, &state));
        }
    });
    format!("http://127.0.0.1:{}/api/v2", port)
}

fn handle(mut stream: std::net::TcpStream, state: &ServerState) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match parse_request(request) {
        Some(p) => p,
        None => {
            let _ = stream
                .write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
            return;
        }
    };
    let rel = match path.strip_prefix("/api/v2/") {
        Some(r) => r,
        None => {
            write_response(&mut stream, "404 Not Found", b"");
            return;
        }
    };

    // Failure injection runs before routing so "endpoints" can target discovery.
    if let Some(left) = state.fail_times.lock().unwrap().get_mut(rel) {
        if *left > 0 {
            *left -= 1;
            write_response(&mut stream, "500 Internal Server Error", b"");
            return;
        }
    }

    if rel == "endpoints" {
        write_response(&mut stream, "200 OK", state.endpoints_json.as_bytes());
        return;
    }

    let body = match state.files.get(rel) {
        Some(b) => b,
        None => {
            write_response(&mut stream, "404 Not Found", b"");
            return;
        }
    };

    if state.stall.iter().any(|p| p == rel) {
        // Headers plus one byte, then hold the connection open.
        let header = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(header.as_bytes());
        let _ = stream.write_all(body.get(..1).unwrap_or(&[]));
        let _ = stream.flush();
        thread::sleep(std::time::Duration::from_secs(30));
        return;
    }

    if state.truncate.iter().any(|p| p == rel) {
        // Advertise the full length but stop half-way through the body.
        let header = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(header.as_bytes());
        let _ = stream.write_all(&body[..body.len() / 2]);
        return;
    }

    write_response(&mut stream, "200 OK", body);
}

fn write_response(stream: &mut std::net::TcpStream, status: &str, body: &[u8]) {
    let header = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}

/// Returns the request path for GET requests, None for anything else.
fn parse_request(request: &str) -> Option<&str> {
    let first = request.lines().next()?;
    let mut parts = first.split_whitespace();
    let method = parts.next()?;
    if !method.eq_ignore_ascii_case("GET") {
        return None;
    }
    parts.next()
}
