//! Static file server for the landing page
//!
//! Serves the Trunk build from the dist/ directory on port 8080. Unknown
//! paths fall back to index.html so `/?section=timeline` style links work.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST_DIR: &str = "dist";

fn main() {
    let listener = match TcpListener::bind(ADDR) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", ADDR, e);
            std::process::exit(1);
        }
    };

    println!("Career Week landing page running at http://{}", ADDR);
    println!("Serving from {}/ directory", DIST_DIR);
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve(Path::new(DIST_DIR), full_path);

    let (status, content_type, body) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", content_type(&file_path), contents),
        Err(e) => {
            eprintln!("File not found: {} ({})", file_path.display(), e);
            (
                "404 NOT FOUND",
                "text/html; charset=utf-8",
                b"<!DOCTYPE html><html><body><h1>Error: File not found</h1></body></html>".to_vec(),
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write file contents: {}", e);
    }
    let _ = stream.flush();
}

/// Map a request path to a file under `root`. Query strings are ignored, the
/// path is percent-decoded, `..` segments are rejected after decoding and
/// missing files fall back to `index.html`.
fn resolve(root: &Path, request_path: &str) -> PathBuf {
    let index = root.join("index.html");
    let path = request_path.split_once('?').map_or(request_path, |(path, _)| path);
    let Ok(decoded) = urlencoding::decode(path) else {
        return index;
    };
    let decoded = decoded.trim_start_matches('/');

    if decoded.is_empty() || decoded.split(['/', '\\']).any(|segment| segment == "..") {
        return index;
    }

    let candidate = root.join(decoded);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
