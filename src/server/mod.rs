use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

pub mod api;
pub mod routes;

/// Hard ceiling on a single request. Optimize payloads are small JSON
/// bodies, so anything near this limit is not a client we serve.
const MAX_REQUEST_BYTES: usize = 256 * 1024;
const READ_CHUNK_BYTES: usize = 4096;

pub fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    println!("gaffer server listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream) {
                    eprintln!("request error: {err}");
                }
            }
            Err(err) => eprintln!("connection failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut raw = Vec::with_capacity(READ_CHUNK_BYTES);
    let mut chunk = [0_u8; READ_CHUNK_BYTES];
    loop {
        let bytes_read = stream.read(&mut chunk)?;
        if bytes_read == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..bytes_read]);
        if raw.len() > MAX_REQUEST_BYTES {
            return write_response(stream, &routes::payload_too_large());
        }
        if request_complete(&raw) {
            break;
        }
    }
    if raw.is_empty() {
        // Client connected and hung up without sending anything.
        return Ok(());
    }

    let request = String::from_utf8_lossy(&raw);
    let request_line = request.lines().next().unwrap_or_default();
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET");
    let path = request_parts.next().unwrap_or("/");

    let response = if method != "GET" && method != "POST" {
        routes::method_not_allowed()
    } else {
        let body = request
            .split("\r\n\r\n")
            .nth(1)
            .or_else(|| request.split("\n\n").nth(1))
            .unwrap_or("");
        routes::route_request(method, path, body)
    };
    write_response(stream, &response)
}

fn write_response(stream: &mut TcpStream, response: &routes::HttpResponse) -> std::io::Result<()> {
    stream.write_all(response.to_http_string().as_bytes())?;
    stream.flush()
}

/// A request is complete once the header terminator has arrived and
/// the declared Content-Length of the body (0 when absent) is in.
fn request_complete(raw: &[u8]) -> bool {
    let Some(header_end) = find_header_end(raw) else {
        return false;
    };
    let headers = String::from_utf8_lossy(&raw[..header_end]);
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
    raw.len() >= header_end + content_length
}

/// Byte offset just past the header terminator, if one has arrived.
fn find_header_end(raw: &[u8]) -> Option<usize> {
    if let Some(pos) = raw.windows(4).position(|window| window == b"\r\n\r\n") {
        return Some(pos + 4);
    }
    raw.windows(2)
        .position(|window| window == b"\n\n")
        .map(|pos| pos + 2)
}

#[cfg(test)]
mod tests {
    use super::{find_header_end, request_complete};

    #[test]
    fn bodyless_request_is_complete_at_the_header_terminator() {
        assert!(!request_complete(b"GET /api/health HTTP/1.1\r\n"));
        assert!(request_complete(b"GET /api/health HTTP/1.1\r\n\r\n"));
    }

    #[test]
    fn post_waits_for_the_declared_body() {
        let head = b"POST /api/optimize HTTP/1.1\r\nContent-Length: 4\r\n\r\n";
        assert!(!request_complete(head));
        let mut full = head.to_vec();
        full.extend_from_slice(b"{...}");
        assert!(request_complete(&full));
    }

    #[test]
    fn bare_newline_terminator_is_accepted() {
        assert_eq!(find_header_end(b"GET / HTTP/1.1\n\nxyz"), Some(16));
    }
}
