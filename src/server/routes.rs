use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        (method, path) if method == "GET" && path.starts_with("/api/players") => {
            match api::players_payload(path) {
                Ok(payload) => json_ok(payload),
                Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
            }
        }
        ("POST", "/api/optimize") => match api::optimize_payload(body) {
            Ok(payload) => json_ok(payload),
            Err(api::OptimizePayloadError::Parse(err)) => {
                error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
            }
            Err(api::OptimizePayloadError::Validation(msg)) => {
                error_response(400, "Bad Request", &msg)
            }
            Err(api::OptimizePayloadError::Catalog(err)) => {
                error_response(400, "Bad Request", &format!("Catalog unavailable: {err}"))
            }
            Err(api::OptimizePayloadError::Optimize(err)) => {
                error_response(422, "Unprocessable Entity", &err.to_string())
            }
            Err(api::OptimizePayloadError::Serialize(err)) => {
                error_response(500, "Internal Server Error", &err.to_string())
            }
        },
        _ => error_response(404, "Not Found", "No such route"),
    }
}

pub fn method_not_allowed() -> HttpResponse {
    error_response(405, "Method Not Allowed", "Only GET and POST are supported")
}

pub fn payload_too_large() -> HttpResponse {
    error_response(413, "Payload Too Large", "Request exceeds the size limit")
}

fn json_ok(payload: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body: payload,
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!("{{\"error\": \"{}\"}}", message.replace('"', "'")),
    }
}

fn index_html() -> String {
    "<!doctype html>\n<html>\n<head><title>gaffer</title></head>\n<body>\n\
     <h1>gaffer lineup optimizer</h1>\n\
     <p>POST /api/optimize with a player catalog and contest rules.</p>\n\
     <p>GET /api/players — current catalog. GET /api/health — liveness.</p>\n\
     </body>\n</html>\n"
        .to_string()
}
