pub mod assemble;
pub mod error;
pub mod pdf;
pub mod routes;
pub mod source;

pub use error::*;
pub use routes::{handle, Reply};
pub use source::{FileSource, ResumeSource, StaticSource};

use tiny_http::{Header, Response, Server};

fn respond(request: tiny_http::Request, reply: Reply) {
    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    for (name, value) in &reply.headers {
        match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(h) => response.add_header(h),
            Err(()) => log::warn!("[http] dropping malformed header {}", name),
        }
    }
    if let Err(e) = request.respond(response) {
        log::warn!("[http] client went away: {}", e);
    }
}

/// Serve requests one at a time until the listener closes.
pub fn serve(server: &Server, source: &dyn ResumeSource) {
    for request in server.incoming_requests() {
        let method = request.method().clone();
        let url = request.url().to_string();
        let reply = handle(&method, &url, source);
        log::info!("[http] {} {} -> {}", method, url, reply.status);
        respond(request, reply);
    }
}
