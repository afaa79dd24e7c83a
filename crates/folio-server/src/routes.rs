use crate::assemble;
use crate::error::ServerError;
use crate::source::ResumeSource;
use folio_core::attachment_disposition;
use serde::Serialize;
use tiny_http::Method;

pub const RESUME_PATH: &str = "/api/generate-resume";
pub const GENERATE_FAILED: &str = "Failed to generate resume";

/// A response before it is bound to a connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Route one request. `url` may carry a query string, which is ignored.
pub fn handle(method: &Method, url: &str, source: &dyn ResumeSource) -> Reply {
    let path = url.split('?').next().unwrap_or(url);
    if path != RESUME_PATH {
        return Reply::empty(404);
    }
    match method {
        // GET is kept for manual testing from a browser tab
        Method::Post | Method::Get => generate(source),
        _ => {
            let mut reply = Reply::empty(405);
            reply.headers.push(("Allow", "GET, POST".to_string()));
            reply
        }
    }
}

fn build(source: &dyn ResumeSource) -> Result<(Vec<u8>, String), ServerError> {
    let data = source.load()?;
    let bytes = assemble::render(&data)?;
    Ok((bytes, data.download_filename()))
}

fn generate(source: &dyn ResumeSource) -> Reply {
    match build(source) {
        Ok((bytes, filename)) => {
            log::info!("[resume] generated {} ({} bytes)", filename, bytes.len());
            Reply {
                status: 200,
                headers: vec![
                    ("Content-Type", "application/pdf".to_string()),
                    ("Content-Disposition", attachment_disposition(&filename)),
                ],
                body: bytes,
            }
        }
        Err(e) => {
            log::error!("[resume] generation failed: {}", e);
            let body = serde_json::to_vec(&ErrorBody {
                error: GENERATE_FAILED,
            })
            .unwrap_or_default();
            Reply {
                status: 500,
                headers: vec![("Content-Type", "application/json".to_string())],
                body,
            }
        }
    }
}
