//! Replies of the preview server.
//!
//! tiny_http drops the body of a reply to a HEAD request, so every reply is
//! built the same way regardless of method.

use crate::config::SiteConfig;
use crate::utils::mime;
use anyhow::{Context, Result, anyhow};
use std::io::Cursor;
use std::{fs, path::Path};
use tiny_http::{Header, Request, Response, StatusCode};

struct Reply {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
    allow: Option<&'static str>,
}

impl Reply {
    fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
            allow: None,
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: mime::PLAIN,
            body: body.as_bytes().to_vec(),
            allow: None,
        }
    }

    fn send(self, request: Request) -> Result<()> {
        let mut headers = vec![
            header("Content-Type", self.content_type)?,
            // The preview must reflect the latest build
            header("Cache-Control", "no-cache")?,
        ];
        if let Some(methods) = self.allow {
            headers.push(header("Allow", methods)?);
        }

        let length = self.body.len();
        let response = Response::new(
            StatusCode(self.status),
            headers,
            Cursor::new(self.body),
            Some(length),
            None,
        );
        request.respond(response).context("failed to send response")
    }
}

fn header(name: &str, value: &str) -> Result<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes())
        .map_err(|()| anyhow!("invalid header {name}: {value}"))
}

/// A file from the output directory.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Reply::ok(mime::from_path(path), body).send(request)
}

/// 404, with the site's own `404.html` when it has one.
pub fn respond_not_found(request: Request, config: &SiteConfig) -> Result<()> {
    let reply = match fs::read(config.output_dir().join("404.html")) {
        Ok(page) => Reply {
            status: 404,
            content_type: mime::HTML,
            body: page,
            allow: None,
        },
        Err(_) => Reply::text(404, "404 Not Found"),
    };
    reply.send(request)
}

/// 405 for anything but GET and HEAD.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    Reply {
        allow: Some("GET, HEAD"),
        ..Reply::text(405, "405 Method Not Allowed")
    }
    .send(request)
}

/// 503 while Ctrl+C is shutting the server down.
pub fn respond_unavailable(request: Request) -> Result<()> {
    Reply::text(503, "503 Service Unavailable").send(request)
}
