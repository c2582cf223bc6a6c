//! Local preview server for the built site.
//!
//! Serves the output directory as-is; no on-demand rendering. Requests run
//! on a small thread pool and the loop stops on Ctrl+C.

mod lifecycle;
mod path;
mod response;

use crate::{
    cli::build::build_site,
    config::SiteConfig,
    debug, log,
};
use anyhow::{Context, Result};
use crossbeam::channel::{self, Receiver};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tiny_http::{Method, Request, Server};

/// How often the request loop checks for shutdown while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
    config: Arc<SiteConfig>,
    shutdown_rx: Receiver<()>,
}

/// Build the site, then serve it until Ctrl+C.
pub fn serve_site(config: Arc<SiteConfig>) -> Result<()> {
    build_site(&config, false)?;
    bind_server(config)?.run()
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: Arc<SiteConfig>) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.addr())?;
    let server = Arc::new(server);

    let (shutdown_tx, shutdown_rx) = channel::bounded::<()>(1);
    if !crate::core::attach_server(Arc::clone(&server), shutdown_tx) {
        debug!("serve"; "Ctrl+C already routed to an earlier server");
    }

    log!("serve"; "{}", config.serve.browse_url(addr.port()));

    Ok(BoundServer {
        server,
        addr,
        config,
        shutdown_rx,
    })
}

impl BoundServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking).
    pub fn run(self) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .context("failed to create thread pool")?;

        loop {
            if self.shutdown_rx.try_recv().is_ok() || crate::core::stop_requested() {
                break;
            }
            let request = match self.server.recv_timeout(POLL_INTERVAL) {
                Ok(Some(request)) => request,
                Ok(None) => continue,
                // Unblocked by the shutdown handler, or the socket closed
                Err(_) => break,
            };
            let config = Arc::clone(&self.config);
            pool.spawn(move || {
                if let Err(e) = handle_request(request, &config) {
                    log!("serve"; "request error: {e}");
                }
            });
        }
        Ok(())
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    if crate::core::stop_requested() {
        return response::respond_unavailable(request);
    }

    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    match path::resolve_path(request.url(), config.output_dir()) {
        Some(path) => response::respond_file(request, &path),
        None => response::respond_not_found(request, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{IpAddr, Ipv4Addr, TcpStream};
    use tempfile::TempDir;

    fn get(addr: SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        stream.write_all(request.as_bytes()).unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn test_serves_output_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>hello</p>").unwrap();

        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.serve.interface = IpAddr::V4(Ipv4Addr::LOCALHOST);
        config.serve.port = 0;

        let bound = bind_server(Arc::new(config)).unwrap();
        let addr = bound.addr();
        std::thread::spawn(move || bound.run());

        let ok = get(addr, "GET / HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n");
        assert!(ok.starts_with("HTTP/1.1 200"), "{ok}");
        assert!(ok.contains("<p>hello</p>"));

        let missing = get(addr, "GET /nope HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n");
        assert!(missing.starts_with("HTTP/1.1 404"), "{missing}");

        let post = get(addr, "POST / HTTP/1.1\r\nHost: x\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        assert!(post.starts_with("HTTP/1.1 405"), "{post}");
        assert!(post.contains("Allow: GET, HEAD"), "{post}");

        let head = get(addr, "HEAD / HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n");
        assert!(head.starts_with("HTTP/1.1 200"), "{head}");
        assert!(!head.contains("<p>hello</p>"), "{head}");
    }

    #[test]
    fn test_custom_not_found_page() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("404.html"), "<h1>lost cookie</h1>").unwrap();

        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.serve.interface = IpAddr::V4(Ipv4Addr::LOCALHOST);
        config.serve.port = 0;

        let bound = bind_server(Arc::new(config)).unwrap();
        let addr = bound.addr();
        std::thread::spawn(move || bound.run());

        let missing = get(addr, "GET /brownies HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n");
        assert!(missing.starts_with("HTTP/1.1 404"), "{missing}");
        assert!(missing.contains("<h1>lost cookie</h1>"), "{missing}");
        assert!(missing.contains("text/html"), "{missing}");
    }
}
