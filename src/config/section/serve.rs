//! `[serve]`: where `popchip serve` listens.
//!
//! ```toml
//! [serve]
//! interface = "0.0.0.0"   # reachable from phones on the same network
//! port = 5277
//! ```

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// First port tried; a taken port moves the server one up.
pub const DEFAULT_PORT: u16 = 5277;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServeSection {
    pub interface: IpAddr,
    pub port: u16,
}

impl Default for ServeSection {
    fn default() -> Self {
        Self {
            interface: Ipv4Addr::LOCALHOST.into(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServeSection {
    /// First address to try binding.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.interface, self.port)
    }

    /// Address to open in a browser once bound to `port`.
    ///
    /// A wildcard interface is shown as loopback of the same family.
    pub fn browse_url(&self, port: u16) -> String {
        let host = match self.interface {
            IpAddr::V4(ip) if ip.is_unspecified() => Ipv4Addr::LOCALHOST.into(),
            IpAddr::V6(ip) if ip.is_unspecified() => Ipv6Addr::LOCALHOST.into(),
            ip => ip,
        };
        format!("http://{}", SocketAddr::new(host, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_serve_defaults() {
        let serve = test_parse_config("").serve;
        assert_eq!(serve.addr(), "127.0.0.1:5277".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_serve_lan_interface() {
        let serve = test_parse_config("[serve]\ninterface = \"0.0.0.0\"\nport = 8080").serve;
        assert_eq!(serve.addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(serve.browse_url(8081), "http://127.0.0.1:8081");
    }

    #[test]
    fn test_browse_url_ipv6() {
        let serve = test_parse_config("[serve]\ninterface = \"::\"").serve;
        assert_eq!(serve.browse_url(5277), "http://[::1]:5277");

        let serve = test_parse_config("[serve]\ninterface = \"::1\"").serve;
        assert_eq!(serve.browse_url(9000), "http://[::1]:9000");
    }
}
