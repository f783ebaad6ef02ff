//! Runtime configuration for the receipt processor.
//!
//! The only setting is the address the HTTP server listens on. It comes from `--host` and
//! `--port`, falling back to `RECEIPT_PROCESSOR_HOST` and `RECEIPT_PROCESSOR_PORT`.

use crate::args::ServeArgs;
use crate::Result;
use anyhow::Context;
use std::net::SocketAddr;
use tracing::debug;

/// The `Config` object holds the resolved settings that the server is started with.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Config {
    addr: SocketAddr,
}

impl Config {
    /// Creates a `Config` that listens on `addr`.
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Resolves the host and port from `args`. The host may be an IP address or a name such as
    /// `localhost`; the first address it resolves to is used.
    ///
    /// # Errors
    /// - Returns an error if the host cannot be resolved to any address.
    pub async fn from_args(args: &ServeArgs) -> Result<Self> {
        let host = args.host();
        let port = args.port();
        let addr = tokio::net::lookup_host((host, port))
            .await
            .with_context(|| format!("Unable to resolve the listening host '{host}'"))?
            .next()
            .with_context(|| format!("The listening host '{host}' did not resolve to an address"))?;
        debug!("Resolved listening address {host}:{port} to {addr}");
        Ok(Self::new(addr))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    fn serve_args(host: &str, port: u16) -> ServeArgs {
        let port = port.to_string();
        ServeArgs::try_parse_from(["serve", "--host", host, "--port", port.as_str()]).unwrap()
    }

    #[tokio::test]
    async fn test_from_args_ipv4() {
        let config = Config::from_args(&serve_args("127.0.0.1", 9000))
            .await
            .unwrap();
        assert_eq!(
            config.addr(),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 9000)
        );
    }

    #[tokio::test]
    async fn test_from_args_ipv6() {
        let config = Config::from_args(&serve_args("::1", 8080)).await.unwrap();
        assert_eq!(
            config.addr(),
            SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 8080)
        );
    }

    #[tokio::test]
    async fn test_from_args_unspecified() {
        let config = Config::from_args(&serve_args("0.0.0.0", 0))
            .await
            .unwrap();
        assert!(config.addr().ip().is_unspecified());
        assert_eq!(config.addr().port(), 0);
    }
}
