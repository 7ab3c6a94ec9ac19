// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 18082;
pub const DEFAULT_PATH: &str = "/json_rpc";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported protocol '{0}', expected 'http' or 'https'")]
    UnsupportedProtocol(String),
    #[error("Host cannot be empty")]
    EmptyHost,
}

/// Scheme used to reach the wallet RPC server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(ConfigError::UnsupportedProtocol(s.to_string())),
        }
    }
}

/// Global configuration for a wallet session.
///
/// Holds where the `monero-wallet-rpc` server lives and how the terminal
/// should present results. It is typically constructed from CLI arguments,
/// with environment variables as fallback.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme of the RPC endpoint.
    pub protocol: Protocol,

    /// Host name or IP address of the RPC server.
    pub host: String,

    /// TCP port of the RPC server. `monero-wallet-rpc` has no fixed default,
    /// 18082 is the conventional choice.
    pub port: u16,

    /// Request path of the JSON-RPC endpoint, always starting with `/`.
    pub path: String,

    /// Upper bound for a single HTTP round trip.
    ///
    /// Transfers and wallet creation can take a while on slow hardware, so
    /// keep this generous.
    pub timeout: Duration,

    /// Toggles the display of the startup banner.
    pub no_banner: bool,

    /// Controls the visual density of the terminal output.
    ///
    /// # Levels
    /// * **0** (Default): Full UI, including colors, spinners and trees.
    /// * **1**: Reduced styling.
    /// * **2**: Raw mode. Only bare values are printed, suitable for piping.
    pub quiet: u8,

    /// Masks addresses, keys and transaction identifiers in the output.
    ///
    /// Use this when sharing screenshots or logs publicly.
    pub redact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocol: Protocol::Http,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            no_banner: false,
            quiet: 0,
            redact: false,
        }
    }
}

impl Config {
    /// Builds a configuration for the given server, keeping UI defaults.
    pub fn for_server(
        protocol: Protocol,
        host: &str,
        port: u16,
        path: &str,
    ) -> Result<Self, ConfigError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        Ok(Self {
            protocol,
            host: host.to_string(),
            port,
            path: normalize_path(path),
            ..Self::default()
        })
    }

    /// Full URL of the JSON-RPC endpoint.
    ///
    /// # Examples
    /// ```
    /// use monerowallet_common::config::Config;
    ///
    /// assert_eq!(Config::default().endpoint(), "http://127.0.0.1:18082/json_rpc");
    /// ```
    pub fn endpoint(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol, self.host, self.port, self.path
        )
    }
}

/// Ensures the request path starts with a single `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return DEFAULT_PATH.to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_points_at_local_wallet() {
        let cfg = Config::default();
        assert_eq!(cfg.endpoint(), "http://127.0.0.1:18082/json_rpc");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn protocol_parses_case_insensitively() {
        assert_eq!("HTTPS".parse::<Protocol>(), Ok(Protocol::Https));
        assert_eq!(" http ".parse::<Protocol>(), Ok(Protocol::Http));
        assert!("ftp".parse::<Protocol>().is_err());
    }

    #[test]
    fn for_server_normalizes_path() {
        let cfg = Config::for_server(Protocol::Https, "node.local", 28088, "json_rpc").unwrap();
        assert_eq!(cfg.endpoint(), "https://node.local:28088/json_rpc");
    }

    #[test]
    fn for_server_rejects_empty_host() {
        let err = Config::for_server(Protocol::Http, "  ", 18082, "/json_rpc").unwrap_err();
        assert_eq!(err, ConfigError::EmptyHost);
    }

    #[test]
    fn empty_path_falls_back_to_default() {
        assert_eq!(normalize_path(""), "/json_rpc");
        assert_eq!(normalize_path("/rpc"), "/rpc");
    }
}
