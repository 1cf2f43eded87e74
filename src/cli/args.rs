//! CLI argument definitions using clap
//!
//! Commands:
//! - orderlink serve [--port <port>] [--api-key <key>] [--dialect <dialect>] ...
//! - orderlink extract --dialect <dialect> <query>
//! - orderlink orders [--data <path>]
//!
//! Every `serve` option falls back to an environment variable.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::http_server::{HttpServerConfig, ServiceConfig};
use crate::rest_api::Dialect;

/// orderlink - Order-status lookups for contact-center widgets
#[derive(Parser, Debug)]
#[command(name = "orderlink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service
    Serve(ServeArgs),

    /// Run the query extractor on one token and print the order number
    Extract {
        /// Grammar to parse the token with
        #[arg(long, value_enum, default_value_t = Dialect::Legacy)]
        dialect: Dialect,

        /// Raw `q` token as the widget would send it
        query: String,
    },

    /// Print the order dataset as JSON
    Orders {
        /// JSON dataset file (default: built-in sample orders)
        #[arg(long, env = "ORDER_DATA")]
        data: Option<PathBuf>,

        /// Record view to print
        #[arg(long, value_enum, default_value_t = Dialect::Legacy)]
        dialect: Dialect,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Shared API key callers must present
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Dialect served at /rest/zoomllv
    #[arg(long, value_enum, env = "ORDER_DIALECT", default_value_t = Dialect::Legacy)]
    pub dialect: Dialect,

    /// JSON dataset file (default: built-in sample orders)
    #[arg(long, env = "ORDER_DATA")]
    pub data: Option<PathBuf>,

    /// Allowed CORS origin; repeat for several. None allows any origin.
    #[arg(long = "cors-origin", env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Directory served for unmatched paths
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Split into transport and service configuration
    pub fn into_configs(self) -> (HttpServerConfig, ServiceConfig) {
        let http = HttpServerConfig {
            host: self.host,
            port: self.port,
            cors_origins: self.cors_origins,
            static_dir: self.static_dir,
        };
        let service = ServiceConfig {
            api_key: self.api_key,
            dialect: self.dialect,
            data_path: self.data,
        };
        (http, service)
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "orderlink",
            "serve",
            "--port",
            "8080",
            "--api-key",
            "k",
            "--dialect",
            "current",
            "--cors-origin",
            "https://a.example,https://b.example",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let (http, service) = args.into_configs();
        assert_eq!(http.port, 8080);
        assert_eq!(http.cors_origins.len(), 2);
        assert_eq!(service.api_key.as_deref(), Some("k"));
        assert_eq!(service.dialect, Dialect::Current);
    }

    #[test]
    fn test_dialect_aliases() {
        let cli = Cli::try_parse_from(["orderlink", "extract", "--dialect", "v2", "{}"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Extract { dialect: Dialect::Current, .. }
        ));
    }

    #[test]
    fn test_unknown_dialect_rejected() {
        assert!(Cli::try_parse_from(["orderlink", "extract", "--dialect", "v3", "{}"]).is_err());
    }
}
