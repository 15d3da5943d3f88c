use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

/// Placeholder image and frame metadata settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FrameConfig {
    pub image_base_url: String,
    pub image_width: u32,
    pub image_height: u32,
    pub aspect_ratio: String,
    pub text_color: String,
    pub default_color: String,
    pub default_text: String,
    pub input_placeholder: String,
}

/// Arweave client settings. These end up in the upload page's inline script,
/// the server never talks to the network itself.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub timeout_ms: u64,
    pub gateway_url: String,
    pub client_script_url: String,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub web: WebConfig,
    pub frame: FrameConfig,
    pub storage: StorageConfig,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl AppConfig {
    pub fn new(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config_builder = Config::builder();

        if let Some(config_path) = &args.config {
            config_builder = config_builder.add_source(File::from(config_path.as_path()));
        } else {
            let default_locations = vec![
                "config.toml",
                "config/config.toml",
                "/etc/arweave-frame/config.toml",
            ];

            for location in default_locations {
                if Path::new(location).exists() {
                    config_builder =
                        config_builder.add_source(File::new(location, config::FileFormat::Toml));
                    break;
                }
            }
        }

        // FRAME__WEB__PORT=8080 and friends
        config_builder = config_builder.add_source(
            Environment::with_prefix("FRAME")
                .prefix_separator("__")
                .separator("__"),
        );

        let mut config: AppConfig = config_builder.build()?.try_deserialize()?;

        if let Some(host) = &args.host {
            config.web.host = host.clone();
        }
        if let Some(port) = args.port {
            config.web.port = port;
        }

        Ok(config)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            image_base_url: "https://placehold.co".to_string(),
            image_width: 1920,
            image_height: 1005,
            aspect_ratio: "1.91:1".to_string(),
            text_color: "white".to_string(),
            default_color: "white".to_string(),
            default_text: "Hello World".to_string(),
            input_placeholder: "Enter a message".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            host: "arweave.net".to_string(),
            port: 443,
            protocol: "https".to_string(),
            timeout_ms: 3_000_000,
            gateway_url: "https://arweave.net".to_string(),
            client_script_url: "https://unpkg.com/arweave/bundles/web.bundle.min.js".to_string(),
        }
    }
}
