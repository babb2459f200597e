//! Doorman web server lifecycle
//!
//! Binds the listener, assembles the router, and serves until shutdown.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main Doorman web server
pub struct DoormanServer {
    config: WebConfig,
    state: AppState,
}

impl DoormanServer {
    /// Create a server with a fresh (empty) member registry
    pub fn new(config: WebConfig) -> Self {
        let state = AppState::new(config.clone());
        Self { config, state }
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Check the parts of the configuration that can only fail at startup
    fn validate_config(&self) -> WebResult<()> {
        if let Some(static_dir) = &self.config.static_dir {
            if !std::path::Path::new(static_dir).is_dir() {
                return Err(WebError::Config(format!(
                    "Static directory does not exist: {}",
                    static_dir
                )));
            }
        }
        Ok(())
    }

    /// Start the web server and block until it shuts down
    pub async fn start(self) -> WebResult<()> {
        self.validate_config()?;

        let address = self.config.address();
        info!("🚪 Doorman starting");
        info!("   portal pages: /portal/{{manager,vip,member}}?userId=...");
        info!("   dev mode: {}", self.config.dev_mode);

        let app = create_app(self.state);

        let listener = TcpListener::bind(&address).await?;
        info!("✅ Listening on http://{}", address);

        axum::serve(listener, app).await.map_err(|e| {
            error!("❌ Server stopped with an error: {}", e);
            WebError::Server(e)
        })
    }
}

/// Builder for DoormanServer
pub struct DoormanServerBuilder {
    config: WebConfig,
}

impl DoormanServerBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Start from an already loaded configuration
    pub fn with_config(config: WebConfig) -> Self {
        Self { config }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable development mode
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.config.dev_mode = dev_mode;
        self
    }

    /// Set the static files directory, keeping the current one when `None`
    pub fn maybe_static_dir(mut self, static_dir: Option<String>) -> Self {
        if static_dir.is_some() {
            self.config.static_dir = static_dir;
        }
        self
    }

    /// Build the server
    pub fn build(self) -> DoormanServer {
        DoormanServer::new(self.config)
    }
}

impl Default for DoormanServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a server configured from the environment
pub async fn start_server() -> WebResult<()> {
    let config = WebConfig::from_env();
    DoormanServer::new(config).start().await
}

/// Start a local development server
pub async fn start_dev_server(port: Option<u16>) -> WebResult<()> {
    DoormanServerBuilder::new()
        .host("127.0.0.1")
        .port(port.unwrap_or(8080))
        .dev_mode(true)
        .build()
        .start()
        .await
}
