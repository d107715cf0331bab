//! gRPC client for the gym question-answering service.
//!
//! Connection handling is strictly one-shot: a channel is established per
//! run, used for a single `Ask` call and dropped with the process. There is
//! no pooling, retry, or reconnect.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::error::BridgeError;
use crate::generated::gym_service_client::GymServiceClient;
use crate::generated::AskRequest;

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Registry host the service is resolved against
    pub registry_host: String,

    /// Port the registry listens on
    pub service_port: u16,

    /// Connection deadline; `None` waits indefinitely
    pub connect_timeout: Option<Duration>,

    /// Per-request deadline; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            registry_host: "localhost".to_string(),
            service_port: 1099,
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Endpoint URL the channel connects to
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.registry_host, self.service_port)
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GymClient(endpoint={}, timeout={:?})",
            self.endpoint(),
            self.request_timeout
        )
    }
}

/// The single remote operation the bridge forwards to.
///
/// `ServiceHandle` is the production implementation; tests substitute
/// scripted services behind the same seam.
#[async_trait]
pub trait QuestionService {
    /// Ask one question, waiting until the service answers or fails.
    async fn ask(&mut self, question: &str) -> Result<String, BridgeError>;
}

/// Gym service gRPC client.
#[derive(Debug, Clone)]
pub struct GymClient {
    config: ClientConfig,
}

impl GymClient {
    /// Create a new client for the given registry endpoint, with the
    /// default unbounded deadlines.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::with_config(ClientConfig {
            registry_host: host.into(),
            service_port: port,
            ..ClientConfig::default()
        })
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve the service, yielding a callable handle.
    ///
    /// The channel is connected eagerly so an unreachable registry surfaces
    /// here rather than inside the first call.
    pub async fn resolve(&self) -> Result<ServiceHandle, BridgeError> {
        let endpoint = self.config.endpoint();
        info!("Resolving gym service at {}", endpoint);

        let mut builder = Endpoint::from_shared(endpoint)
            .map_err(|e| BridgeError::Resolution(e.to_string()))?;
        if let Some(timeout) = self.config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let channel = builder
            .connect()
            .await
            .map_err(|e| BridgeError::Resolution(e.to_string()))?;

        debug!("Channel established");
        Ok(ServiceHandle {
            client: GymServiceClient::new(channel),
        })
    }
}

/// A resolved, connected handle to the remote service.
#[derive(Debug, Clone)]
pub struct ServiceHandle {
    client: GymServiceClient<Channel>,
}

#[async_trait]
impl QuestionService for ServiceHandle {
    async fn ask(&mut self, question: &str) -> Result<String, BridgeError> {
        let request = AskRequest {
            question: question.to_string(),
        };

        match self.client.ask(request).await {
            Ok(response) => Ok(response.into_inner().answer),
            Err(status) => Err(BridgeError::Invocation(status.to_string())),
        }
    }
}
