//! GymBot Bridge
//!
//! Responsibilities:
//! - One-shot CLI that forwards a chat question to the gym service
//! - gRPC client resolving the service at a fixed local registry endpoint
//! - Tagged stdout contract for the backend process that spawns the bridge
//!
//! Layout:
//! - cli: command-line surface
//! - bridge: input acquisition, orchestration, output rendering
//! - client: gRPC channel setup and the single remote operation
//! - error: failure taxonomy

pub mod bridge;
pub mod cli;
pub mod client;
pub mod error;

pub mod generated;



pub use bridge::{Bridge, LOG_PREFIX, RESPONSE_TAG};
pub use cli::run_cli;
pub use client::{ClientConfig, GymClient, QuestionService, ServiceHandle};
pub use error::{BridgeError, FailureKind};
