//! Chat bridge entry point.
//!
//! The backend spawns this binary once per chat message. Exit status is not
//! part of the integration contract; the backend detects failure by the
//! absence of the tagged response line on stdout. Errors are logged to
//! stderr and the process terminates normally either way.

use gymbot_bridge::LOG_PREFIX;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = gymbot_bridge::run_cli().await {
        eprintln!("{LOG_PREFIX}[ERROR] {e}");
        eprintln!("{:?}", anyhow::Error::new(e));
    }
}
