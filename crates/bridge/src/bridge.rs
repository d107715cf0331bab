//! Chat bridge between the command line and the gym service.
//!
//! One question in, one answer out. The backend spawns the bridge as a
//! subprocess and greps stdout for the `CHATBOT_RESPONSE: ` line, so every
//! line rendered here is interface, not logging. The formats must stay
//! byte-stable.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::client::{ClientConfig, GymClient, QuestionService};
use crate::error::BridgeError;

/// Tag prefixing every human-readable line on stdout.
pub const LOG_PREFIX: &str = "[GYMBOT] ";

/// Prefix of the machine-parseable reply line. The downstream parser
/// matches on this exact text; never change it.
pub const RESPONSE_TAG: &str = "CHATBOT_RESPONSE: ";

/// One-shot bridge: acquires a question, resolves the remote service and
/// renders the reply.
#[derive(Debug, Clone)]
pub struct Bridge {
    config: ClientConfig,
}

impl Bridge {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Run the full bridge sequence against real stdin/stdout.
    ///
    /// Exactly one query is produced and exactly one response is requested;
    /// any failure short-circuits to the caller without a retry.
    pub async fn run(&self, args: &[String]) -> Result<(), BridgeError> {
        let mut out = io::stdout();

        log_arguments(&mut out, args)?;

        // The stdin lock lives only inside this block; it is released
        // before any network activity starts, read failure included.
        let query = {
            let stdin = io::stdin();
            acquire_query(args, stdin.lock(), &mut out)?
        };

        let client = GymClient::with_config(self.config.clone());
        let mut service = client.resolve().await?;

        forward(&query, &mut service, &mut out).await
    }
}

/// Echo the invocation arguments before anything else happens.
pub fn log_arguments<W: Write>(out: &mut W, args: &[String]) -> Result<(), BridgeError> {
    writeln!(out, "{LOG_PREFIX}[DEBUG] Received {} argument(s)", args.len())?;
    if !args.is_empty() {
        writeln!(
            out,
            "{LOG_PREFIX}[DEBUG] Processing input: \"{}\"",
            args.join(" ")
        )?;
    }
    Ok(())
}

/// Produce the query: joined arguments when present, otherwise one prompted
/// line from `input`.
pub fn acquire_query<R, W>(args: &[String], input: R, out: &mut W) -> Result<String, BridgeError>
where
    R: BufRead,
    W: Write,
{
    if args.is_empty() {
        prompt_for_query(input, out)
    } else {
        Ok(args.join(" "))
    }
}

/// Prompt on `out` and read exactly one line from `input`.
///
/// The trailing line terminator is stripped; nothing else is trimmed.
fn prompt_for_query<R, W>(mut input: R, out: &mut W) -> Result<String, BridgeError>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{LOG_PREFIX}[INPUT] Type your question: ")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(BridgeError::Io(
            "standard input closed before a question was entered".to_string(),
        ));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Send the query to a resolved service and render the reply.
///
/// On failure nothing after the query echo is written; the missing tagged
/// line is what the downstream consumer treats as the failure signal.
pub async fn forward<S, W>(query: &str, service: &mut S, out: &mut W) -> Result<(), BridgeError>
where
    S: QuestionService + ?Sized,
    W: Write,
{
    writeln!(out, "{LOG_PREFIX}[QUERY] Sending to server: \"{query}\"")?;
    out.flush()?;

    info!("Forwarding query ({} bytes)", query.len());
    let response = service.ask(query).await?;

    writeln!(out, "{LOG_PREFIX}[RESPONSE] {response}")?;
    writeln!(out, "{RESPONSE_TAG}{response}")?;
    out.flush()?;
    Ok(())
}
