pub mod completion;
pub mod processor;
pub mod prompt;
pub mod reference;

use thiserror::Error;

/// Failures while talking to an outbound collaborator.
///
/// None of these reach the HTTP caller: the processor degrades every
/// variant to reference-free generation or the fallback responder.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("API credential not configured")]
    MissingCredential,

    #[error("Completion contained no content")]
    EmptyCompletion,
}
