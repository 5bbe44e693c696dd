//! Error types for transaction assembly and submission
//!
//! The builder itself never fails: insertion, merge, and split are pure
//! in-memory sequence operations, and a split whose key is absent falls back
//! to a documented degenerate result instead of raising. Every variant here
//! originates in the submission collaborator and is passed through without
//! wrapping, retry, or added context.

use thiserror::Error;

/// Failures surfaced while submitting an assembled transaction.
#[derive(Error, Debug)]
pub enum TransactionBuilderError {
    /// The network collaborator rejected or failed to deliver the
    /// transaction.
    ///
    /// Forwarded unchanged from the underlying RPC client. Whether a retry
    /// makes sense is the caller's decision; no retry happens here.
    #[error("Transaction submission failed: {0}")]
    Submission(#[from] solana_client::client_error::ClientError),

    /// Signing with the supplied signer handles failed.
    ///
    /// Typical causes are a handle whose pubkey is not a required signer of
    /// the materialized message, or a hardware signer refusing to sign.
    #[error("Signing failed: {0}")]
    Signing(#[from] solana_sdk::signer::SignerError),

    /// Wrapped error from a non-RPC submission collaborator.
    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl TransactionBuilderError {
    /// Check if this error is potentially retryable.
    ///
    /// Returns `true` if retrying the submission might succeed, `false` if
    /// the failure is fatal for the assembled transaction as-is.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Submission(_) => true,
            Self::Signing(_) => false,
            Self::External(_) => false,
        }
    }

    /// Get the error category for metrics and observability.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Submission(_) => "submission",
            Self::Signing(_) => "signing",
            Self::External(_) => "external",
        }
    }
}
