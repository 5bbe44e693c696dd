//! Incremental transaction assembly for Solana clients
//!
//! A [`TransactionBuilder`] collects operation records (instruction, required
//! signers, optional tag) in insertion order, supports merging builders from
//! sub-flows and splitting around a tagged record, and materializes into a
//! single submittable transaction. Submission is delegated to a
//! [`TransactionSender`] collaborator supplied by the caller.

pub mod builder;
pub mod errors;
pub mod options;
pub mod record;
pub mod submit;

pub use builder::TransactionBuilder;
pub use errors::TransactionBuilderError;
pub use options::{SendOptions, TransactionOptions};
pub use record::{BuilderRecord, DynSigner};
pub use submit::TransactionSender;

// Re-export commonly used types
pub use solana_sdk::{instruction::Instruction, pubkey::Pubkey, signature::Signature};
