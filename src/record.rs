//! Operation records held by the transaction builder
//!
//! A record pairs one instruction with the signer handles required to
//! authorize it, plus an optional string tag used for key-based splitting.
//! Records are immutable once inserted into a builder.

use std::fmt;
use std::sync::Arc;

use solana_sdk::{instruction::Instruction, signer::Signer};

/// Shared handle to a signer required by an instruction.
///
/// `Arc` so the same keypair can back multiple records without cloning key
/// material. Duplicate handles across records are expected; deduplication is
/// the consumer's responsibility (see [`crate::TransactionBuilder::signers`]).
pub type DynSigner = Arc<dyn Signer + Send + Sync>;

/// One atomic unit of assembly: an instruction, its required signers, and an
/// optional lookup tag.
///
/// Tags are unique by convention only. Lookups always take the first match
/// in insertion order, so a duplicated tag shadows later occurrences.
#[derive(Clone)]
pub struct BuilderRecord {
    /// Optional tag for later lookup and splitting.
    pub key: Option<String>,

    /// The instruction payload. Never mutated after insertion.
    pub instruction: Instruction,

    /// Ordered signer handles required to authorize this instruction.
    pub signers: Vec<DynSigner>,
}

impl BuilderRecord {
    /// Create a record with no signers and no tag.
    pub fn new(instruction: Instruction) -> Self {
        Self {
            key: None,
            instruction,
            signers: Vec::new(),
        }
    }

    /// Attach the full signer list for this record.
    pub fn with_signers<I>(mut self, signers: I) -> Self
    where
        I: IntoIterator<Item = DynSigner>,
    {
        self.signers = signers.into_iter().collect();
        self
    }

    /// Attach a single additional signer.
    pub fn with_signer(mut self, signer: DynSigner) -> Self {
        self.signers.push(signer);
        self
    }

    /// Attach a lookup tag.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl From<Instruction> for BuilderRecord {
    fn from(instruction: Instruction) -> Self {
        Self::new(instruction)
    }
}

impl fmt::Debug for BuilderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Signer handles are opaque; show their pubkeys only.
        f.debug_struct("BuilderRecord")
            .field("key", &self.key)
            .field("program_id", &self.instruction.program_id)
            .field(
                "signers",
                &self.signers.iter().map(|s| s.pubkey()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
