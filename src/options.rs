//! Configuration blobs stored and forwarded by the builder
//!
//! The builder never interprets these values. [`TransactionOptions`] is
//! applied verbatim during materialization and [`SendOptions`] is forwarded
//! verbatim to the submission collaborator.

use serde::{Deserialize, Serialize};
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_sdk::{commitment_config::CommitmentLevel, hash::Hash, pubkey::Pubkey};

/// Options used when materializing a transaction.
///
/// Both fields are optional. A missing fee payer lets the first required
/// signer of the compiled message pay; a missing blockhash leaves the
/// placeholder in place for the submission collaborator to stamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOptions {
    /// Account that pays the transaction fee.
    pub fee_payer: Option<Pubkey>,

    /// Recent blockhash to stamp into the message.
    pub recent_blockhash: Option<Hash>,
}

impl TransactionOptions {
    /// Options with only a fee payer set.
    pub fn with_fee_payer(fee_payer: Pubkey) -> Self {
        Self {
            fee_payer: Some(fee_payer),
            recent_blockhash: None,
        }
    }
}

/// Options forwarded to the submission collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOptions {
    /// Skip the preflight transaction checks.
    pub skip_preflight: bool,

    /// Commitment level to use for preflight.
    pub preflight_commitment: Option<CommitmentLevel>,

    /// Maximum number of times the RPC node should retry sending to the
    /// leader. This is the node's own retry knob, not a client-side retry.
    pub max_retries: Option<usize>,
}

impl SendOptions {
    /// Convert into the RPC client's send configuration.
    pub fn to_rpc_config(&self) -> RpcSendTransactionConfig {
        RpcSendTransactionConfig {
            skip_preflight: self.skip_preflight,
            preflight_commitment: self.preflight_commitment,
            max_retries: self.max_retries,
            ..RpcSendTransactionConfig::default()
        }
    }
}
