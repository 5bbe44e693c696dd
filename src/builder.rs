//! Core transaction assembly
//!
//! [`TransactionBuilder`] owns an ordered sequence of [`BuilderRecord`]s.
//! Insertion order is the only ordering; it becomes execution order when the
//! sequence is materialized. Assembly is append/prepend-only: existing
//! records are never mutated in place, and materialization is a projection
//! that leaves the sequence untouched, so one builder can produce any number
//! of independent transactions.
//!
//! The builder is single-writer: it holds no locks and is not meant for
//! concurrent mutation from multiple call sites.

use solana_sdk::{instruction::Instruction, signature::Signature, transaction::Transaction};
use tracing::debug;

use crate::errors::TransactionBuilderError;
use crate::options::{SendOptions, TransactionOptions};
use crate::record::{BuilderRecord, DynSigner};
use crate::submit::TransactionSender;

/// Ordered collection of operation records that assembles into a single
/// submittable transaction.
///
/// Mutating methods return `&mut Self` so assembly chains at the call site:
///
/// ```rust
/// use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
/// use tx_builder::{BuilderRecord, TransactionBuilder};
///
/// let program_id = Pubkey::new_unique();
/// let mut builder = TransactionBuilder::default();
/// builder
///     .append(Instruction::new_with_bytes(program_id, &[1], vec![]))
///     .append(BuilderRecord::new(Instruction::new_with_bytes(program_id, &[2], vec![])).with_key("swap"))
///     .prepend(Instruction::new_with_bytes(program_id, &[0], vec![]));
///
/// assert_eq!(builder.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    /// The list of all instructions and their respective signers.
    records: Vec<BuilderRecord>,

    /// Options used when building the transaction.
    options: TransactionOptions,
}

impl TransactionBuilder {
    /// Create an empty builder with the given options.
    pub fn new(options: TransactionOptions) -> Self {
        Self {
            records: Vec::new(),
            options,
        }
    }

    /// Insert a record at position 0, shifting all existing records right.
    pub fn prepend(&mut self, record: impl Into<BuilderRecord>) -> &mut Self {
        self.records.insert(0, record.into());
        self
    }

    /// Insert a record at the end.
    pub fn append(&mut self, record: impl Into<BuilderRecord>) -> &mut Self {
        self.records.push(record.into());
        self
    }

    /// Alias of [`append`](Self::append).
    pub fn add(&mut self, record: impl Into<BuilderRecord>) -> &mut Self {
        self.append(record)
    }

    /// Append an ordered sequence of already-built records, preserving their
    /// relative order.
    pub fn add_records<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = BuilderRecord>,
    {
        self.records.extend(records);
        self
    }

    /// Append all of `other`'s records after this builder's existing
    /// records, preserving each operand's internal order.
    ///
    /// `other` is read, not consumed; it remains independently usable.
    pub fn merge(&mut self, other: &TransactionBuilder) -> &mut Self {
        self.add_records(other.records.iter().cloned())
    }

    /// Split around the first record whose key equals `key`.
    ///
    /// Both returned builders inherit this builder's options. When the key
    /// is found at position `i`, the boundary is `i + 1` if `include` (the
    /// matched record lands on the first side) and `i` otherwise: the first
    /// builder receives the records before the boundary, the second the
    /// records from the boundary onward. When the key is absent the first
    /// builder is a full copy and the second is empty.
    pub fn split_using_key(
        &self,
        key: &str,
        include: bool,
    ) -> (TransactionBuilder, TransactionBuilder) {
        let mut first = TransactionBuilder::new(self.options.clone());
        let mut second = TransactionBuilder::new(self.options.clone());

        match self
            .records
            .iter()
            .position(|record| record.key.as_deref() == Some(key))
        {
            Some(position) => {
                let boundary = if include { position + 1 } else { position };
                first.add_records(self.records[..boundary].iter().cloned());
                second.add_records(self.records[boundary..].iter().cloned());
            }
            None => {
                debug!(key, records = self.records.len(), "split key not found");
                first.merge(self);
            }
        }

        (first, second)
    }

    /// Split with the matched record on the second side.
    pub fn split_before_key(&self, key: &str) -> (TransactionBuilder, TransactionBuilder) {
        self.split_using_key(key, false)
    }

    /// Split with the matched record on the first side.
    pub fn split_after_key(&self, key: &str) -> (TransactionBuilder, TransactionBuilder) {
        self.split_using_key(key, true)
    }

    /// The ordered record sequence.
    pub fn records(&self) -> &[BuilderRecord] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the builder holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Project the sequence to just the instruction payloads, same order.
    pub fn instructions(&self) -> Vec<Instruction> {
        self.records
            .iter()
            .map(|record| record.instruction.clone())
            .collect()
    }

    /// Flatten all records' signer lists in record order.
    ///
    /// Duplicates are preserved on purpose: relative order of first
    /// occurrence may matter to the consumer, so deduplication belongs to
    /// whatever accepts the final signer list.
    pub fn signers(&self) -> Vec<DynSigner> {
        self.records
            .iter()
            .flat_map(|record| record.signers.iter().cloned())
            .collect()
    }

    /// Replace the options blob.
    pub fn set_transaction_options(&mut self, options: TransactionOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// The options blob used when building the transaction.
    pub fn transaction_options(&self) -> &TransactionOptions {
        &self.options
    }

    /// Materialize a transaction from the current options, with the
    /// instructions appended in [`instructions`](Self::instructions) order.
    ///
    /// Pure projection: calling this any number of times yields independent
    /// transactions and leaves the builder untouched.
    pub fn to_transaction(&self) -> Transaction {
        let instructions = self.instructions();
        let mut tx = Transaction::new_with_payer(&instructions, self.options.fee_payer.as_ref());
        if let Some(recent_blockhash) = self.options.recent_blockhash {
            tx.message.recent_blockhash = recent_blockhash;
        }
        tx
    }

    /// Materialize and hand off to the submission collaborator.
    ///
    /// The signer set is this builder's flattened signers followed by
    /// `extra_signers`, order preserved. The collaborator's failure is
    /// forwarded unchanged; there is no retry, validation, or backoff here.
    pub async fn send_transaction<C>(
        &self,
        connection: &C,
        extra_signers: &[DynSigner],
        send_options: &SendOptions,
    ) -> Result<Signature, TransactionBuilderError>
    where
        C: TransactionSender + ?Sized + Sync,
    {
        let mut signers = self.signers();
        signers.extend(extra_signers.iter().cloned());

        debug!(
            records = self.records.len(),
            signers = signers.len(),
            "submitting assembled transaction"
        );

        connection
            .send_transaction(self.to_transaction(), &signers, send_options)
            .await
    }
}
