//! Submission collaborator seam
//!
//! [`TransactionSender`] is the narrow contract the builder depends on for
//! network submission: accept a materialized transaction, an ordered signer
//! list, and send options, and return a signature or fail. The builder never
//! touches a network client's full surface.
//!
//! The implementation for the nonblocking [`RpcClient`] signs with the
//! supplied handles and submits with the forwarded config, fetching a recent
//! blockhash only when the materialized transaction does not already carry
//! one.

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{hash::Hash, signature::Signature, signer::Signer, transaction::Transaction};
use tracing::{debug, info};

use crate::errors::TransactionBuilderError;
use crate::options::SendOptions;
use crate::record::DynSigner;

/// Accepts a materialized transaction for network submission.
///
/// Implementations own all fallible I/O. Failures are surfaced as
/// [`TransactionBuilderError`] and forwarded by the builder without retry or
/// added context.
#[async_trait]
pub trait TransactionSender {
    /// Sign as needed and submit, returning the submission signature.
    async fn send_transaction(
        &self,
        transaction: Transaction,
        signers: &[DynSigner],
        options: &SendOptions,
    ) -> Result<Signature, TransactionBuilderError>;
}

#[async_trait]
impl TransactionSender for RpcClient {
    async fn send_transaction(
        &self,
        mut transaction: Transaction,
        signers: &[DynSigner],
        options: &SendOptions,
    ) -> Result<Signature, TransactionBuilderError> {
        let recent_blockhash = if transaction.message.recent_blockhash == Hash::default() {
            debug!("no blockhash stamped on transaction, fetching latest");
            self.get_latest_blockhash().await?
        } else {
            transaction.message.recent_blockhash
        };

        // Duplicate handles are tolerated: re-signing the same slot is
        // idempotent, so the flattened list needs no deduplication here.
        // Scoped so the non-`Send` borrows are dropped before the await below.
        {
            let handles: Vec<&dyn Signer> = signers
                .iter()
                .map(|signer| signer.as_ref() as &dyn Signer)
                .collect();
            transaction.try_sign(&handles, recent_blockhash)?;
        }

        let signature = self
            .send_transaction_with_config(&transaction, options.to_rpc_config())
            .await?;

        info!(%signature, signers = signers.len(), "transaction submitted");
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TransactionBuilder;
    use crate::options::TransactionOptions;
    use crate::record::BuilderRecord;
    use solana_client::client_error::{ClientError, ClientErrorKind};
    use solana_sdk::{instruction::Instruction, pubkey::Pubkey, signature::Keypair};
    use std::sync::{Arc, Mutex};

    /// Collaborator double that records every call it receives.
    struct MockConnection {
        fail_with: Option<String>,
        calls: Mutex<Vec<(Transaction, Vec<Pubkey>, SendOptions)>>,
    }

    impl MockConnection {
        fn new() -> Self {
            Self {
                fail_with: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TransactionSender for MockConnection {
        async fn send_transaction(
            &self,
            transaction: Transaction,
            signers: &[DynSigner],
            options: &SendOptions,
        ) -> Result<Signature, TransactionBuilderError> {
            let signer_pubkeys = signers.iter().map(|s| s.pubkey()).collect();
            self.calls
                .lock()
                .unwrap()
                .push((transaction, signer_pubkeys, options.clone()));

            if let Some(message) = &self.fail_with {
                return Err(TransactionBuilderError::Submission(ClientError::from(
                    ClientErrorKind::Custom(message.clone()),
                )));
            }
            Ok(Signature::default())
        }
    }

    fn ix(program_id: Pubkey, data: &[u8]) -> Instruction {
        Instruction::new_with_bytes(program_id, data, vec![])
    }

    #[tokio::test]
    async fn test_builder_signers_precede_extras() {
        let program_id = Pubkey::new_unique();
        let record_signer: DynSigner = Arc::new(Keypair::new());
        let extra_signer: DynSigner = Arc::new(Keypair::new());

        let mut builder = TransactionBuilder::default();
        builder.append(
            BuilderRecord::new(ix(program_id, &[1])).with_signer(record_signer.clone()),
        );

        let connection = MockConnection::new();
        builder
            .send_transaction(
                &connection,
                &[extra_signer.clone()],
                &SendOptions::default(),
            )
            .await
            .unwrap();

        let calls = connection.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].1,
            vec![record_signer.pubkey(), extra_signer.pubkey()]
        );
    }

    #[tokio::test]
    async fn test_send_options_forwarded_verbatim() {
        let program_id = Pubkey::new_unique();
        let mut builder = TransactionBuilder::default();
        builder.append(ix(program_id, &[1]));

        let options = SendOptions {
            skip_preflight: true,
            preflight_commitment: None,
            max_retries: Some(7),
        };

        let connection = MockConnection::new();
        builder
            .send_transaction(&connection, &[], &options)
            .await
            .unwrap();

        let calls = connection.calls.lock().unwrap();
        assert_eq!(calls[0].2, options);
    }

    #[tokio::test]
    async fn test_collaborator_transaction_matches_materialization() {
        let program_id = Pubkey::new_unique();
        let fee_payer = Keypair::new();

        let mut builder =
            TransactionBuilder::new(TransactionOptions::with_fee_payer(fee_payer.pubkey()));
        builder.append(ix(program_id, &[1])).append(ix(program_id, &[2]));

        let connection = MockConnection::new();
        builder
            .send_transaction(&connection, &[], &SendOptions::default())
            .await
            .unwrap();

        let calls = connection.calls.lock().unwrap();
        assert_eq!(calls[0].0.message, builder.to_transaction().message);
    }

    #[tokio::test]
    async fn test_collaborator_failure_passes_through() {
        let program_id = Pubkey::new_unique();
        let mut builder = TransactionBuilder::default();
        builder.append(ix(program_id, &[1]));

        let connection = MockConnection::failing("node unavailable");
        let err = builder
            .send_transaction(&connection, &[], &SendOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TransactionBuilderError::Submission(_)));
        assert!(err.to_string().contains("node unavailable"));
    }
}
