use crate::errors::{ClientError, ClientResult};
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_sdk::{
    account::Account,
    hash::Hash,
    instruction::InstructionError,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};

/// The remote-ledger surface the client depends on: account fetch,
/// freshness token, submission, settlement status, balance, and the devnet
/// faucet. Implemented for the blocking [`RpcClient`]; tests substitute a
/// recorded fake so flows run without a validator.
pub trait LedgerRpc {
    /// `None` when no account exists at the address.
    fn get_account(&self, address: &Pubkey) -> ClientResult<Option<Account>>;

    fn latest_blockhash(&self) -> ClientResult<Hash>;

    fn send_transaction(&self, transaction: &Transaction) -> ClientResult<Signature>;

    /// `None` while the ledger has not yet seen the signature.
    fn signature_status(
        &self,
        signature: &Signature,
    ) -> ClientResult<Option<Result<(), TransactionError>>>;

    fn balance(&self, address: &Pubkey) -> ClientResult<u64>;

    fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> ClientResult<Signature>;
}

impl LedgerRpc for RpcClient {
    fn get_account(&self, address: &Pubkey) -> ClientResult<Option<Account>> {
        let response = self.get_account_with_commitment(address, self.commitment())?;
        Ok(response.value)
    }

    fn latest_blockhash(&self) -> ClientResult<Hash> {
        Ok(self.get_latest_blockhash()?)
    }

    fn send_transaction(&self, transaction: &Transaction) -> ClientResult<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: false,
            preflight_commitment: Some(self.commitment().commitment),
            encoding: None,
            max_retries: Some(3),
            min_context_slot: None,
        };
        self.send_transaction_with_config(transaction, config)
            .map_err(classify_send_error)
    }

    fn signature_status(
        &self,
        signature: &Signature,
    ) -> ClientResult<Option<Result<(), TransactionError>>> {
        Ok(self.get_signature_status_with_commitment(signature, self.commitment())?)
    }

    fn balance(&self, address: &Pubkey) -> ClientResult<u64> {
        Ok(self.get_balance(address)?)
    }

    fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> ClientResult<Signature> {
        Ok(RpcClient::request_airdrop(self, address, lamports)?)
    }
}

/// Preflight rejections that carry the program's own error code become
/// [`ClientError::ProgramRejected`]; everything else stays transport-level.
fn classify_send_error(err: solana_client::client_error::ClientError) -> ClientError {
    match err.get_transaction_error() {
        Some(TransactionError::InstructionError(_, InstructionError::Custom(code))) => {
            ClientError::ProgramRejected { code }
        }
        _ => ClientError::Network(err),
    }
}
