use crowdfund_sdk::SdkError;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure. Retryable by re-running the whole operation
    /// (freshness tokens are fetched per attempt and never reused).
    #[error("network error: {0}")]
    Network(#[from] solana_client::client_error::ClientError),

    #[error("malformed key file: {0}")]
    MalformedKey(String),

    #[error("address derivation exhausted the bump space")]
    DerivationExhausted,

    #[error("serialization error: {0}")]
    Serialization(SdkError),

    #[error("a required signer is unavailable: {0}")]
    MissingSigner(String),

    /// The program rejected the transaction; the code maps to the program's
    /// own error table (6000 unauthorized, 6001 insufficient funds, ...).
    /// Not retryable without a state change.
    #[error("program rejected the transaction with code {code}")]
    ProgramRejected { code: u32 },

    /// Ambiguous outcome: the transaction may or may not have landed.
    /// Re-classify on-chain state before even considering a resubmit.
    #[error("transaction {signature} unconfirmed after {attempts} status checks; outcome unknown")]
    ConfirmationTimeout {
        signature: Signature,
        attempts: usize,
    },

    /// A previous create attempt died between allocation and program
    /// initialization. Resubmitting would trip the program's re-init
    /// checks; this needs operator intervention (a different name).
    #[error("account {address} is partially initialized ({detail})")]
    PartiallyInitialized { address: Pubkey, detail: String },

    /// The transaction settled with a non-program failure.
    #[error("transaction failed on-chain: {0}")]
    TransactionFailed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SdkError> for ClientError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::DerivationExhausted => ClientError::DerivationExhausted,
            other => ClientError::Serialization(other),
        }
    }
}
