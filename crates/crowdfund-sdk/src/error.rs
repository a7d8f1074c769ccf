use thiserror::Error;

pub type SdkResult<T> = Result<T, SdkError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error("no valid bump seed exists for the given seeds and program id")]
    DerivationExhausted,

    #[error("seed is {len} bytes, over the {max}-byte limit")]
    SeedTooLong { len: usize, max: usize },

    #[error("field of {len} bytes does not fit a u32 length prefix")]
    FieldTooLong { len: usize },

    #[error("unexpected end of data: wanted {wanted} more bytes, {remaining} remain")]
    UnexpectedEof { wanted: usize, remaining: usize },

    #[error("string field is not valid UTF-8")]
    InvalidUtf8,

    #[error("data does not start with the expected discriminator")]
    WrongDiscriminator,

    #[error("{0} unexpected trailing bytes after a complete payload")]
    TrailingBytes(usize),

    #[error("cannot build a transaction with no instructions")]
    EmptyTransaction,
}
