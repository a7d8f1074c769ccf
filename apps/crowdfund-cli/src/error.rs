use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Client(#[from] crowdfund_client::ClientError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
