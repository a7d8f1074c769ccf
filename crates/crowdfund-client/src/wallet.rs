use crate::errors::{ClientError, ClientResult};
use serde::Deserialize;
use solana_sdk::signature::Keypair;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

const DEFAULT_WALLET_PATH: &str = "wallet.json";
const KEYPAIR_LEN: usize = 64;

/// Wallet-file format with base58 key material. The public key field is
/// informational; only the private key is decoded.
#[derive(Deserialize)]
struct WalletData {
    #[serde(rename = "privateKey")]
    private_key: String,
}

/// Load a signing keypair from `path`, or generate and persist a fresh one
/// when no path is given.
///
/// Accepted on-disk formats: a JSON object carrying a base58 `privateKey`,
/// a bare JSON array of 64 bytes, or a bare base58 line. Key material never
/// leaves the returned [`Keypair`] and is never logged.
pub fn load_or_create(path: Option<&Path>) -> ClientResult<Keypair> {
    match path {
        Some(path) => load(path),
        None => Ok(generate()),
    }
}

fn load(path: &Path) -> ClientResult<Keypair> {
    let data = fs::read_to_string(path)
        .map_err(|e| ClientError::MalformedKey(format!("{}: {e}", path.display())))?;

    if let Ok(wallet) = serde_json::from_str::<WalletData>(&data) {
        let bytes = bs58::decode(wallet.private_key.trim())
            .into_vec()
            .map_err(|e| ClientError::MalformedKey(format!("invalid base58 private key: {e}")))?;
        return keypair_from_bytes(&bytes);
    }

    if let Ok(bytes) = serde_json::from_str::<Vec<u8>>(&data) {
        return keypair_from_bytes(&bytes);
    }

    if let Ok(bytes) = bs58::decode(data.trim()).into_vec() {
        if bytes.len() == KEYPAIR_LEN {
            return keypair_from_bytes(&bytes);
        }
    }

    Err(ClientError::MalformedKey(format!(
        "{} is neither a wallet object nor a byte array",
        path.display()
    )))
}

fn keypair_from_bytes(bytes: &[u8]) -> ClientResult<Keypair> {
    if bytes.len() != KEYPAIR_LEN {
        return Err(ClientError::MalformedKey(format!(
            "expected {KEYPAIR_LEN} key bytes, got {}",
            bytes.len()
        )));
    }
    Keypair::from_bytes(bytes).map_err(|e| ClientError::MalformedKey(e.to_string()))
}

fn generate() -> Keypair {
    let keypair = Keypair::new();
    match persist(&keypair, Path::new(DEFAULT_WALLET_PATH)) {
        Ok(()) => info!(path = DEFAULT_WALLET_PATH, "new wallet saved"),
        Err(e) => warn!("failed to persist new wallet: {e}"),
    }
    keypair
}

/// Byte-array JSON with owner-only permissions. Refuses to clobber an
/// existing wallet file.
fn persist(keypair: &Keypair, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string(&keypair.to_bytes().to_vec())?;

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn byte_array_format_loads() {
        let keypair = Keypair::new();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        let file = write_temp(&json);

        let loaded = load_or_create(Some(file.path())).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn wallet_object_format_loads() {
        let keypair = Keypair::new();
        let json = format!(
            r#"{{"publicKey": "{}", "privateKey": "{}"}}"#,
            keypair.pubkey(),
            bs58::encode(keypair.to_bytes()).into_string()
        );
        let file = write_temp(&json);

        let loaded = load_or_create(Some(file.path())).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn wrong_key_length_is_rejected() {
        let json = serde_json::to_string(&vec![1u8; 31]).unwrap();
        let file = write_temp(&json);
        assert!(matches!(
            load_or_create(Some(file.path())),
            Err(ClientError::MalformedKey(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        let file = write_temp("definitely not a key");
        assert!(matches!(
            load_or_create(Some(file.path())),
            Err(ClientError::MalformedKey(_))
        ));
    }

    #[test]
    fn missing_explicit_path_is_rejected() {
        assert!(matches!(
            load_or_create(Some(Path::new("/nonexistent/wallet.json"))),
            Err(ClientError::MalformedKey(_))
        ));
    }

    #[test]
    fn persist_refuses_to_clobber() {
        let keypair = Keypair::new();
        let file = write_temp("occupied");
        assert!(persist(&keypair, file.path()).is_err());
    }
}
