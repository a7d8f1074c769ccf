use sha2::{Digest, Sha256};

/// Namespace the on-chain program registers its instruction handlers under.
pub const INSTRUCTION_NAMESPACE: &str = "global";

/// First 8 bytes of `sha256("<namespace>:<name>")`, identifying an
/// instruction handler to the program's dispatcher.
pub fn instruction_discriminator(namespace: &str, name: &str) -> [u8; 8] {
    discriminator_of(&format!("{namespace}:{name}"))
}

/// First 8 bytes of `sha256("account:<name>")`, tagging on-chain account data.
pub fn account_discriminator(name: &str) -> [u8; 8] {
    discriminator_of(&format!("account:{name}"))
}

fn discriminator_of(preimage: &str) -> [u8; 8] {
    let hash = Sha256::digest(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}
