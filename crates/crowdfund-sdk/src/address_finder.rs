use crate::error::{SdkError, SdkResult};
use crate::{CAMPAIGN_SEED_PREFIX, PROGRAM_ID};
use solana_sdk::pubkey::{Pubkey, MAX_SEED_LEN};
use solana_sdk::system_program;

/// Derives the program-owned addresses this client talks to.
///
/// Derivation is pure and deterministic: the same authority and campaign
/// name always produce the same (address, bump) pair, and the bump returned
/// here is the one the program expects for any later signing tied to the
/// address.
pub struct AddressFinder {
    pub program_id: Pubkey,
    pub system_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            system_program_id: system_program::ID,
        }
    }

    /// Campaign address for `authority`'s campaign named `name`.
    ///
    /// Seeds are `["CAMPAIGN_DEMO", authority, name]`, searched from bump
    /// 255 downward for the first off-curve candidate, in the same order
    /// the on-chain program searches, so both sides land on one address. Binding
    /// the authority into the seeds is what makes name collisions across
    /// wallets impossible.
    pub fn find_campaign_address(
        &self,
        authority: &Pubkey,
        name: &str,
    ) -> SdkResult<(Pubkey, u8)> {
        let name_bytes = name.as_bytes();
        if name_bytes.len() > MAX_SEED_LEN {
            return Err(SdkError::SeedTooLong {
                len: name_bytes.len(),
                max: MAX_SEED_LEN,
            });
        }
        Pubkey::try_find_program_address(
            &[CAMPAIGN_SEED_PREFIX, authority.as_ref(), name_bytes],
            &self.program_id,
        )
        .ok_or(SdkError::DerivationExhausted)
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(PROGRAM_ID)
    }
}
