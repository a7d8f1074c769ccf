mod address_finder;
mod codec;
mod discriminator;
mod error;
mod instruction_builders;
mod state;
mod transaction_builders;

pub use address_finder::AddressFinder;
pub use codec::{ByteReader, ByteWriter};
pub use discriminator::{account_discriminator, instruction_discriminator, INSTRUCTION_NAMESPACE};
pub use error::{SdkError, SdkResult};
pub use instruction_builders::*;
pub use state::{Campaign, CAMPAIGN_ACCOUNT_NAME, MIN_CAMPAIGN_ACCOUNT_LEN};
pub use transaction_builders::*;

use solana_sdk::pubkey::Pubkey;

/// On-chain crowdfunding program this client targets.
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("7XJkGrdSHn3chc7rsv1xDzEKtwP9w5rSx1shohzM5skv");

/// Seed prefix shared with the program's campaign PDA derivation.
pub const CAMPAIGN_SEED_PREFIX: &[u8] = b"CAMPAIGN_DEMO";
