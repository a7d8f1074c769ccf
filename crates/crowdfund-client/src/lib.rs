/*!
# Crowdfund Client

Client-side access to the on-chain crowdfunding program. [`CampaignClient`]
ties together the signing wallet, deterministic campaign address derivation,
instruction encoding, blocking transaction submission with bounded
confirmation polling, and the on-disk campaign cache, so that create,
donate, and withdraw stay safe across partial failures and repeated runs.
*/

mod cache;
mod client;
mod errors;
mod reconciler;
mod rpc;
mod wallet;

pub use cache::{CampaignCache, CampaignRecord, SavedCampaign, DEFAULT_CACHE_PATH};
pub use client::{CampaignClient, CancelFlag, ConfirmPolicy, CreateOutcome, LAMPORTS_PER_SOL};
pub use errors::{ClientError, ClientResult};
pub use reconciler::{classify_account, plan_create, CampaignStatus, CreatePlan};
pub use rpc::LedgerRpc;
pub use wallet::load_or_create;

// Re-export the SDK surface callers usually need alongside the client.
pub use crowdfund_sdk::{AddressFinder, Campaign, MIN_CAMPAIGN_ACCOUNT_LEN, PROGRAM_ID};
