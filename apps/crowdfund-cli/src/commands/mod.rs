pub mod airdrop;
pub mod balance;
pub mod create;
pub mod donate;
pub mod status;
pub mod withdraw;

use crate::error::{CliError, CliResult};
use crowdfund_client::CampaignClient;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Resolve the campaign address for donate/withdraw: an explicit address
/// wins, then a saved campaign with a matching name, then this wallet's own
/// derivation.
pub(crate) fn resolve_campaign(
    client: &CampaignClient,
    name: &str,
    address: Option<&str>,
) -> CliResult<Pubkey> {
    if let Some(raw) = address {
        return Pubkey::from_str(raw)
            .map_err(|e| CliError::InvalidArgument(format!("bad campaign address: {e}")));
    }

    if let Some(saved) = client.current_campaign() {
        if saved.name() == Some(name) {
            return Ok(*saved.address());
        }
    }

    let (derived, _) = client.campaign_address(name)?;
    Ok(derived)
}
