use crate::commands::resolve_campaign;
use crate::error::CliResult;
use crowdfund_client::{CampaignClient, ClientError};

pub fn execute(
    client: &CampaignClient,
    name: String,
    amount: u64,
    address: Option<String>,
) -> CliResult<()> {
    let campaign = resolve_campaign(client, &name, address.as_deref())?;
    println!("💸 Donating {amount} lamports to '{name}' at {campaign}...");

    match client.donate(&name, &campaign, amount) {
        Ok(signature) => {
            println!("✅ Donation confirmed: {signature}");
            Ok(())
        }
        Err(e @ ClientError::ConfirmationTimeout { .. }) => {
            println!("⚠️  Confirmation timed out; the donation may still land.");
            println!("   Do NOT resend until its status is known - a duplicate double-spends.");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
