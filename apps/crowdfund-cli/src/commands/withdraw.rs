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
    println!("🏧 Withdrawing {amount} lamports from '{name}' at {campaign}...");

    match client.withdraw(&name, &campaign, amount) {
        Ok(signature) => {
            println!("✅ Withdrawal confirmed: {signature}");
            Ok(())
        }
        Err(e @ ClientError::ProgramRejected { code: 6000 }) => {
            println!("❌ Unauthorized: this wallet is not the campaign's admin.");
            Err(e.into())
        }
        Err(e @ ClientError::ProgramRejected { code: 6001 }) => {
            println!("❌ The campaign does not hold enough lamports for this withdrawal.");
            Err(e.into())
        }
        Err(e @ ClientError::ConfirmationTimeout { .. }) => {
            println!("⚠️  Confirmation timed out; the withdrawal may still land.");
            println!("   Do NOT resend until its status is known.");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
