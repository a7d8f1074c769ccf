use crate::error::CliResult;
use crowdfund_client::{CampaignClient, ClientError, CreateOutcome};

pub fn execute(client: &mut CampaignClient, name: String, description: String) -> CliResult<()> {
    println!("🚀 Creating campaign '{name}'...");

    match client.create_campaign(&name, &description) {
        Ok(CreateOutcome::Created { address, signature }) => {
            println!("✅ Campaign created at {address}");
            println!("   Transaction: {signature}");
            println!("🔗 https://explorer.solana.com/address/{address}?cluster=devnet");
            Ok(())
        }
        Ok(CreateOutcome::Reused { address }) => {
            println!("✅ Campaign already exists at {address}; using it");
            Ok(())
        }
        Err(e @ ClientError::PartiallyInitialized { .. }) => {
            println!("⚠️  A previous create attempt left this address half-built.");
            println!("   Creating again would be rejected on-chain; pick a different name.");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
