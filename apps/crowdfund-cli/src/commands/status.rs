use crate::error::CliResult;
use crowdfund_client::{CampaignClient, CampaignStatus};

pub fn execute(client: &mut CampaignClient, name: String) -> CliResult<()> {
    let (address, status) = client.campaign_status(&name)?;

    println!("🔍 Campaign '{name}' for wallet {}", client.payer_pubkey());
    println!("📍 Derived address: {address}");
    println!("🔗 https://explorer.solana.com/address/{address}?cluster=devnet");

    match status {
        CampaignStatus::Absent => {
            println!("❌ No account on-chain; the name is free to create.");
        }
        CampaignStatus::AllocatedUnowned { owner } => {
            println!("⚠️  Account allocated by {owner} but never initialized by the program.");
            println!("   A previous create attempt likely failed partway; use a different name.");
        }
        CampaignStatus::OwnedInsufficientData { data_len } => {
            println!("⚠️  Program-owned but only {data_len} bytes of data; initialization never completed.");
        }
        CampaignStatus::OwnedValid { data_len, lamports } => {
            println!("✅ Initialized campaign ({data_len} bytes, {lamports} lamports).");
            if let Some(campaign) = client.fetch_campaign(&address)? {
                println!("   Admin:       {}", campaign.admin);
                println!("   Name:        {}", campaign.name);
                println!("   Description: {}", campaign.description);
                println!("   Donated:     {} lamports", campaign.amount_donated);
            }
        }
    }

    Ok(())
}
