use crate::error::CliResult;
use crowdfund_client::{CampaignClient, LAMPORTS_PER_SOL};

pub fn execute(client: &CampaignClient) -> CliResult<()> {
    let lamports = client.balance()?;
    let sol = lamports as f64 / LAMPORTS_PER_SOL as f64;

    println!("💰 {}: {lamports} lamports ({sol:.4} SOL)", client.payer_pubkey());
    if lamports < LAMPORTS_PER_SOL / 100 {
        println!("⚠️  Low balance; `crowdfund airdrop` tops up on devnet.");
    }

    Ok(())
}
