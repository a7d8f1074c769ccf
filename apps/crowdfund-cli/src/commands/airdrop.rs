use crate::error::CliResult;
use crowdfund_client::{CampaignClient, LAMPORTS_PER_SOL};

pub fn execute(client: &CampaignClient, sol: u64) -> CliResult<()> {
    let lamports = sol.saturating_mul(LAMPORTS_PER_SOL);
    println!("🚰 Requesting {sol} SOL from the devnet faucet...");

    // Best-effort: the faucet rate-limits, and a failed airdrop should not
    // abort anything else the caller is doing.
    match client.request_airdrop(lamports) {
        Ok(signature) => println!("✅ Airdrop confirmed: {signature}"),
        Err(e) => {
            println!("⚠️  Airdrop failed: {e}");
            println!("   The faucet rate-limits; try again in a little while.");
        }
    }

    Ok(())
}
