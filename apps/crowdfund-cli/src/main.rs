use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod error;

use crowdfund_client::{load_or_create, CampaignClient};
use error::CliResult;

#[derive(Parser)]
#[command(name = "crowdfund")]
#[command(about = "Crowdfunding client - create, fund, and manage campaigns on Solana")]
#[command(version)]
struct Cli {
    /// Solana RPC URL
    #[arg(
        long,
        global = true,
        default_value = "https://api.devnet.solana.com"
    )]
    rpc_url: String,

    /// Wallet keypair file (a new wallet.json is generated when omitted)
    #[arg(long, global = true)]
    keypair: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a campaign, or reuse it if it already exists
    Create {
        /// Campaign name (bound into the on-chain address)
        name: String,

        /// Campaign description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Donate lamports to a campaign
    Donate {
        /// Campaign name
        name: String,

        /// Amount in lamports
        amount: u64,

        /// Campaign address; defaults to the saved campaign, then to this
        /// wallet's own derivation for the name
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Withdraw lamports from a campaign this wallet administers
    Withdraw {
        /// Campaign name
        name: String,

        /// Amount in lamports
        amount: u64,

        /// Campaign address; defaults to the saved campaign, then to this
        /// wallet's own derivation for the name
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Inspect the on-chain state behind a campaign name
    Status {
        /// Campaign name
        name: String,
    },

    /// Show the wallet's SOL balance
    Balance,

    /// Request devnet SOL from the faucet
    Airdrop {
        /// Amount in SOL
        #[arg(default_value = "2")]
        sol: u64,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let payer = load_or_create(cli.keypair.as_deref())?;
    let mut client = CampaignClient::connect(&cli.rpc_url, payer);

    match cli.command {
        Commands::Create { name, description } => {
            commands::create::execute(&mut client, name, description)
        }

        Commands::Donate {
            name,
            amount,
            address,
        } => commands::donate::execute(&client, name, amount, address),

        Commands::Withdraw {
            name,
            amount,
            address,
        } => commands::withdraw::execute(&client, name, amount, address),

        Commands::Status { name } => commands::status::execute(&mut client, name),

        Commands::Balance => commands::balance::execute(&client),

        Commands::Airdrop { sol } => commands::airdrop::execute(&client, sol),
    }
}
