//! Unsigned-transaction builders. All functions follow the `build_*_tx`
//! pattern and return transactions the caller signs and submits; nothing
//! here touches the network, the caller supplies the recent blockhash.

use crate::error::{SdkError, SdkResult};
use crate::instruction_builders::{build_create_campaign_ix, build_donate_ix, build_withdraw_ix};
use crate::AddressFinder;
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};

/// Assemble an unsigned transaction with `payer` as fee payer.
pub fn build_unsigned_tx(
    instructions: &[Instruction],
    payer: &Pubkey,
    recent_blockhash: Hash,
) -> SdkResult<Transaction> {
    if instructions.is_empty() {
        return Err(SdkError::EmptyTransaction);
    }

    let message = Message::new(instructions, Some(payer));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.message.recent_blockhash = recent_blockhash;

    Ok(transaction)
}

/// Build the transaction creating `payer`'s campaign named `name`.
/// Returns the derived campaign address alongside it.
pub fn build_create_campaign_tx(
    address_finder: &AddressFinder,
    payer: &Pubkey,
    name: &str,
    description: &str,
    recent_blockhash: Hash,
) -> SdkResult<(Transaction, Pubkey)> {
    let (ix, campaign, _) = build_create_campaign_ix(address_finder, payer, name, description)?;
    let tx = build_unsigned_tx(&[ix], payer, recent_blockhash)?;
    Ok((tx, campaign))
}

/// Build a donation transaction from `donor` to an explicit campaign.
pub fn build_donate_tx(
    address_finder: &AddressFinder,
    campaign: &Pubkey,
    donor: &Pubkey,
    name: &str,
    amount: u64,
    recent_blockhash: Hash,
) -> SdkResult<Transaction> {
    let ix = build_donate_ix(address_finder, campaign, donor, name, amount)?;
    build_unsigned_tx(&[ix], donor, recent_blockhash)
}

/// Build a withdrawal transaction for the campaign's admin.
pub fn build_withdraw_tx(
    address_finder: &AddressFinder,
    campaign: &Pubkey,
    admin: &Pubkey,
    name: &str,
    amount: u64,
    recent_blockhash: Hash,
) -> SdkResult<Transaction> {
    let ix = build_withdraw_ix(address_finder, campaign, admin, name, amount)?;
    build_unsigned_tx(&[ix], admin, recent_blockhash)
}
