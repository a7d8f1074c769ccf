use crate::codec::{ByteReader, ByteWriter};
use crate::discriminator::{instruction_discriminator, INSTRUCTION_NAMESPACE};
use crate::error::SdkResult;
use crate::AddressFinder;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

/// Payload for `global:create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCampaign {
    pub name: String,
    pub description: String,
}

impl CreateCampaign {
    pub fn data(&self) -> SdkResult<Vec<u8>> {
        let mut writer = ByteWriter::with_discriminator(discriminator("create"));
        writer.write_str(&self.name)?;
        writer.write_str(&self.description)?;
        Ok(writer.into_bytes())
    }

    pub fn decode(data: &[u8]) -> SdkResult<Self> {
        let mut reader = ByteReader::new(data);
        reader.expect_discriminator(discriminator("create"))?;
        let name = reader.read_str()?;
        let description = reader.read_str()?;
        reader.finish()?;
        Ok(Self { name, description })
    }
}

/// Payload for `global:donate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donate {
    pub name: String,
    pub amount: u64,
}

impl Donate {
    pub fn data(&self) -> SdkResult<Vec<u8>> {
        let mut writer = ByteWriter::with_discriminator(discriminator("donate"));
        writer.write_str(&self.name)?;
        writer.write_u64(self.amount);
        Ok(writer.into_bytes())
    }

    pub fn decode(data: &[u8]) -> SdkResult<Self> {
        let mut reader = ByteReader::new(data);
        reader.expect_discriminator(discriminator("donate"))?;
        let name = reader.read_str()?;
        let amount = reader.read_u64()?;
        reader.finish()?;
        Ok(Self { name, amount })
    }
}

/// Payload for `global:withdraw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdraw {
    pub name: String,
    pub amount: u64,
}

impl Withdraw {
    pub fn data(&self) -> SdkResult<Vec<u8>> {
        let mut writer = ByteWriter::with_discriminator(discriminator("withdraw"));
        writer.write_str(&self.name)?;
        writer.write_u64(self.amount);
        Ok(writer.into_bytes())
    }

    pub fn decode(data: &[u8]) -> SdkResult<Self> {
        let mut reader = ByteReader::new(data);
        reader.expect_discriminator(discriminator("withdraw"))?;
        let name = reader.read_str()?;
        let amount = reader.read_u64()?;
        reader.finish()?;
        Ok(Self { name, amount })
    }
}

fn discriminator(operation: &str) -> [u8; 8] {
    instruction_discriminator(INSTRUCTION_NAMESPACE, operation)
}

/// Build the create instruction for `payer`'s campaign named `name`.
///
/// Accounts: campaign (writable), payer (writable signer), system program.
/// Returns the derived campaign address and bump alongside the instruction.
pub fn build_create_campaign_ix(
    address_finder: &AddressFinder,
    payer: &Pubkey,
    name: &str,
    description: &str,
) -> SdkResult<(Instruction, Pubkey, u8)> {
    let (campaign, bump) = address_finder.find_campaign_address(payer, name)?;

    let data = CreateCampaign {
        name: name.to_string(),
        description: description.to_string(),
    }
    .data()?;

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: vec![
            AccountMeta::new(campaign, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(address_finder.system_program_id, false),
        ],
        data,
    };

    Ok((ix, campaign, bump))
}

/// Build a donate instruction against an explicit campaign address.
///
/// Accounts: campaign (writable), donor (writable signer), system program;
/// the donation moves lamports through a system transfer.
pub fn build_donate_ix(
    address_finder: &AddressFinder,
    campaign: &Pubkey,
    donor: &Pubkey,
    name: &str,
    amount: u64,
) -> SdkResult<Instruction> {
    let data = Donate {
        name: name.to_string(),
        amount,
    }
    .data()?;

    Ok(Instruction {
        program_id: address_finder.program_id,
        accounts: vec![
            AccountMeta::new(*campaign, false),
            AccountMeta::new(*donor, true),
            AccountMeta::new_readonly(address_finder.system_program_id, false),
        ],
        data,
    })
}

/// Build a withdraw instruction against an explicit campaign address.
///
/// Accounts: campaign (writable), admin (writable signer). No system
/// program: the program adjusts lamport balances directly.
pub fn build_withdraw_ix(
    address_finder: &AddressFinder,
    campaign: &Pubkey,
    admin: &Pubkey,
    name: &str,
    amount: u64,
) -> SdkResult<Instruction> {
    let data = Withdraw {
        name: name.to_string(),
        amount,
    }
    .data()?;

    Ok(Instruction {
        program_id: address_finder.program_id,
        accounts: vec![
            AccountMeta::new(*campaign, false),
            AccountMeta::new(*admin, true),
        ],
        data,
    })
}
