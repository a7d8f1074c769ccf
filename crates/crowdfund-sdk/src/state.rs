use crate::codec::{ByteReader, ByteWriter};
use crate::discriminator::account_discriminator;
use crate::error::SdkResult;
use solana_sdk::pubkey::Pubkey;

/// Name the program registers its campaign account type under.
pub const CAMPAIGN_ACCOUNT_NAME: &str = "Campaign";

/// Smallest data length at which an account can hold a campaign record.
/// Anything shorter was allocated but never fully initialized.
pub const MIN_CAMPAIGN_ACCOUNT_LEN: usize = 32;

/// Deserialized on-chain campaign state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub admin: Pubkey,
    pub name: String,
    pub description: String,
    pub amount_donated: u64,
    pub bump: u8,
}

impl Campaign {
    /// Decode raw account data: the 8-byte account discriminator, then the
    /// program's field layout. Accounts are allocated larger than their
    /// contents, so trailing zero padding is expected and ignored.
    pub fn try_deserialize(data: &[u8]) -> SdkResult<Self> {
        let mut reader = ByteReader::new(data);
        reader.expect_discriminator(account_discriminator(CAMPAIGN_ACCOUNT_NAME))?;
        Ok(Self {
            admin: reader.read_pubkey()?,
            name: reader.read_str()?,
            description: reader.read_str()?,
            amount_donated: reader.read_u64()?,
            bump: reader.read_u8()?,
        })
    }

    /// Encode in the account layout, discriminator included. The inverse of
    /// [`Campaign::try_deserialize`]; used to build fixtures and verify the
    /// layout against the program.
    pub fn to_bytes(&self) -> SdkResult<Vec<u8>> {
        let mut writer =
            ByteWriter::with_discriminator(account_discriminator(CAMPAIGN_ACCOUNT_NAME));
        writer.write_bytes(self.admin.as_ref());
        writer.write_str(&self.name)?;
        writer.write_str(&self.description)?;
        writer.write_u64(self.amount_donated);
        writer.write_bytes(&[self.bump]);
        Ok(writer.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;

    fn sample() -> Campaign {
        Campaign {
            admin: Pubkey::new_unique(),
            name: "alpha".to_string(),
            description: "a modest fundraiser".to_string(),
            amount_donated: 250_000,
            bump: 254,
        }
    }

    #[test]
    fn account_data_round_trips() {
        let campaign = sample();
        let decoded = Campaign::try_deserialize(&campaign.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, campaign);
    }

    #[test]
    fn trailing_padding_is_tolerated() {
        // on-chain accounts are allocated with slack space
        let campaign = sample();
        let mut data = campaign.to_bytes().unwrap();
        data.resize(data.len() + 512, 0);
        let decoded = Campaign::try_deserialize(&data).unwrap();
        assert_eq!(decoded, campaign);
    }

    #[test]
    fn foreign_account_data_is_rejected() {
        assert_eq!(
            Campaign::try_deserialize(&[0u8; 64]),
            Err(SdkError::WrongDiscriminator)
        );
    }

    #[test]
    fn truncated_account_data_is_rejected() {
        let data = sample().to_bytes().unwrap();
        assert!(matches!(
            Campaign::try_deserialize(&data[..data.len() - 4]),
            Err(SdkError::UnexpectedEof { .. })
        ));
    }
}
