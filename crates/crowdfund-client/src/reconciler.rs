use crowdfund_sdk::MIN_CAMPAIGN_ACCOUNT_LEN;
use solana_sdk::{account::Account, pubkey::Pubkey};
use std::fmt;

/// On-chain standing of a derived campaign address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignStatus {
    /// No account exists at the address.
    Absent,
    /// Allocated by some other program (usually the system program): a
    /// previous create attempt died between allocation and initialization.
    AllocatedUnowned { owner: Pubkey },
    /// Owned by the program but too small to hold a campaign record.
    OwnedInsufficientData { data_len: usize },
    /// A real, usable campaign.
    OwnedValid { data_len: usize, lamports: u64 },
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampaignStatus::Absent => write!(f, "no account on-chain"),
            CampaignStatus::AllocatedUnowned { owner } => {
                write!(f, "allocated by {owner}, never initialized by the program")
            }
            CampaignStatus::OwnedInsufficientData { data_len } => {
                write!(f, "program-owned but only {data_len} bytes of data")
            }
            CampaignStatus::OwnedValid { data_len, lamports } => {
                write!(f, "initialized campaign, {data_len} bytes, {lamports} lamports")
            }
        }
    }
}

/// Classify a freshly fetched account snapshot. Pure; callers re-fetch for
/// every decision rather than trusting any cached view.
pub fn classify_account(program_id: &Pubkey, account: Option<&Account>) -> CampaignStatus {
    match account {
        None => CampaignStatus::Absent,
        Some(account) if account.owner != *program_id => CampaignStatus::AllocatedUnowned {
            owner: account.owner,
        },
        Some(account) if account.data.len() < MIN_CAMPAIGN_ACCOUNT_LEN => {
            CampaignStatus::OwnedInsufficientData {
                data_len: account.data.len(),
            }
        }
        Some(account) => CampaignStatus::OwnedValid {
            data_len: account.data.len(),
            lamports: account.lamports,
        },
    }
}

/// What the create flow should do for a given classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatePlan {
    /// Campaign already initialized: reuse it without submitting anything.
    Reuse,
    /// Nothing on-chain: submit the create instruction.
    Submit,
    /// Allocated but uninitialized: the program would reject a second
    /// initialization, so stop and require operator intervention.
    Blocked,
}

pub fn plan_create(status: &CampaignStatus) -> CreatePlan {
    match status {
        CampaignStatus::OwnedValid { .. } => CreatePlan::Reuse,
        CampaignStatus::Absent => CreatePlan::Submit,
        CampaignStatus::AllocatedUnowned { .. } | CampaignStatus::OwnedInsufficientData { .. } => {
            CreatePlan::Blocked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::system_program;

    fn account(owner: Pubkey, data_len: usize) -> Account {
        Account {
            lamports: 1_500_000,
            data: vec![0; data_len],
            owner,
            executable: false,
            rent_epoch: 0,
        }
    }

    #[test]
    fn missing_account_is_absent() {
        let program_id = Pubkey::new_unique();
        assert_eq!(classify_account(&program_id, None), CampaignStatus::Absent);
    }

    #[test]
    fn foreign_owner_is_allocated_unowned() {
        let program_id = Pubkey::new_unique();
        let snapshot = account(system_program::ID, 0);
        assert_eq!(
            classify_account(&program_id, Some(&snapshot)),
            CampaignStatus::AllocatedUnowned {
                owner: system_program::ID
            }
        );
    }

    #[test]
    fn short_program_owned_data_is_insufficient() {
        let program_id = Pubkey::new_unique();
        let snapshot = account(program_id, MIN_CAMPAIGN_ACCOUNT_LEN - 1);
        assert_eq!(
            classify_account(&program_id, Some(&snapshot)),
            CampaignStatus::OwnedInsufficientData {
                data_len: MIN_CAMPAIGN_ACCOUNT_LEN - 1
            }
        );
    }

    #[test]
    fn owner_and_data_length_make_a_valid_campaign() {
        let program_id = Pubkey::new_unique();
        let snapshot = account(program_id, 40);
        assert_eq!(
            classify_account(&program_id, Some(&snapshot)),
            CampaignStatus::OwnedValid {
                data_len: 40,
                lamports: 1_500_000
            }
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let program_id = Pubkey::new_unique();
        let snapshot = account(program_id, MIN_CAMPAIGN_ACCOUNT_LEN);
        assert!(matches!(
            classify_account(&program_id, Some(&snapshot)),
            CampaignStatus::OwnedValid { .. }
        ));
    }

    #[test]
    fn create_plans_follow_the_policy() {
        assert_eq!(plan_create(&CampaignStatus::Absent), CreatePlan::Submit);
        assert_eq!(
            plan_create(&CampaignStatus::OwnedValid {
                data_len: 40,
                lamports: 1
            }),
            CreatePlan::Reuse
        );
        assert_eq!(
            plan_create(&CampaignStatus::AllocatedUnowned {
                owner: system_program::ID
            }),
            CreatePlan::Blocked
        );
        assert_eq!(
            plan_create(&CampaignStatus::OwnedInsufficientData { data_len: 8 }),
            CreatePlan::Blocked
        );
    }
}
