use crate::cache::{CampaignCache, CampaignRecord, SavedCampaign};
use crate::errors::{ClientError, ClientResult};
use crate::reconciler::{classify_account, plan_create, CampaignStatus, CreatePlan};
use crate::rpc::LedgerRpc;
use crowdfund_sdk::{
    build_create_campaign_ix, build_donate_ix, build_unsigned_tx, build_withdraw_ix,
    AddressFinder, Campaign,
};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::TransactionError,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Bounds on confirmation polling. Waiting on settlement is the only
/// suspend point in the client and it is never unbounded.
#[derive(Debug, Clone)]
pub struct ConfirmPolicy {
    pub max_attempts: usize,
    pub poll_interval: Duration,
}

impl Default for ConfirmPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            poll_interval: Duration::from_secs(2),
        }
    }
}

/// Cooperative cancellation for a confirmation wait. Cancelling leaves the
/// in-flight transaction's fate unknown, so a cancelled wait reports the
/// same ambiguous outcome as a timeout; state can be re-classified at any
/// point afterwards.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// How a create call concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The create instruction landed; the campaign is new.
    Created {
        address: Pubkey,
        signature: Signature,
    },
    /// A valid campaign already existed at the derived address.
    Reused { address: Pubkey },
}

impl CreateOutcome {
    pub fn address(&self) -> &Pubkey {
        match self {
            CreateOutcome::Created { address, .. } | CreateOutcome::Reused { address } => address,
        }
    }
}

/// One wallet's session against the crowdfunding program.
///
/// Holds the signing identity, the address finder, the on-disk campaign
/// cache, and the currently selected campaign. All chain round-trips are
/// blocking and strictly sequential; there is never more than one
/// transaction in flight from a session.
pub struct CampaignClient<R = RpcClient> {
    rpc: R,
    payer: Keypair,
    address_finder: AddressFinder,
    cache: CampaignCache,
    confirm: ConfirmPolicy,
    cancel: CancelFlag,
    current: Option<SavedCampaign>,
}

impl CampaignClient<RpcClient> {
    /// Connect to `rpc_url` with finalized commitment, the program's
    /// devnet deployment defaults, and the default cache location.
    pub fn connect(rpc_url: &str, payer: Keypair) -> Self {
        let rpc =
            RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::finalized());
        Self::new(
            rpc,
            payer,
            AddressFinder::default(),
            CampaignCache::default_location(),
        )
    }
}

impl<R: LedgerRpc> CampaignClient<R> {
    pub fn new(rpc: R, payer: Keypair, address_finder: AddressFinder, cache: CampaignCache) -> Self {
        let current = cache.load();
        if let Some(saved) = &current {
            match saved.name() {
                Some(name) => info!(address = %saved.address(), name, "loaded saved campaign"),
                None => info!(address = %saved.address(), "loaded saved campaign (name unknown)"),
            }
        }
        Self {
            rpc,
            payer,
            address_finder,
            cache,
            confirm: ConfirmPolicy::default(),
            cancel: CancelFlag::new(),
            current,
        }
    }

    pub fn with_confirm_policy(mut self, confirm: ConfirmPolicy) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn address_finder(&self) -> &AddressFinder {
        &self.address_finder
    }

    /// The campaign remembered from this or an earlier run, if any.
    pub fn current_campaign(&self) -> Option<&SavedCampaign> {
        self.current.as_ref()
    }

    /// Handle for cancelling an in-progress confirmation wait from another
    /// thread.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Campaign address for this wallet's campaign named `name`.
    pub fn campaign_address(&self, name: &str) -> ClientResult<(Pubkey, u8)> {
        Ok(self
            .address_finder
            .find_campaign_address(&self.payer.pubkey(), name)?)
    }

    /// Fresh classification of the account at `address`; always re-fetches.
    pub fn classify(&self, address: &Pubkey) -> ClientResult<CampaignStatus> {
        let account = self.rpc.get_account(address)?;
        Ok(classify_account(
            &self.address_finder.program_id,
            account.as_ref(),
        ))
    }

    /// Create `name`, or reuse it when it already exists on-chain.
    ///
    /// An `OwnedValid` classification short-circuits without submitting, so
    /// repeated calls never pay fees twice or trip the program's
    /// re-initialization checks. Partially created accounts are surfaced,
    /// not retried.
    pub fn create_campaign(
        &mut self,
        name: &str,
        description: &str,
    ) -> ClientResult<CreateOutcome> {
        let (address, bump) = self.campaign_address(name)?;
        debug!(%address, bump, name, "derived campaign address");

        let status = self.classify(&address)?;
        match plan_create(&status) {
            CreatePlan::Reuse => {
                info!(%address, name, "campaign already initialized; reusing");
                self.remember(name, address);
                Ok(CreateOutcome::Reused { address })
            }
            CreatePlan::Blocked => Err(ClientError::PartiallyInitialized {
                address,
                detail: status.to_string(),
            }),
            CreatePlan::Submit => {
                let (ix, _, _) = build_create_campaign_ix(
                    &self.address_finder,
                    &self.payer.pubkey(),
                    name,
                    description,
                )?;
                let signature = self.submit(&[ix])?;
                info!(%address, %signature, name, "campaign created");
                self.remember(name, address);
                Ok(CreateOutcome::Created { address, signature })
            }
        }
    }

    /// Donate `amount` lamports to the campaign `name` at `campaign`. The
    /// address is explicit because the derivation binds (admin, name) and a
    /// donor does not own the admin identity.
    ///
    /// Never resubmitted on an ambiguous outcome: a duplicate donation
    /// double-spends, so after [`ClientError::ConfirmationTimeout`] callers
    /// must check [`CampaignClient::confirm_landed`] before trying again.
    pub fn donate(&self, name: &str, campaign: &Pubkey, amount: u64) -> ClientResult<Signature> {
        let ix = build_donate_ix(
            &self.address_finder,
            campaign,
            &self.payer.pubkey(),
            name,
            amount,
        )?;
        self.submit(&[ix])
    }

    /// Withdraw `amount` lamports from a campaign this wallet administers.
    /// Subject to the same no-blind-retry rule as [`CampaignClient::donate`].
    pub fn withdraw(&self, name: &str, campaign: &Pubkey, amount: u64) -> ClientResult<Signature> {
        let ix = build_withdraw_ix(
            &self.address_finder,
            campaign,
            &self.payer.pubkey(),
            name,
            amount,
        )?;
        self.submit(&[ix])
    }

    /// Fetch and decode the campaign record at `address`, when the account
    /// exists and belongs to the program.
    pub fn fetch_campaign(&self, address: &Pubkey) -> ClientResult<Option<Campaign>> {
        match self.rpc.get_account(address)? {
            Some(account) if account.owner == self.address_finder.program_id => {
                Ok(Some(Campaign::try_deserialize(&account.data)?))
            }
            _ => Ok(None),
        }
    }

    /// Classify `name`'s derived address and, when it holds a valid
    /// campaign, remember it for later runs.
    pub fn campaign_status(&mut self, name: &str) -> ClientResult<(Pubkey, CampaignStatus)> {
        let (address, _) = self.campaign_address(name)?;
        let status = self.classify(&address)?;
        if matches!(status, CampaignStatus::OwnedValid { .. }) {
            self.remember(name, address);
        }
        Ok((address, status))
    }

    /// The wallet's lamport balance.
    pub fn balance(&self) -> ClientResult<u64> {
        self.rpc.balance(&self.payer.pubkey())
    }

    /// Devnet faucet request, confirmed with the same bounded polling as
    /// regular submissions. The faucet rate-limits; failures here should
    /// not abort a caller's flow.
    pub fn request_airdrop(&self, lamports: u64) -> ClientResult<Signature> {
        let signature = self.rpc.request_airdrop(&self.payer.pubkey(), lamports)?;
        debug!(%signature, lamports, "airdrop requested");
        self.await_confirmation(&signature)?;
        Ok(signature)
    }

    /// True once `signature` is visible and settled without error. The
    /// gate for resubmitting after an ambiguous timeout.
    pub fn confirm_landed(&self, signature: &Signature) -> ClientResult<bool> {
        Ok(matches!(
            self.rpc.signature_status(signature)?,
            Some(Ok(()))
        ))
    }

    /// Sign with the session payer, submit, and wait for settlement.
    ///
    /// A fresh blockhash is fetched per call and never reused across
    /// retries. No local state is mutated here; that is the caller's
    /// responsibility after success.
    pub fn submit(&self, instructions: &[Instruction]) -> ClientResult<Signature> {
        let recent_blockhash = self.rpc.latest_blockhash()?;
        let payer = self.payer.pubkey();

        let mut transaction = build_unsigned_tx(instructions, &payer, recent_blockhash)?;
        transaction
            .try_sign(&[&self.payer], recent_blockhash)
            .map_err(|e| ClientError::MissingSigner(e.to_string()))?;

        let signature = self.rpc.send_transaction(&transaction)?;
        debug!(%signature, "transaction sent");

        self.await_confirmation(&signature)?;
        Ok(signature)
    }

    fn await_confirmation(&self, signature: &Signature) -> ClientResult<()> {
        for attempt in 1..=self.confirm.max_attempts {
            if self.cancel.is_cancelled() {
                warn!(%signature, "confirmation wait cancelled; outcome unknown");
                return Err(ClientError::ConfirmationTimeout {
                    signature: *signature,
                    attempts: attempt - 1,
                });
            }

            match self.rpc.signature_status(signature)? {
                Some(Ok(())) => {
                    info!(%signature, attempt, "transaction confirmed");
                    return Ok(());
                }
                Some(Err(err)) => return Err(settlement_error(err)),
                None => thread::sleep(self.confirm.poll_interval),
            }
        }

        Err(ClientError::ConfirmationTimeout {
            signature: *signature,
            attempts: self.confirm.max_attempts,
        })
    }

    /// Record (name, address) for later runs. Cache failures are warnings:
    /// the chain operation that produced the record already succeeded.
    fn remember(&mut self, name: &str, address: Pubkey) {
        let record = CampaignRecord {
            name: name.to_string(),
            address,
        };
        if let Err(e) = self.cache.save(&record) {
            warn!("failed to save campaign cache: {e}");
        }
        self.current = Some(SavedCampaign::Named(record));
    }
}

fn settlement_error(err: TransactionError) -> ClientError {
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            ClientError::ProgramRejected { code }
        }
        other => ClientError::TransactionFailed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::account::Account;
    use solana_sdk::hash::Hash;
    use solana_sdk::system_program;
    use solana_sdk::transaction::Transaction;
    use std::cell::{Cell, RefCell};

    /// Recorded ledger: serves one configured account snapshot and one
    /// settlement behavior, counting submissions.
    struct FakeLedger {
        account: RefCell<Option<Account>>,
        status: Option<Result<(), TransactionError>>,
        sends: Cell<usize>,
    }

    impl FakeLedger {
        fn new(account: Option<Account>) -> Self {
            Self {
                account: RefCell::new(account),
                status: Some(Ok(())),
                sends: Cell::new(0),
            }
        }

        fn with_status(mut self, status: Option<Result<(), TransactionError>>) -> Self {
            self.status = status;
            self
        }
    }

    impl LedgerRpc for FakeLedger {
        fn get_account(&self, _address: &Pubkey) -> ClientResult<Option<Account>> {
            Ok(self.account.borrow().clone())
        }

        fn latest_blockhash(&self) -> ClientResult<Hash> {
            Ok(Hash::new_from_array([3u8; 32]))
        }

        fn send_transaction(&self, _transaction: &Transaction) -> ClientResult<Signature> {
            self.sends.set(self.sends.get() + 1);
            Ok(Signature::default())
        }

        fn signature_status(
            &self,
            _signature: &Signature,
        ) -> ClientResult<Option<Result<(), TransactionError>>> {
            Ok(self.status.clone())
        }

        fn balance(&self, _address: &Pubkey) -> ClientResult<u64> {
            Ok(5 * LAMPORTS_PER_SOL)
        }

        fn request_airdrop(&self, _address: &Pubkey, _lamports: u64) -> ClientResult<Signature> {
            Ok(Signature::default())
        }
    }

    fn client_with(ledger: FakeLedger, dir: &tempfile::TempDir) -> CampaignClient<FakeLedger> {
        CampaignClient::new(
            ledger,
            Keypair::new(),
            AddressFinder::default(),
            CampaignCache::new(dir.path().join("campaign.txt")),
        )
        .with_confirm_policy(ConfirmPolicy {
            max_attempts: 3,
            poll_interval: Duration::ZERO,
        })
    }

    fn owned_account(program_id: Pubkey, data_len: usize) -> Account {
        Account {
            lamports: 2_000_000,
            data: vec![0; data_len],
            owner: program_id,
            executable: false,
            rent_epoch: 0,
        }
    }

    #[test]
    fn create_reuses_an_existing_campaign_without_submitting() {
        let dir = tempfile::tempdir().unwrap();
        let finder = AddressFinder::default();
        let ledger = FakeLedger::new(Some(owned_account(finder.program_id, 40)));
        let mut client = client_with(ledger, &dir);

        let outcome = client.create_campaign("alpha", "description").unwrap();
        let (expected, _) = client.campaign_address("alpha").unwrap();

        assert_eq!(outcome, CreateOutcome::Reused { address: expected });
        assert_eq!(client.rpc.sends.get(), 0);
    }

    #[test]
    fn create_submits_when_the_address_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut client = client_with(FakeLedger::new(None), &dir);

        let outcome = client.create_campaign("alpha", "description").unwrap();

        assert!(matches!(outcome, CreateOutcome::Created { .. }));
        assert_eq!(client.rpc.sends.get(), 1);

        // the cache now carries the named record
        let saved = client.current_campaign().unwrap();
        assert_eq!(saved.name(), Some("alpha"));
        assert_eq!(saved.address(), outcome.address());
    }

    #[test]
    fn create_stops_on_a_partially_initialized_account() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = FakeLedger::new(Some(owned_account(system_program::ID, 0)));
        let mut client = client_with(ledger, &dir);

        let err = client.create_campaign("alpha", "description").unwrap_err();

        assert!(matches!(err, ClientError::PartiallyInitialized { .. }));
        assert_eq!(client.rpc.sends.get(), 0);
    }

    #[test]
    fn create_stops_on_insufficient_data() {
        let dir = tempfile::tempdir().unwrap();
        let finder = AddressFinder::default();
        let ledger = FakeLedger::new(Some(owned_account(finder.program_id, 8)));
        let mut client = client_with(ledger, &dir);

        assert!(matches!(
            client.create_campaign("alpha", "description"),
            Err(ClientError::PartiallyInitialized { .. })
        ));
    }

    #[test]
    fn donate_times_out_without_resubmitting() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = FakeLedger::new(None).with_status(None);
        let client = client_with(ledger, &dir);
        let campaign = Pubkey::new_unique();

        let err = client.donate("alpha", &campaign, 100_000_000).unwrap_err();

        assert!(matches!(err, ClientError::ConfirmationTimeout { .. }));
        // exactly one send: the ambiguous outcome is surfaced, never retried
        assert_eq!(client.rpc.sends.get(), 1);
        // and the state can still be interrogated afterwards
        assert!(!client.confirm_landed(&Signature::default()).unwrap());
    }

    #[test]
    fn program_rejection_codes_surface_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = FakeLedger::new(None).with_status(Some(Err(
            TransactionError::InstructionError(0, InstructionError::Custom(6001)),
        )));
        let client = client_with(ledger, &dir);
        let campaign = Pubkey::new_unique();

        let err = client.withdraw("alpha", &campaign, 500).unwrap_err();
        assert!(matches!(err, ClientError::ProgramRejected { code: 6001 }));
    }

    #[test]
    fn cancellation_reports_an_ambiguous_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = FakeLedger::new(None).with_status(None);
        let client = client_with(ledger, &dir);
        client.cancel_flag().cancel();

        let err = client.donate("alpha", &Pubkey::new_unique(), 1).unwrap_err();
        assert!(matches!(err, ClientError::ConfirmationTimeout { .. }));

        // classification still works after a cancelled wait
        assert_eq!(
            client.classify(&Pubkey::new_unique()).unwrap(),
            CampaignStatus::Absent
        );
    }

    #[test]
    fn status_confirmation_updates_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let finder = AddressFinder::default();
        let ledger = FakeLedger::new(Some(owned_account(finder.program_id, 40)));
        let mut client = client_with(ledger, &dir);

        let (address, status) = client.campaign_status("alpha").unwrap();
        assert!(matches!(status, CampaignStatus::OwnedValid { .. }));
        assert_eq!(client.current_campaign().unwrap().address(), &address);

        // the record survives a fresh session against the same cache file
        let reloaded = CampaignCache::new(dir.path().join("campaign.txt")).load();
        assert_eq!(reloaded.unwrap().name(), Some("alpha"));
    }

    #[test]
    fn fetch_campaign_decodes_program_owned_state() {
        let dir = tempfile::tempdir().unwrap();
        let finder = AddressFinder::default();
        let campaign = Campaign {
            admin: Pubkey::new_unique(),
            name: "alpha".to_string(),
            description: "a modest fundraiser".to_string(),
            amount_donated: 42,
            bump: 254,
        };
        let mut account = owned_account(finder.program_id, 0);
        account.data = campaign.to_bytes().unwrap();
        let client = client_with(FakeLedger::new(Some(account)), &dir);

        let fetched = client.fetch_campaign(&Pubkey::new_unique()).unwrap();
        assert_eq!(fetched, Some(campaign));
    }

    #[test]
    fn fetch_campaign_ignores_foreign_accounts() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with(
            FakeLedger::new(Some(owned_account(system_program::ID, 64))),
            &dir,
        );
        assert_eq!(client.fetch_campaign(&Pubkey::new_unique()).unwrap(), None);
    }
}
