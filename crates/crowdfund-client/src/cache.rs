use crate::errors::ClientResult;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Where the last-used campaign is remembered between runs.
pub const DEFAULT_CACHE_PATH: &str = "campaign.txt";

/// Last campaign this wallet created or confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRecord {
    pub name: String,
    pub address: Pubkey,
}

/// A decoded cache file. The bare-address form predates named records and
/// is still read, never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedCampaign {
    Named(CampaignRecord),
    LegacyAddressOnly(Pubkey),
}

impl SavedCampaign {
    pub fn address(&self) -> &Pubkey {
        match self {
            SavedCampaign::Named(record) => &record.address,
            SavedCampaign::LegacyAddressOnly(address) => address,
        }
    }

    /// `None` for legacy entries, whose name was never recorded.
    pub fn name(&self) -> Option<&str> {
        match self {
            SavedCampaign::Named(record) => Some(&record.name),
            SavedCampaign::LegacyAddressOnly(_) => None,
        }
    }
}

/// On-disk serialization of a named record; addresses travel as base58.
#[derive(Serialize, Deserialize)]
struct NamedRecordFile {
    address: String,
    name: String,
}

pub struct CampaignCache {
    path: PathBuf,
}

impl CampaignCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(DEFAULT_CACHE_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved record, tolerating both formats. Malformed content is
    /// logged and treated as absent, never fatal.
    pub fn load(&self) -> Option<SavedCampaign> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), "failed to read campaign cache: {e}");
                return None;
            }
        };

        let trimmed = data.trim();
        if trimmed.is_empty() {
            return None;
        }

        match parse_entry(trimmed) {
            Ok(entry) => Some(entry),
            Err(reason) => {
                warn!(path = %self.path.display(), "ignoring malformed campaign cache: {reason}");
                None
            }
        }
    }

    /// Atomically replace the cache: the full record lands in a temporary
    /// file in the same directory and is renamed into place, so a crash
    /// mid-write cannot corrupt the previous valid record.
    pub fn save(&self, record: &CampaignRecord) -> ClientResult<()> {
        let contents = NamedRecordFile {
            address: record.address.to_string(),
            name: record.name.clone(),
        };
        let json = serde_json::to_string(&contents).map_err(std::io::Error::from)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), "campaign cache updated");
        Ok(())
    }
}

/// Explicit tagged decode: a JSON object is a named record, anything else
/// must be a bare base58 address.
fn parse_entry(raw: &str) -> Result<SavedCampaign, String> {
    if raw.starts_with('{') {
        let file: NamedRecordFile =
            serde_json::from_str(raw).map_err(|e| format!("bad record: {e}"))?;
        let address =
            Pubkey::from_str(&file.address).map_err(|e| format!("bad saved address: {e}"))?;
        return Ok(SavedCampaign::Named(CampaignRecord {
            name: file.name,
            address,
        }));
    }

    let address = Pubkey::from_str(raw).map_err(|e| format!("bad saved address: {e}"))?;
    Ok(SavedCampaign::LegacyAddressOnly(address))
}
