//! State definitions for the Optimistic Gate contract
//!
//! This module defines all storage structures and state maps for the gate:
//! the active submodule slot, the fraud-flag table, the watcher set, and
//! the per-message provisional verification ledger.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address for watcher and submodule management
    pub owner: Addr,
    /// Fraud contestation window in seconds, fixed at instantiation
    pub fraud_window: u64,
}

/// Provisional verification record for a message (keyed by message id)
///
/// Created by `PreVerify` once the submodule accepts the message. The message
/// becomes finally verified only after the fraud window elapses without the
/// recorded submodule having been flagged.
#[cw_serde]
pub struct ProvisionalEntry {
    /// Submodule that accepted the message at pre-verification time
    pub submodule: Addr,
    /// Block time when the provisional entry was created
    pub verified_at: Timestamp,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:optimistic-gate";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "1.0.0";

// ============================================================================
// State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Currently active submodule used by new `PreVerify` calls
pub const ACTIVE_SUBMODULE: Item<Addr> = Item::new("active_submodule");

/// Fraud flag timestamps per submodule, set once by watchers, never cleared
/// Key: submodule address, Value: block time of the first flag
pub const FLAGGED_AT: Map<&Addr, Timestamp> = Map::new("flagged_at");

/// Enrolled watcher addresses
/// Key: watcher address, Value: bool (true if enrolled)
pub const WATCHERS: Map<&Addr, bool> = Map::new("watchers");

/// Provisional verification ledger
/// Key: 32-byte message id as &[u8], Value: ProvisionalEntry
pub const PROVISIONAL: Map<&[u8], ProvisionalEntry> = Map::new("provisional");
