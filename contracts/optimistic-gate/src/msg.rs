//! Message types for the Optimistic Gate contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for watcher and submodule management
    pub owner: String,
    /// Initial submodule contract address (the default checker)
    pub submodule: String,
    /// Fraud contestation window in seconds (immutable after instantiation)
    pub fraud_window_seconds: u64,
    /// Initial watcher addresses (may be empty; watchers can be enrolled later)
    pub watchers: Vec<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Pre-verify a message optimistically
    ///
    /// Authorization: Anyone
    ///
    /// Asks the active submodule to check the message. On acceptance, records
    /// a provisional entry and starts the fraud window. Fails if the submodule
    /// rejects, or if a live entry under the active submodule already exists.
    PreVerify {
        /// Opaque proof metadata passed through to the submodule
        metadata: Binary,
        /// Raw message payload (its keccak256 is the ledger key)
        message: Binary,
    },

    /// Flag a submodule as fraudulent
    ///
    /// Authorization: Watcher only
    ///
    /// Permanently records the flag time for the submodule. The first flag
    /// wins; re-flagging succeeds but keeps the original timestamp.
    MarkFraudulent {
        /// Submodule contract address to flag
        submodule: String,
    },

    /// Enroll a watcher address
    ///
    /// Authorization: Owner only
    EnrollWatcher {
        /// Address to grant the watcher role
        address: String,
    },

    /// Unenroll a watcher address
    ///
    /// Authorization: Owner only
    UnenrollWatcher {
        /// Address to revoke the watcher role
        address: String,
    },

    /// Replace the active submodule
    ///
    /// Authorization: Owner only
    ///
    /// Remediation action: allowed only while the current active submodule is
    /// flagged, and only towards an unflagged target. The old submodule's
    /// flag is kept as historical evidence.
    SwitchSubmodule {
        /// New submodule contract address
        submodule: String,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Check whether a message is finally verified.
    ///
    /// Pure read: true only if a provisional entry exists, its fraud window
    /// has fully elapsed, and the entry's submodule carries no fraud flag at
    /// the time of this query. Never errors; every negative path is `false`.
    #[returns(VerifyResponse)]
    Verify {
        /// Opaque proof metadata (unused on the final-verification path,
        /// kept for interface parity with `PreVerify`)
        metadata: Binary,
        /// Raw message payload
        message: Binary,
    },

    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Configured fraud window in seconds
    #[returns(FraudWindowResponse)]
    FraudWindow {},

    /// Currently active submodule
    #[returns(SubmoduleResponse)]
    Submodule {},

    /// Fraud flag timestamp for a submodule, if any
    #[returns(FlaggedAtResponse)]
    FlaggedAt {
        /// Submodule contract address
        submodule: String,
    },

    /// Whether an address holds the watcher role
    #[returns(IsWatcherResponse)]
    IsWatcher {
        /// Address to check
        address: String,
    },

    /// All enrolled watchers
    #[returns(WatchersResponse)]
    Watchers {},

    /// Message id (keccak256) for a raw message payload
    #[returns(MessageIdResponse)]
    MessageId {
        /// Raw message payload
        message: Binary,
    },

    /// Provisional ledger entry for a message, if any
    #[returns(ProvisionalResponse)]
    ProvisionalVerification {
        /// Raw message payload
        message: Binary,
    },

    /// Paginated enumeration of all provisional entries (state audit)
    #[returns(PendingVerificationsResponse)]
    PendingVerifications {
        /// Message id to start after (exclusive, 32 bytes)
        start_after: Option<Binary>,
        /// Max entries to return (default 10, max 50)
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

/// Response for `Verify`
#[cw_serde]
pub struct VerifyResponse {
    /// Whether the message is finally verified
    pub verified: bool,
}

/// Response for `Config`
#[cw_serde]
pub struct ConfigResponse {
    /// Owner address
    pub owner: Addr,
    /// Fraud window in seconds
    pub fraud_window: u64,
    /// Currently active submodule
    pub submodule: Addr,
}

/// Response for `FraudWindow`
#[cw_serde]
pub struct FraudWindowResponse {
    /// Fraud window in seconds
    pub seconds: u64,
}

/// Response for `Submodule`
#[cw_serde]
pub struct SubmoduleResponse {
    /// Currently active submodule
    pub submodule: Addr,
}

/// Response for `FlaggedAt`
#[cw_serde]
pub struct FlaggedAtResponse {
    /// Block time of the first fraud flag, or None if never flagged
    pub flagged_at: Option<Timestamp>,
}

/// Response for `IsWatcher`
#[cw_serde]
pub struct IsWatcherResponse {
    /// Whether the address is an enrolled watcher
    pub is_watcher: bool,
}

/// Response for `Watchers`
#[cw_serde]
pub struct WatchersResponse {
    /// Enrolled watcher addresses
    pub watchers: Vec<Addr>,
}

/// Response for `MessageId`
#[cw_serde]
pub struct MessageIdResponse {
    /// 32-byte keccak256 message id
    pub message_id: Binary,
}

/// Response for `ProvisionalVerification`
#[cw_serde]
pub struct ProvisionalResponse {
    /// Ledger entry for the message, or None if never pre-verified
    pub entry: Option<ProvisionalStatus>,
}

/// Status of one provisional ledger entry
#[cw_serde]
pub struct ProvisionalStatus {
    /// 32-byte message id
    pub message_id: Binary,
    /// Submodule that accepted the message
    pub submodule: Addr,
    /// Block time of pre-verification
    pub verified_at: Timestamp,
    /// First block time at which the entry can finalize
    pub finalize_after: Timestamp,
    /// Whether the entry's submodule is currently flagged
    pub flagged: bool,
}

/// Response for `PendingVerifications`
#[cw_serde]
pub struct PendingVerificationsResponse {
    /// Provisional entries, ordered by message id
    pub entries: Vec<ProvisionalStatus>,
}
