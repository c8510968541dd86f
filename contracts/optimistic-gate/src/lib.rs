//! Optimistic Gate Contract - Optimistic Verification for Cross-Chain Messages
//!
//! This contract admits a cross-chain message provisionally as soon as the
//! currently active checker submodule accepts it, then treats the message as
//! finally verified only once a fraud window elapses without that submodule
//! having been flagged by a watcher.
//!
//! # Happy Path
//! 1. Anyone calls `PreVerify`; the active submodule checks the message
//! 2. A provisional ledger entry is recorded and the fraud window starts
//! 3. After the window, `Verify` answers true from the ledger alone
//!
//! # Contestation Path
//! 1. A watcher calls `MarkFraudulent` against a submodule at any time
//! 2. Every message pre-verified under that submodule stops verifying
//! 3. The owner calls `SwitchSubmodule` to install a clean replacement
//! 4. Stuck messages may be pre-verified again under the new submodule
//!
//! # Security
//! - Flags are permanent, append-only evidence (first flag wins)
//! - The submodule can only be switched away from a flagged one
//! - Watcher and owner are independent roles, checked per operation

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod state;
pub mod submodule;

pub use crate::error::ContractError;
pub use crate::hash::{keccak256, message_id};
pub use crate::submodule::{SubmoduleQueryMsg, SubmoduleVerifyResponse};
