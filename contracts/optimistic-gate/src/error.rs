//! Error types for the Optimistic Gate contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller is not a watcher")]
    NotWatcher,

    // ========================================================================
    // Verification Errors
    // ========================================================================

    #[error("Verification rejected by submodule {submodule}")]
    VerificationRejected { submodule: String },

    #[error("Message already pre-verified under the active submodule: {message_id}")]
    AlreadyPreVerified { message_id: String },

    // ========================================================================
    // Submodule Switch Errors
    // ========================================================================

    #[error("Active submodule is not flagged as fraudulent")]
    ActiveSubmoduleNotFlagged,

    #[error("Target submodule is flagged as fraudulent: {submodule}")]
    TargetSubmoduleFlagged { submodule: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid fraud window: must be greater than zero")]
    InvalidFraudWindow,
}
