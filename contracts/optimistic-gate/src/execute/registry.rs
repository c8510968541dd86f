//! Owner operations handlers.
//!
//! This module handles:
//! - Watcher enrollment/unenrollment
//! - Submodule switch (remediation after a fraud flag)

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{ACTIVE_SUBMODULE, CONFIG, FLAGGED_AT, WATCHERS};

// ============================================================================
// Watcher Management
// ============================================================================

/// Enroll a watcher address (owner only).
pub fn execute_enroll_watcher(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let watcher_addr = deps.api.addr_validate(&address)?;
    WATCHERS.save(deps.storage, &watcher_addr, &true)?;

    Ok(Response::new()
        .add_attribute("method", "enroll_watcher")
        .add_attribute("watcher", watcher_addr.to_string()))
}

/// Unenroll a watcher address (owner only).
pub fn execute_unenroll_watcher(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let watcher_addr = deps.api.addr_validate(&address)?;
    WATCHERS.remove(deps.storage, &watcher_addr);

    Ok(Response::new()
        .add_attribute("method", "unenroll_watcher")
        .add_attribute("watcher", watcher_addr.to_string()))
}

// ============================================================================
// Submodule Switch
// ============================================================================

/// Replace the active submodule (owner only).
///
/// Remediation path: the outgoing submodule must already be flagged, and the
/// incoming one must not be. The outgoing submodule's flag is not cleared, so
/// ledger entries recorded under it stay permanently unverifiable.
pub fn execute_switch_submodule(
    deps: DepsMut,
    info: MessageInfo,
    submodule: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let active = ACTIVE_SUBMODULE.load(deps.storage)?;
    if !FLAGGED_AT.has(deps.storage, &active) {
        return Err(ContractError::ActiveSubmoduleNotFlagged);
    }

    let new_submodule = deps.api.addr_validate(&submodule)?;
    if FLAGGED_AT.has(deps.storage, &new_submodule) {
        return Err(ContractError::TargetSubmoduleFlagged {
            submodule: new_submodule.to_string(),
        });
    }

    ACTIVE_SUBMODULE.save(deps.storage, &new_submodule)?;

    Ok(Response::new()
        .add_attribute("method", "switch_submodule")
        .add_attribute("old_submodule", active.to_string())
        .add_attribute("new_submodule", new_submodule.to_string()))
}
