//! Protocol core handlers.
//!
//! - `PreVerify` - optimistic acceptance: the active submodule checks the
//!   message, then a provisional ledger entry starts the fraud window
//! - `MarkFraudulent` - a watcher permanently flags a submodule

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, message_id};
use crate::state::{ProvisionalEntry, ACTIVE_SUBMODULE, FLAGGED_AT, PROVISIONAL, WATCHERS};
use crate::submodule::query_submodule_verify;

/// Execute handler for optimistic pre-verification (anyone).
pub fn execute_pre_verify(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    metadata: Binary,
    message: Binary,
) -> Result<Response, ContractError> {
    let submodule = ACTIVE_SUBMODULE.load(deps.storage)?;

    // The submodule's own check is a hard prerequisite, not optimistic
    let accepted = query_submodule_verify(&deps.querier, &submodule, &metadata, &message)?;
    if !accepted {
        return Err(ContractError::VerificationRejected {
            submodule: submodule.to_string(),
        });
    }

    let id = message_id(message.as_slice());

    // A live entry may be replaced only after its submodule was abandoned
    // (flagged and switched away); under the active submodule it is final.
    if let Some(existing) = PROVISIONAL.may_load(deps.storage, &id)? {
        if existing.submodule == submodule {
            return Err(ContractError::AlreadyPreVerified {
                message_id: bytes32_to_hex(&id),
            });
        }
    }

    let entry = ProvisionalEntry {
        submodule: submodule.clone(),
        verified_at: env.block.time,
    };
    PROVISIONAL.save(deps.storage, &id, &entry)?;

    Ok(Response::new()
        .add_attribute("method", "pre_verify")
        .add_attribute("message_id", bytes32_to_hex(&id))
        .add_attribute("submodule", submodule.to_string())
        .add_attribute("verified_at", env.block.time.seconds().to_string()))
}

/// Execute handler for flagging a submodule as fraudulent (watcher only).
pub fn execute_mark_fraudulent(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    submodule: String,
) -> Result<Response, ContractError> {
    // Strictly the watcher role; the owner does not implicitly hold it
    let is_watcher = WATCHERS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false);
    if !is_watcher {
        return Err(ContractError::NotWatcher);
    }

    let submodule_addr = deps.api.addr_validate(&submodule)?;

    // First flag wins; re-flagging keeps the original timestamp
    let flagged_at = match FLAGGED_AT.may_load(deps.storage, &submodule_addr)? {
        Some(existing) => existing,
        None => {
            FLAGGED_AT.save(deps.storage, &submodule_addr, &env.block.time)?;
            env.block.time
        }
    };

    Ok(Response::new()
        .add_attribute("method", "mark_fraudulent")
        .add_attribute("submodule", submodule_addr.to_string())
        .add_attribute("flagged_by", info.sender.to_string())
        .add_attribute("flagged_at", flagged_at.seconds().to_string()))
}
