//! Query handlers for the Optimistic Gate contract.
//!
//! `Verify` is the protocol's final-verification decision. It is a live query,
//! not a state transition: the answer is recomputed from the ledger entry, the
//! clock, and the flag table on every call, and never mutates anything.

use cosmwasm_std::{Binary, Deps, Env, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::hash::message_id;
use crate::msg::{
    ConfigResponse, FlaggedAtResponse, FraudWindowResponse, IsWatcherResponse, MessageIdResponse,
    PendingVerificationsResponse, ProvisionalResponse, ProvisionalStatus, SubmoduleResponse,
    VerifyResponse, WatchersResponse,
};
use crate::state::{ProvisionalEntry, ACTIVE_SUBMODULE, CONFIG, FLAGGED_AT, PROVISIONAL, WATCHERS};

// ============================================================================
// Verification Query
// ============================================================================

/// Query final verification status for a message.
///
/// Returns true only if all of the following hold at query time:
/// - a provisional entry exists for the message id,
/// - the fraud window has fully elapsed since the entry was recorded,
/// - the entry's submodule has never been flagged.
///
/// Every negative path collapses to `false` rather than an error; a not-yet
/// final answer is an expected steady-state outcome. Because flags are
/// append-only, a true answer can later flip to false only if the entry's
/// submodule is flagged afterwards.
pub fn query_verify(
    deps: Deps,
    env: Env,
    _metadata: Binary,
    message: Binary,
) -> StdResult<VerifyResponse> {
    let id = message_id(message.as_slice());

    let Some(entry) = PROVISIONAL.may_load(deps.storage, &id)? else {
        return Ok(VerifyResponse { verified: false });
    };

    let config = CONFIG.load(deps.storage)?;
    if env.block.time < entry.verified_at.plus_seconds(config.fraud_window) {
        return Ok(VerifyResponse { verified: false });
    }

    // Any flag present by now disqualifies, regardless of whether it was
    // raised before or after the window elapsed
    if FLAGGED_AT.has(deps.storage, &entry.submodule) {
        return Ok(VerifyResponse { verified: false });
    }

    Ok(VerifyResponse { verified: true })
}

// ============================================================================
// Configuration Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let submodule = ACTIVE_SUBMODULE.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        fraud_window: config.fraud_window,
        submodule,
    })
}

/// Query the configured fraud window.
pub fn query_fraud_window(deps: Deps) -> StdResult<FraudWindowResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(FraudWindowResponse {
        seconds: config.fraud_window,
    })
}

/// Query the currently active submodule.
pub fn query_submodule(deps: Deps) -> StdResult<SubmoduleResponse> {
    let submodule = ACTIVE_SUBMODULE.load(deps.storage)?;
    Ok(SubmoduleResponse { submodule })
}

/// Query the fraud flag timestamp for a submodule.
pub fn query_flagged_at(deps: Deps, submodule: String) -> StdResult<FlaggedAtResponse> {
    let addr = deps.api.addr_validate(&submodule)?;
    let flagged_at = FLAGGED_AT.may_load(deps.storage, &addr)?;
    Ok(FlaggedAtResponse { flagged_at })
}

// ============================================================================
// Watcher Queries
// ============================================================================

/// Query whether an address is an enrolled watcher.
pub fn query_is_watcher(deps: Deps, address: String) -> StdResult<IsWatcherResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let is_watcher = WATCHERS.may_load(deps.storage, &addr)?.unwrap_or(false);
    Ok(IsWatcherResponse { is_watcher })
}

/// Query all enrolled watchers.
pub fn query_watchers(deps: Deps) -> StdResult<WatchersResponse> {
    let watchers = WATCHERS
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|item| {
            let (addr, enrolled) = item.ok()?;
            if enrolled {
                Some(addr)
            } else {
                None
            }
        })
        .collect();

    Ok(WatchersResponse { watchers })
}

// ============================================================================
// Ledger Queries
// ============================================================================

/// Query the message id for a raw payload.
pub fn query_message_id(message: Binary) -> StdResult<MessageIdResponse> {
    let id = message_id(message.as_slice());
    Ok(MessageIdResponse {
        message_id: Binary::from(id.to_vec()),
    })
}

/// Query the provisional ledger entry for a message.
pub fn query_provisional_verification(
    deps: Deps,
    message: Binary,
) -> StdResult<ProvisionalResponse> {
    let id = message_id(message.as_slice());
    let entry = PROVISIONAL
        .may_load(deps.storage, &id)?
        .map(|entry| provisional_status(deps.storage, &id, entry))
        .transpose()?;

    Ok(ProvisionalResponse { entry })
}

/// Query paginated provisional entries (full state audit).
pub fn query_pending_verifications(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<PendingVerificationsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start: Option<Bound<&[u8]>> = start_after
        .as_ref()
        .map(|id| Bound::exclusive(id.as_slice()));

    let entries: Vec<ProvisionalStatus> = PROVISIONAL
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (id, entry) = item?;
            provisional_status(deps.storage, &id, entry)
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PendingVerificationsResponse { entries })
}

fn provisional_status(
    storage: &dyn Storage,
    id: &[u8],
    entry: ProvisionalEntry,
) -> StdResult<ProvisionalStatus> {
    let config = CONFIG.load(storage)?;
    let flagged = FLAGGED_AT.has(storage, &entry.submodule);
    Ok(ProvisionalStatus {
        message_id: Binary::from(id.to_vec()),
        finalize_after: entry.verified_at.plus_seconds(config.fraud_window),
        submodule: entry.submodule,
        verified_at: entry.verified_at,
        flagged,
    })
}
