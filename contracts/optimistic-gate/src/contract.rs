//! Optimistic Gate Contract - Entry Points
//!
//! This contract implements an optimistic verification gate for cross-chain
//! messages. The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_enroll_watcher, execute_mark_fraudulent, execute_pre_verify, execute_switch_submodule,
    execute_unenroll_watcher,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_flagged_at, query_fraud_window, query_is_watcher, query_message_id,
    query_pending_verifications, query_provisional_verification, query_submodule, query_verify,
    query_watchers,
};
use crate::state::{Config, ACTIVE_SUBMODULE, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, WATCHERS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let submodule = deps.api.addr_validate(&msg.submodule)?;

    // The fraud window is immutable once set; a zero window would finalize
    // every message instantly and leave watchers no time to contest
    if msg.fraud_window_seconds == 0 {
        return Err(ContractError::InvalidFraudWindow);
    }

    let config = Config {
        owner,
        fraud_window: msg.fraud_window_seconds,
    };
    CONFIG.save(deps.storage, &config)?;
    ACTIVE_SUBMODULE.save(deps.storage, &submodule)?;

    let mut watcher_count = 0u32;
    for watcher_str in msg.watchers {
        let watcher = deps.api.addr_validate(&watcher_str)?;
        WATCHERS.save(deps.storage, &watcher, &true)?;
        watcher_count += 1;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("submodule", submodule)
        .add_attribute("fraud_window", msg.fraud_window_seconds.to_string())
        .add_attribute("watcher_count", watcher_count.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Protocol core
        ExecuteMsg::PreVerify { metadata, message } => {
            execute_pre_verify(deps, env, info, metadata, message)
        }
        ExecuteMsg::MarkFraudulent { submodule } => {
            execute_mark_fraudulent(deps, env, info, submodule)
        }

        // Owner operations
        ExecuteMsg::EnrollWatcher { address } => execute_enroll_watcher(deps, info, address),
        ExecuteMsg::UnenrollWatcher { address } => execute_unenroll_watcher(deps, info, address),
        ExecuteMsg::SwitchSubmodule { submodule } => {
            execute_switch_submodule(deps, info, submodule)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Verify { metadata, message } => {
            to_json_binary(&query_verify(deps, env, metadata, message)?)
        }
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::FraudWindow {} => to_json_binary(&query_fraud_window(deps)?),
        QueryMsg::Submodule {} => to_json_binary(&query_submodule(deps)?),
        QueryMsg::FlaggedAt { submodule } => to_json_binary(&query_flagged_at(deps, submodule)?),
        QueryMsg::IsWatcher { address } => to_json_binary(&query_is_watcher(deps, address)?),
        QueryMsg::Watchers {} => to_json_binary(&query_watchers(deps)?),
        QueryMsg::MessageId { message } => to_json_binary(&query_message_id(message)?),
        QueryMsg::ProvisionalVerification { message } => {
            to_json_binary(&query_provisional_verification(deps, message)?)
        }
        QueryMsg::PendingVerifications { start_after, limit } => {
            to_json_binary(&query_pending_verifications(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
