//! Submodule checker interface.
//!
//! A submodule is an external contract that performs the actual proof check
//! for a message. The gate only depends on its query interface: given the
//! metadata and the raw message, it answers accept/reject. Any contract
//! implementing this query can be installed as the active submodule.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, QuerierWrapper, StdResult};

/// Query interface every submodule contract must implement.
#[cw_serde]
pub enum SubmoduleQueryMsg {
    /// Check a message against its metadata (proof material).
    Verify {
        /// Opaque proof metadata
        metadata: Binary,
        /// Raw message payload
        message: Binary,
    },
}

/// Response to [`SubmoduleQueryMsg::Verify`].
#[cw_serde]
pub struct SubmoduleVerifyResponse {
    /// Whether the submodule accepts the message
    pub verified: bool,
}

/// Ask a submodule contract to verify a message.
pub fn query_submodule_verify(
    querier: &QuerierWrapper,
    submodule: &Addr,
    metadata: &Binary,
    message: &Binary,
) -> StdResult<bool> {
    let res: SubmoduleVerifyResponse = querier.query_wasm_smart(
        submodule,
        &SubmoduleQueryMsg::Verify {
            metadata: metadata.clone(),
            message: message.clone(),
        },
    )?;
    Ok(res.verified)
}
