//! Execute handlers for the Optimistic Gate contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `gate` - PreVerify and MarkFraudulent handlers (the protocol core)
//! - `registry` - Watcher enrollment and submodule switch (owner operations)

mod gate;
mod registry;

pub use gate::*;
pub use registry::*;
