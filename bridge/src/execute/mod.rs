//! Execute handlers for the CAT bridge contract.
//!
//! Handlers are grouped by category:
//! - `outgoing` - BridgeOut (burn and emit through the relay)
//! - `incoming` - BridgeIn (verify, consume, credit)
//! - `config` - Foreign emitter registration
//! - `admin` - Ownership transfer and mint authority
//! - `token` - cw20 transfers, allowances, burn and administrative mint

mod admin;
mod config;
mod incoming;
mod outgoing;
mod token;

pub use admin::*;
pub use config::*;
pub use incoming::*;
pub use outgoing::*;
pub use token::*;
