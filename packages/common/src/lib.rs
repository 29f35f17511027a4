//! Common - Shared Types for CAT Bridge Contracts
//!
//! This package describes the interface of the external message relay that
//! the bridge contract emits through and verifies attestations against.
//! Relay implementations, test mocks and off-chain tooling depend on it so
//! every side agrees on the same message shapes.

pub mod relay;

pub use relay::{
    ParsedVaa, RelayContract, RelayExecuteMsg, RelayQueryMsg, RelayStateResponse,
    SequenceResponse,
};
