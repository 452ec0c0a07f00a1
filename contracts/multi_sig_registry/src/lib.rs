#![no_std]

mod account;
mod errors;
mod events;
mod ledger;
mod multisig;
mod registry;
mod storage;
mod types;

pub use crate::errors::MultisigError;
pub use crate::ledger::{Ledger, LedgerClient};
pub use crate::multisig::{MultiSigRegistry, MultiSigRegistryClient};
pub use crate::types::{
    AccountState, Policy, PolicyChange, Proposal, ProposalKind, ProposalState, TransferPayload,
};

mod testutils;
