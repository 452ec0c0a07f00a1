use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Ledger,
    AccountCount,
    Account(u64),
    Proposal(u64, u64),          // (account_id, proposal_id)
    Vote(u64, u64, Address),     // (account_id, proposal_id, signer)
    Membership(Address, u64),    // (signer, account_id) -> slot
    SignerAccount(Address, u32), // (signer, slot) -> account_id
    SignerAccountCount(Address),
}

/// Lifecycle of a proposal. `Approved` and `Rejected` are terminal.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalState {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferPayload {
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyChange {
    pub add_signers: Vec<Address>,
    pub remove_signers: Vec<Address>,
    pub new_threshold: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalKind {
    Transfer(TransferPayload),
    PolicyChange(PolicyChange),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub kind: ProposalKind,
    pub state: ProposalState,
    /// Account threshold in force when the proposal was created.
    pub threshold: u32,
    pub votes_for: u32,
    pub votes_against: u32,
    /// Set once the effect of an approved proposal has been applied.
    /// An approved transfer the ledger refused stays `false`.
    pub executed: bool,
}

/// Per-account aggregate. Every mutation of an account goes through one
/// load/save of this record within a single invocation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountState {
    pub signers: Vec<Address>,
    pub threshold: u32,
    pub proposal_count: u64,
    pub pending_transfer_total: i128,
    pub pending_transfers: u32,
    pub policy_change: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    pub signer_count: u32,
    pub threshold: u32,
}
