use soroban_sdk::{contractevent, Address, Env, Vec};

use crate::types::{PolicyChange, Proposal, ProposalKind};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountCreated {
    #[topic]
    pub account_id: u64,
    pub signers: Vec<Address>,
    pub threshold: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    #[topic]
    pub account_id: u64,
    #[topic]
    pub proposal_id: u64,
    pub proposer: Address,
    pub kind: ProposalKind,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    #[topic]
    pub account_id: u64,
    #[topic]
    pub proposal_id: u64,
    pub voter: Address,
    pub approve: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalApproved {
    #[topic]
    pub account_id: u64,
    #[topic]
    pub proposal_id: u64,
    pub votes_for: u32,
    pub votes_against: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRejected {
    #[topic]
    pub account_id: u64,
    #[topic]
    pub proposal_id: u64,
    pub votes_for: u32,
    pub votes_against: u32,
}

/// The ledger refused an approved transfer; no funds moved.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferFailed {
    #[topic]
    pub account_id: u64,
    #[topic]
    pub proposal_id: u64,
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyChanged {
    #[topic]
    pub account_id: u64,
    pub add_signers: Vec<Address>,
    pub remove_signers: Vec<Address>,
    pub new_threshold: u32,
}

pub(crate) fn account_created(env: &Env, account_id: u64, signers: &Vec<Address>, threshold: u32) {
    AccountCreated {
        account_id,
        signers: signers.clone(),
        threshold,
    }
    .publish(env);
}

pub(crate) fn proposal_created(env: &Env, account_id: u64, proposal: &Proposal) {
    ProposalCreated {
        account_id,
        proposal_id: proposal.id,
        proposer: proposal.proposer.clone(),
        kind: proposal.kind.clone(),
    }
    .publish(env);
}

pub(crate) fn vote_cast(env: &Env, account_id: u64, proposal_id: u64, voter: &Address, approve: bool) {
    VoteCast {
        account_id,
        proposal_id,
        voter: voter.clone(),
        approve,
    }
    .publish(env);
}

pub(crate) fn proposal_approved(env: &Env, account_id: u64, proposal: &Proposal) {
    ProposalApproved {
        account_id,
        proposal_id: proposal.id,
        votes_for: proposal.votes_for,
        votes_against: proposal.votes_against,
    }
    .publish(env);
}

pub(crate) fn proposal_rejected(env: &Env, account_id: u64, proposal: &Proposal) {
    ProposalRejected {
        account_id,
        proposal_id: proposal.id,
        votes_for: proposal.votes_for,
        votes_against: proposal.votes_against,
    }
    .publish(env);
}

pub(crate) fn transfer_failed(env: &Env, account_id: u64, proposal_id: u64, recipient: &Address, amount: i128) {
    TransferFailed {
        account_id,
        proposal_id,
        recipient: recipient.clone(),
        amount,
    }
    .publish(env);
}

pub(crate) fn policy_changed(env: &Env, account_id: u64, change: &PolicyChange) {
    PolicyChanged {
        account_id,
        add_signers: change.add_signers.clone(),
        remove_signers: change.remove_signers.clone(),
        new_threshold: change.new_threshold,
    }
    .publish(env);
}
