use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::MultisigError;
use crate::events;
use crate::ledger::LedgerClient;
use crate::storage;
use crate::types::{
    AccountState, PolicyChange, Proposal, ProposalKind, ProposalState, TransferPayload,
};

/// Receives the membership delta of every policy change an account applies.
pub trait MembershipObserver {
    fn on_policy_changed(&self, env: &Env, account_id: u64, added: &Vec<Address>, removed: &Vec<Address>);
}

/// The registry contract itself stands in for the null identity: custody can
/// never be signed for, or paid out to, the custodian.
pub(crate) fn is_null_identity(env: &Env, identity: &Address) -> bool {
    *identity == env.current_contract_address()
}

impl AccountState {
    /// Construction hook run by the registry once the initial signer set and
    /// threshold have been validated.
    pub fn on_created(signers: Vec<Address>, threshold: u32) -> Self {
        AccountState {
            signers,
            threshold,
            proposal_count: 0,
            pending_transfer_total: 0,
            pending_transfers: 0,
            policy_change: None,
        }
    }

    pub fn is_signer(&self, identity: &Address) -> bool {
        self.signers.contains(identity)
    }

    pub fn is_policy_change_active(&self) -> bool {
        self.policy_change.is_some()
    }

    fn require_signer(&self, caller: &Address) -> Result<(), MultisigError> {
        if !self.is_signer(caller) {
            return Err(MultisigError::Unauthorized);
        }
        Ok(())
    }
}

/// One account's approval state machine, loaded for the duration of a single
/// invocation. Mutating operations validate everything before writing.
pub struct Account<'a, O: MembershipObserver> {
    env: &'a Env,
    id: u64,
    state: AccountState,
    observer: &'a O,
}

impl<'a, O: MembershipObserver> Account<'a, O> {
    pub fn load(env: &'a Env, id: u64, observer: &'a O) -> Result<Self, MultisigError> {
        let state = storage::load_account(env, id)?;
        Ok(Account {
            env,
            id,
            state,
            observer,
        })
    }

    pub fn create_transfer_proposal(
        &mut self,
        caller: &Address,
        recipient: Address,
        amount: i128,
    ) -> Result<u64, MultisigError> {
        self.state.require_signer(caller)?;

        if self.state.is_policy_change_active() {
            return Err(MultisigError::PolicyChangePending);
        }

        if amount <= 0 {
            return Err(MultisigError::InvalidAmount);
        }

        if is_null_identity(self.env, &recipient) {
            return Err(MultisigError::InvalidIdentity);
        }

        let balance = self.ledger().balance_of(&self.id);
        if amount > balance - self.state.pending_transfer_total {
            return Err(MultisigError::InsufficientBalance);
        }

        self.state.pending_transfer_total += amount;
        self.state.pending_transfers += 1;

        let kind = ProposalKind::Transfer(TransferPayload { recipient, amount });
        Ok(self.open(caller, kind))
    }

    pub fn create_policy_change_proposal(
        &mut self,
        caller: &Address,
        add_signers: Vec<Address>,
        remove_signers: Vec<Address>,
        new_threshold: u32,
    ) -> Result<u64, MultisigError> {
        self.state.require_signer(caller)?;

        if self.state.pending_transfers > 0 {
            return Err(MultisigError::TransferPending);
        }

        if self.state.is_policy_change_active() {
            return Err(MultisigError::PolicyChangePending);
        }

        let result_count = self.state.signers.len() as i64 + add_signers.len() as i64
            - remove_signers.len() as i64;
        if result_count < 1 {
            return Err(MultisigError::CannotRemoveAllSigners);
        }

        if new_threshold as i64 > result_count {
            return Err(MultisigError::InvalidThreshold);
        }

        if add_signers.iter().any(|s| is_null_identity(self.env, &s)) {
            return Err(MultisigError::InvalidIdentity);
        }

        let mut incoming: Vec<Address> = Vec::new(self.env);
        for signer in add_signers.iter() {
            if self.state.is_signer(&signer) || incoming.contains(&signer) {
                return Err(MultisigError::SignerAlreadyExists);
            }
            incoming.push_back(signer);
        }

        let mut outgoing: Vec<Address> = Vec::new(self.env);
        for signer in remove_signers.iter() {
            if !self.state.is_signer(&signer) || outgoing.contains(&signer) {
                return Err(MultisigError::SignerNotFound);
            }
            outgoing.push_back(signer);
        }

        if new_threshold < 1 {
            return Err(MultisigError::InvalidThreshold);
        }

        // Claimed before `open` so a threshold-1 resolution can release it.
        self.state.policy_change = Some(self.state.proposal_count + 1);

        let kind = ProposalKind::PolicyChange(PolicyChange {
            add_signers,
            remove_signers,
            new_threshold,
        });
        Ok(self.open(caller, kind))
    }

    pub fn vote(
        &mut self,
        caller: &Address,
        proposal_id: u64,
        approve: bool,
    ) -> Result<ProposalState, MultisigError> {
        self.state.require_signer(caller)?;

        let mut proposal = storage::load_proposal(self.env, self.id, proposal_id)?;
        if proposal.state != ProposalState::Pending {
            return Err(MultisigError::ProposalNotPending);
        }

        if storage::vote_cast(self.env, self.id, proposal_id, caller).is_some() {
            return Err(MultisigError::AlreadyVoted);
        }

        self.cast(&mut proposal, caller, approve);
        self.resolve(&mut proposal);

        storage::save_proposal(self.env, self.id, &proposal);
        self.save();
        Ok(proposal.state)
    }

    pub fn pending_policy_change(&self) -> Result<Option<PolicyChange>, MultisigError> {
        let Some(proposal_id) = self.state.policy_change else {
            return Ok(None);
        };
        match storage::load_proposal(self.env, self.id, proposal_id)?.kind {
            ProposalKind::PolicyChange(change) => Ok(Some(change)),
            ProposalKind::Transfer(_) => Ok(None),
        }
    }

    pub fn balance(&self) -> i128 {
        self.ledger().balance_of(&self.id)
    }

    fn ledger(&self) -> LedgerClient<'a> {
        LedgerClient::new(self.env, &storage::ledger(self.env))
    }

    fn save(&self) {
        storage::save_account(self.env, self.id, &self.state);
    }

    /// Allocates the next proposal id, casts the creator's approving vote and
    /// runs resolution like any other vote.
    fn open(&mut self, caller: &Address, kind: ProposalKind) -> u64 {
        self.state.proposal_count += 1;

        let mut proposal = Proposal {
            id: self.state.proposal_count,
            proposer: caller.clone(),
            kind,
            state: ProposalState::Pending,
            threshold: self.state.threshold,
            votes_for: 0,
            votes_against: 0,
            executed: false,
        };
        events::proposal_created(self.env, self.id, &proposal);

        self.cast(&mut proposal, caller, true);
        self.resolve(&mut proposal);

        storage::save_proposal(self.env, self.id, &proposal);
        self.save();
        proposal.id
    }

    fn cast(&self, proposal: &mut Proposal, voter: &Address, approve: bool) {
        storage::record_vote(self.env, self.id, proposal.id, voter, approve);
        if approve {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }
        events::vote_cast(self.env, self.id, proposal.id, voter, approve);
    }

    fn resolve(&mut self, proposal: &mut Proposal) {
        let signer_count = self.state.signers.len();

        if proposal.votes_for >= proposal.threshold {
            proposal.state = ProposalState::Approved;
            self.release(proposal);
            self.apply(proposal);
            events::proposal_approved(self.env, self.id, proposal);
        } else if proposal.votes_against > signer_count.saturating_sub(proposal.threshold) {
            // Remaining possible approvals can no longer reach the threshold.
            proposal.state = ProposalState::Rejected;
            self.release(proposal);
            events::proposal_rejected(self.env, self.id, proposal);
        }
    }

    /// Drops the proposal's hold on the account: the transfer reservation or
    /// the policy change slot.
    fn release(&mut self, proposal: &Proposal) {
        match &proposal.kind {
            ProposalKind::Transfer(transfer) => {
                self.state.pending_transfer_total -= transfer.amount;
                self.state.pending_transfers -= 1;
            }
            ProposalKind::PolicyChange(_) => {
                self.state.policy_change = None;
            }
        }
    }

    fn apply(&mut self, proposal: &mut Proposal) {
        match &proposal.kind {
            ProposalKind::Transfer(transfer) => {
                let moved = matches!(
                    self.ledger()
                        .try_transfer(&self.id, &transfer.recipient, &transfer.amount),
                    Ok(Ok(()))
                );
                if !moved {
                    log!(self.env, "ledger refused transfer", self.id, proposal.id);
                    events::transfer_failed(
                        self.env,
                        self.id,
                        proposal.id,
                        &transfer.recipient,
                        transfer.amount,
                    );
                }
                proposal.executed = moved;
            }
            ProposalKind::PolicyChange(change) => {
                self.apply_policy_change(change);
                proposal.executed = true;
            }
        }
    }

    fn apply_policy_change(&mut self, change: &PolicyChange) {
        for signer in change.remove_signers.iter() {
            if let Some(index) = self.state.signers.first_index_of(&signer) {
                self.state.signers.remove(index);
            }
        }
        for signer in change.add_signers.iter() {
            self.state.signers.push_back(signer);
        }
        self.state.threshold = change.new_threshold;

        self.observer.on_policy_changed(
            self.env,
            self.id,
            &change.add_signers,
            &change.remove_signers,
        );
        events::policy_changed(self.env, self.id, change);
    }
}
