use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val};

use crate::errors::MultisigError;
use crate::types::{AccountState, DataKey, Proposal};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Accounts, proposals and the membership index outlive any single session.
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let storage = env.storage().persistent();
    let value = storage.get(key);
    if value.is_some() {
        storage.extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    value
}

fn write<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    let storage = env.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn set_ledger(env: &Env, ledger: &Address) {
    env.storage().instance().set(&DataKey::Ledger, ledger);
}

pub fn ledger(env: &Env) -> Address {
    // Written by the constructor, so always present.
    env.storage().instance().get(&DataKey::Ledger).unwrap()
}

pub fn account_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AccountCount)
        .unwrap_or(0u64)
}

pub fn next_account_id(env: &Env) -> u64 {
    let account_id = account_count(env) + 1;
    env.storage().instance().set(&DataKey::AccountCount, &account_id);
    account_id
}

pub fn load_account(env: &Env, account_id: u64) -> Result<AccountState, MultisigError> {
    read(env, &DataKey::Account(account_id)).ok_or(MultisigError::AccountNotFound)
}

pub fn save_account(env: &Env, account_id: u64, state: &AccountState) {
    write(env, &DataKey::Account(account_id), state);
}

pub fn load_proposal(
    env: &Env,
    account_id: u64,
    proposal_id: u64,
) -> Result<Proposal, MultisigError> {
    read(env, &DataKey::Proposal(account_id, proposal_id)).ok_or(MultisigError::ProposalNotFound)
}

pub fn save_proposal(env: &Env, account_id: u64, proposal: &Proposal) {
    write(env, &DataKey::Proposal(account_id, proposal.id), proposal);
}

pub fn vote_cast(env: &Env, account_id: u64, proposal_id: u64, signer: &Address) -> Option<bool> {
    read(env, &DataKey::Vote(account_id, proposal_id, signer.clone()))
}

pub fn record_vote(env: &Env, account_id: u64, proposal_id: u64, signer: &Address, approve: bool) {
    write(
        env,
        &DataKey::Vote(account_id, proposal_id, signer.clone()),
        &approve,
    );
}

pub fn is_member(env: &Env, signer: &Address, account_id: u64) -> bool {
    membership_slot(env, signer, account_id).is_some()
}

// Each signer's accounts are kept one entry per slot, so indexing a
// membership touches a fixed number of entries however many accounts the
// signer belongs to.
pub fn membership_slot(env: &Env, signer: &Address, account_id: u64) -> Option<u32> {
    read(env, &DataKey::Membership(signer.clone(), account_id))
}

pub fn signer_account_count(env: &Env, signer: &Address) -> u32 {
    read(env, &DataKey::SignerAccountCount(signer.clone())).unwrap_or(0)
}

pub fn signer_account(env: &Env, signer: &Address, slot: u32) -> Option<u64> {
    read(env, &DataKey::SignerAccount(signer.clone(), slot))
}

pub fn push_membership(env: &Env, signer: &Address, account_id: u64) {
    let slot = signer_account_count(env, signer);
    write(env, &DataKey::SignerAccount(signer.clone(), slot), &account_id);
    write(env, &DataKey::Membership(signer.clone(), account_id), &slot);
    write(env, &DataKey::SignerAccountCount(signer.clone()), &(slot + 1));
}

/// Swap-removes the membership: the signer's last slot moves into the freed one.
pub fn remove_membership(env: &Env, signer: &Address, account_id: u64, slot: u32) {
    let storage = env.storage().persistent();
    let last = signer_account_count(env, signer) - 1;

    if slot != last {
        if let Some(moved) = signer_account(env, signer, last) {
            write(env, &DataKey::SignerAccount(signer.clone(), slot), &moved);
            write(env, &DataKey::Membership(signer.clone(), moved), &slot);
        }
    }

    storage.remove(&DataKey::SignerAccount(signer.clone(), last));
    storage.remove(&DataKey::Membership(signer.clone(), account_id));
    if last == 0 {
        storage.remove(&DataKey::SignerAccountCount(signer.clone()));
    } else {
        write(env, &DataKey::SignerAccountCount(signer.clone()), &last);
    }
}
