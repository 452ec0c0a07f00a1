use soroban_sdk::{Address, Env, Vec};

use crate::account::{is_null_identity, MembershipObserver};
use crate::errors::MultisigError;
use crate::events;
use crate::storage;
use crate::types::AccountState;

pub const MAX_PAGE: u32 = 50;

/// Creates accounts and keeps the signer -> account membership index.
pub struct Registry;

impl Registry {
    pub fn create_account(
        &self,
        env: &Env,
        signers: Vec<Address>,
        threshold: u32,
    ) -> Result<u64, MultisigError> {
        // Repeated entries collapse into a single signer.
        let mut unique: Vec<Address> = Vec::new(env);
        for signer in signers.iter() {
            if !unique.contains(&signer) {
                unique.push_back(signer);
            }
        }

        if unique.is_empty() {
            return Err(MultisigError::EmptySignerSet);
        }

        if threshold == 0 || threshold > unique.len() {
            return Err(MultisigError::InvalidThreshold);
        }

        if unique.iter().any(|s| is_null_identity(env, &s)) {
            return Err(MultisigError::InvalidIdentity);
        }

        let account_id = storage::next_account_id(env);
        let state = AccountState::on_created(unique.clone(), threshold);
        storage::save_account(env, account_id, &state);

        for signer in unique.iter() {
            self.index(env, &signer, account_id);
        }

        events::account_created(env, account_id, &unique, threshold);
        Ok(account_id)
    }

    pub fn is_member(&self, env: &Env, signer: &Address, account_id: u64) -> bool {
        storage::is_member(env, signer, account_id)
    }

    pub fn account_count_of(&self, env: &Env, signer: &Address) -> u32 {
        storage::signer_account_count(env, signer)
    }

    /// One page of the accounts `signer` belongs to, at most `MAX_PAGE` long.
    /// Removals reorder the list.
    pub fn accounts_of(&self, env: &Env, signer: &Address, start: u32, limit: u32) -> Vec<u64> {
        let end = start
            .saturating_add(limit.min(MAX_PAGE))
            .min(storage::signer_account_count(env, signer));

        let mut accounts = Vec::new(env);
        for slot in start..end {
            if let Some(account_id) = storage::signer_account(env, signer, slot) {
                accounts.push_back(account_id);
            }
        }
        accounts
    }

    fn index(&self, env: &Env, signer: &Address, account_id: u64) {
        if storage::is_member(env, signer, account_id) {
            return;
        }
        storage::push_membership(env, signer, account_id);
    }

    fn unindex(&self, env: &Env, signer: &Address, account_id: u64) {
        if let Some(slot) = storage::membership_slot(env, signer, account_id) {
            storage::remove_membership(env, signer, account_id, slot);
        }
    }
}

impl MembershipObserver for Registry {
    fn on_policy_changed(&self, env: &Env, account_id: u64, added: &Vec<Address>, removed: &Vec<Address>) {
        for signer in added.iter() {
            self.index(env, &signer, account_id);
        }
        for signer in removed.iter() {
            self.unindex(env, &signer, account_id);
        }
    }
}
