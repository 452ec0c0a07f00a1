use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::account::Account;
use crate::errors::MultisigError;
use crate::registry::Registry;
use crate::storage;
use crate::types::{PolicyChange, Policy, Proposal, ProposalState};

#[contract]
pub struct MultiSigRegistry;

#[contractimpl]
impl MultiSigRegistry {
    pub fn __constructor(env: Env, ledger: Address) {
        storage::set_ledger(&env, &ledger);
        storage::extend_instance(&env);
    }

    pub fn create_account(
        env: Env,
        signers: Vec<Address>,
        threshold: u32,
    ) -> Result<u64, MultisigError> {
        storage::extend_instance(&env);
        Registry.create_account(&env, signers, threshold)
    }

    pub fn create_transfer_proposal(
        env: Env,
        account_id: u64,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<u64, MultisigError> {
        caller.require_auth();
        storage::extend_instance(&env);

        Account::load(&env, account_id, &Registry)?
            .create_transfer_proposal(&caller, recipient, amount)
    }

    pub fn create_policy_change_proposal(
        env: Env,
        account_id: u64,
        caller: Address,
        add_signers: Vec<Address>,
        remove_signers: Vec<Address>,
        new_threshold: u32,
    ) -> Result<u64, MultisigError> {
        caller.require_auth();
        storage::extend_instance(&env);

        Account::load(&env, account_id, &Registry)?.create_policy_change_proposal(
            &caller,
            add_signers,
            remove_signers,
            new_threshold,
        )
    }

    pub fn vote(
        env: Env,
        account_id: u64,
        caller: Address,
        proposal_id: u64,
        approve: bool,
    ) -> Result<ProposalState, MultisigError> {
        caller.require_auth();
        storage::extend_instance(&env);

        Account::load(&env, account_id, &Registry)?.vote(&caller, proposal_id, approve)
    }

    pub fn is_member(env: Env, signer: Address, account_id: u64) -> bool {
        Registry.is_member(&env, &signer, account_id)
    }

    pub fn get_signer_accounts(env: Env, signer: Address, start: u32, limit: u32) -> Vec<u64> {
        Registry.accounts_of(&env, &signer, start, limit)
    }

    pub fn get_signer_account_count(env: Env, signer: Address) -> u32 {
        Registry.account_count_of(&env, &signer)
    }

    pub fn get_account_count(env: Env) -> u64 {
        storage::account_count(&env)
    }

    pub fn get_signers(env: Env, account_id: u64) -> Result<Vec<Address>, MultisigError> {
        Ok(storage::load_account(&env, account_id)?.signers)
    }

    pub fn get_threshold(env: Env, account_id: u64) -> Result<u32, MultisigError> {
        Ok(storage::load_account(&env, account_id)?.threshold)
    }

    pub fn get_policy(env: Env, account_id: u64) -> Result<Policy, MultisigError> {
        let state = storage::load_account(&env, account_id)?;
        Ok(Policy {
            signer_count: state.signers.len(),
            threshold: state.threshold,
        })
    }

    pub fn is_signer(env: Env, account_id: u64, signer: Address) -> bool {
        storage::load_account(&env, account_id)
            .map(|state| state.is_signer(&signer))
            .unwrap_or(false)
    }

    pub fn get_proposal(
        env: Env,
        account_id: u64,
        proposal_id: u64,
    ) -> Result<Proposal, MultisigError> {
        storage::load_proposal(&env, account_id, proposal_id)
    }

    pub fn get_proposal_count(env: Env, account_id: u64) -> Result<u64, MultisigError> {
        Ok(storage::load_account(&env, account_id)?.proposal_count)
    }

    pub fn has_voted(env: Env, account_id: u64, proposal_id: u64, signer: Address) -> bool {
        storage::vote_cast(&env, account_id, proposal_id, &signer).is_some()
    }

    pub fn get_pending_transfer_total(env: Env, account_id: u64) -> Result<i128, MultisigError> {
        Ok(storage::load_account(&env, account_id)?.pending_transfer_total)
    }

    pub fn is_policy_change_active(env: Env, account_id: u64) -> Result<bool, MultisigError> {
        Ok(storage::load_account(&env, account_id)?.is_policy_change_active())
    }

    pub fn pending_policy_change(
        env: Env,
        account_id: u64,
    ) -> Result<Option<PolicyChange>, MultisigError> {
        Account::load(&env, account_id, &Registry)?.pending_policy_change()
    }

    pub fn get_balance(env: Env, account_id: u64) -> Result<i128, MultisigError> {
        Ok(Account::load(&env, account_id, &Registry)?.balance())
    }
}
