#![cfg(test)]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum MockLedgerKey {
    Custody(u64),
    Holding(Address),
    Offline,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockLedgerError {
    Offline = 1,
    Overdrawn = 2,
}

/// In-memory custody ledger keyed by account id. `set_offline(true)` makes
/// every transfer fail without moving anything.
#[contract]
pub struct MockLedger;

#[contractimpl]
impl MockLedger {
    pub fn deposit(env: Env, account_id: u64, amount: i128) {
        let balance = Self::balance_of(env.clone(), account_id);
        env.storage()
            .instance()
            .set(&MockLedgerKey::Custody(account_id), &(balance + amount));
    }

    pub fn set_offline(env: Env, offline: bool) {
        env.storage().instance().set(&MockLedgerKey::Offline, &offline);
    }

    pub fn balance_of(env: Env, account_id: u64) -> i128 {
        env.storage()
            .instance()
            .get(&MockLedgerKey::Custody(account_id))
            .unwrap_or(0)
    }

    pub fn holding(env: Env, holder: Address) -> i128 {
        env.storage()
            .instance()
            .get(&MockLedgerKey::Holding(holder))
            .unwrap_or(0)
    }

    pub fn transfer(
        env: Env,
        account_id: u64,
        recipient: Address,
        amount: i128,
    ) -> Result<(), MockLedgerError> {
        let offline: bool = env
            .storage()
            .instance()
            .get(&MockLedgerKey::Offline)
            .unwrap_or(false);
        if offline {
            return Err(MockLedgerError::Offline);
        }

        let balance = Self::balance_of(env.clone(), account_id);
        if amount > balance {
            return Err(MockLedgerError::Overdrawn);
        }

        let held = Self::holding(env.clone(), recipient.clone());
        env.storage()
            .instance()
            .set(&MockLedgerKey::Custody(account_id), &(balance - amount));
        env.storage()
            .instance()
            .set(&MockLedgerKey::Holding(recipient), &(held + amount));
        Ok(())
    }
}
