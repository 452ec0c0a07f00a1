use soroban_sdk::{contractclient, Address, Env};

/// Custody ledger holding the value of every account created by the registry.
///
/// `transfer` must be all-or-nothing: it either moves the full amount out of
/// the account's custody to `recipient`, or fails and moves nothing.
#[contractclient(name = "LedgerClient")]
pub trait Ledger {
    fn balance_of(env: Env, account_id: u64) -> i128;

    fn transfer(env: Env, account_id: u64, recipient: Address, amount: i128);
}
