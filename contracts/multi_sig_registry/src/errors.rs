use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    // authorization
    Unauthorized = 1,

    // validation
    InvalidThreshold = 2,
    InvalidIdentity = 3,
    EmptySignerSet = 4,
    SignerAlreadyExists = 5,
    SignerNotFound = 6,
    CannotRemoveAllSigners = 7,
    InsufficientBalance = 8,
    InvalidAmount = 9,

    // state conflicts
    PolicyChangePending = 10,
    TransferPending = 11,
    ProposalNotPending = 12,
    AlreadyVoted = 13,
    ProposalNotFound = 14,
    AccountNotFound = 15,
}
