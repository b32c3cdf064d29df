use anchor_lang::prelude::*;

/// Emitted when a user creates their randomness state.
#[event]
pub struct RandomnessStateInitialized {
    pub state: Pubkey,
    pub authorized_user: Pubkey,
}

/// Emitted when a request binds a new oracle account.
#[event]
pub struct RandomnessRequested {
    pub authorized_user: Pubkey,
    pub randomness_account: Pubkey,
    pub commit_slot: u64,
    pub seed_slot: u64,
}

/// Emitted when a pending request is resolved with the revealed value.
#[event]
pub struct RandomnessResolved {
    pub authorized_user: Pubkey,
    pub randomness_account: Pubkey,
    pub random_value: u128,
    pub latest_result: bool,
}
