use anchor_lang::prelude::*;

/// Per-user randomness record.
///
/// Seeds: `["randomnessState", authorized_user]`
///
/// Only `authorized_user` may mutate this account. At most one request is
/// tracked at a time: a new request overwrites the previous binding.
///
/// Lifecycle: Idle (0) -> Pending (1) -> Resolved (2), and any new request
/// re-enters Pending. Failed instructions never move the record.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct RandomnessState {
    /// The only account allowed to request or consume randomness. Immutable.
    pub authorized_user: Pubkey,
    /// Oracle randomness account bound to the current request, or
    /// `Pubkey::default()` when no request was ever made.
    pub randomness_account: Pubkey,
    /// Ledger slot at which the current request was made. `0` = no request.
    pub commit_slot: u64,
    /// Oracle commitment slot observed when the request was made.
    pub seed_slot: u64,
    /// Last resolved random value.
    pub random_value: u128,
    /// Boolean derived from `random_value`. See [`RandomnessState::derive_result`].
    pub latest_result: bool,
    /// Request lifecycle status. See `STATUS_*` constants.
    pub status: u8,
    /// PDA bump seed cached for efficient re-derivation.
    pub bump: u8,
}

impl RandomnessState {
    /// No request has been made since initialization.
    pub const STATUS_IDLE: u8 = 0;
    /// Request bound to an oracle account, awaiting reveal.
    pub const STATUS_PENDING: u8 = 1;
    /// The bound request has been consumed.
    pub const STATUS_RESOLVED: u8 = 2;

    /// Whether `initialize` has already claimed this record.
    pub fn is_initialized(&self) -> bool {
        self.authorized_user != Pubkey::default()
    }

    /// Whether an oracle account is currently bound.
    pub fn has_request(&self) -> bool {
        self.randomness_account != Pubkey::default()
    }

    /// Map revealed oracle bytes to the stored numeric value: the first
    /// byte, widened.
    pub fn derive_value(revealed: &[u8; 32]) -> u128 {
        u128::from(revealed[0])
    }

    /// Boolean outcome of a random value: `true` when even.
    pub fn derive_result(random_value: u128) -> bool {
        random_value % 2 == 0
    }
}

impl Default for RandomnessState {
    fn default() -> Self {
        Self {
            authorized_user: Pubkey::default(),
            randomness_account: Pubkey::default(),
            commit_slot: 0,
            seed_slot: 0,
            random_value: 0,
            latest_result: false,
            status: Self::STATUS_IDLE,
            bump: 0,
        }
    }
}
