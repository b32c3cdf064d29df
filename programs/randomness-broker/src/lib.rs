use anchor_lang::prelude::*;

pub mod broker;
pub mod constants;
pub mod errors;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod oracle;
pub mod state;

#[cfg(test)]
mod test_utils;

use instructions::*;

declare_id!("Cr1KAf6PqLd3zQA7WoYVnmkZfokvDQuL7hrZy3k7LH5b");

/// Commit-reveal randomness broker.
///
/// Lets a user consume one verifiable random value at a time from an
/// on-demand oracle network. The oracle commits to a future slothash and
/// later reveals the value; this program tracks which oracle account the
/// user is waiting on and stores the revealed result exactly once.
///
/// ## Request lifecycle
///
/// 1. **Initialize**: the user creates their `RandomnessState` PDA.
/// 2. **Request**: in the same transaction as the oracle commit, the user
///    calls `request_randomness`; the oracle account and current slot are
///    recorded and the state becomes `Pending`.
/// 3. **Reveal**: the oracle publishes the value; together with the reveal
///    the user calls `get_randomness`, which stores the value and its
///    boolean outcome; the state becomes `Resolved`.
/// 4. **Repeat**: a new request overwrites the previous one.
#[program]
pub mod randomness_broker {
    use super::*;

    /// Create the caller's randomness state.
    ///
    /// Fails with `AlreadyInitialized` if it already exists.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Bind a freshly committed oracle randomness account.
    ///
    /// Only callable by the state's `authorized_user`. Replaces any
    /// outstanding request.
    pub fn request_randomness(
        ctx: Context<RequestRandomness>,
        randomness_account: Pubkey,
    ) -> Result<()> {
        instructions::request_randomness::handler(ctx, randomness_account)
    }

    /// Store the revealed value of the pending request.
    ///
    /// Only callable by the state's `authorized_user`, once per request.
    pub fn get_randomness(ctx: Context<GetRandomness>) -> Result<()> {
        instructions::get_randomness::handler(ctx)
    }
}
