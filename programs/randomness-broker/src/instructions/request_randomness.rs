use anchor_lang::prelude::*;

use crate::broker;
use crate::constants::RANDOMNESS_STATE_SEED;
use crate::errors::BrokerError;
use crate::events::RandomnessRequested;
use crate::guard::is_authorized;
use crate::oracle::OracleAccount;
use crate::state::RandomnessState;

/// Accounts required to bind a committed oracle account to the user's state.
///
/// The state PDA is derived from its stored `authorized_user`, so a foreign
/// signer fails the authorization constraint rather than the seeds check.
#[derive(Accounts)]
pub struct RequestRandomness<'info> {
    /// Randomness state PDA. Seeds: `["randomnessState", authorized_user]`.
    #[account(
        mut,
        seeds = [RANDOMNESS_STATE_SEED, randomness_state.authorized_user.as_ref()],
        bump = randomness_state.bump,
    )]
    pub randomness_state: Account<'info, RandomnessState>,

    /// Must be the state's `authorized_user`.
    #[account(
        constraint = is_authorized(&randomness_state, &user.key()) @ BrokerError::Unauthorized,
    )]
    pub user: Signer<'info>,

    /// Oracle randomness account, committed earlier in the same transaction.
    /// CHECK: Owner and layout are validated by `OracleAccount::load`.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Record a new randomness request.
///
/// 1. Reads the current slot from the `Clock` sysvar.
/// 2. Parses the oracle account and checks its commitment is fresh.
/// 3. Overwrites any previous request with `randomness_account` and the slot.
/// 4. Emits [`RandomnessRequested`].
pub fn handler(ctx: Context<RequestRandomness>, randomness_account: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let oracle = OracleAccount::load(
        &ctx.accounts.randomness_account_data.to_account_info(),
        &clock,
    )?;
    let user = ctx.accounts.user.key();

    let state = &mut ctx.accounts.randomness_state;
    broker::request_randomness(state, user, randomness_account, clock.slot, &oracle)?;

    emit!(RandomnessRequested {
        authorized_user: user,
        randomness_account,
        commit_slot: state.commit_slot,
        seed_slot: state.seed_slot,
    });

    msg!("Randomness requested. Commit slot: {}", state.commit_slot);
    Ok(())
}
