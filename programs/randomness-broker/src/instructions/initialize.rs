use anchor_lang::prelude::*;

use crate::broker;
use crate::constants::RANDOMNESS_STATE_SEED;
use crate::events::RandomnessStateInitialized;
use crate::state::RandomnessState;

/// Accounts required to create a user's randomness state.
///
/// `init_if_needed` lets an existing state reach the handler, which then
/// rejects it with `AlreadyInitialized` instead of overwriting it.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Per-user randomness state PDA. Seeds: `["randomnessState", user]`.
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + RandomnessState::INIT_SPACE,
        seeds = [RANDOMNESS_STATE_SEED, user.key().as_ref()],
        bump,
    )]
    pub randomness_state: Account<'info, RandomnessState>,

    /// The user who will own the state; pays rent.
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Initialize the randomness state with `user` as its only authorized caller.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let state_key = ctx.accounts.randomness_state.key();
    let user = ctx.accounts.user.key();

    broker::initialize(
        &mut ctx.accounts.randomness_state,
        user,
        ctx.bumps.randomness_state,
    )?;

    emit!(RandomnessStateInitialized {
        state: state_key,
        authorized_user: user,
    });

    msg!("Randomness state initialized for {}", user);
    Ok(())
}
