use anchor_lang::prelude::*;

use crate::broker;
use crate::constants::RANDOMNESS_STATE_SEED;
use crate::errors::BrokerError;
use crate::events::RandomnessResolved;
use crate::guard::is_authorized;
use crate::oracle::OracleAccount;
use crate::state::RandomnessState;

/// Accounts required to resolve the pending request.
#[derive(Accounts)]
pub struct GetRandomness<'info> {
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

    /// The oracle account bound by the last `request_randomness`.
    /// CHECK: Owner and layout are validated by `OracleAccount::load`;
    /// the key is matched against the state by the broker.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Resolve the pending request from the oracle's revealed value.
///
/// Timing failures (`RandomnessNotResolved`, `RandomnessExpired`,
/// `RandomnessAlreadyRevealed`) leave the state untouched; retrying is up
/// to the client.
pub fn handler(ctx: Context<GetRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let oracle = OracleAccount::load(
        &ctx.accounts.randomness_account_data.to_account_info(),
        &clock,
    )?;
    let user = ctx.accounts.user.key();

    let state = &mut ctx.accounts.randomness_state;
    let (random_value, latest_result) =
        broker::get_randomness(state, user, clock.slot, &oracle)?;

    emit!(RandomnessResolved {
        authorized_user: user,
        randomness_account: state.randomness_account,
        random_value,
        latest_result,
    });

    msg!("Randomness value: {}", random_value);
    msg!("Boolean result: {}", latest_result);
    Ok(())
}
