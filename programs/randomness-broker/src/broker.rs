//! Commit-reveal state transitions over [`RandomnessState`].
//!
//! Every transition takes the caller, the current ledger slot and the oracle
//! view as explicit inputs, runs all of its checks first and only then writes.
//! A transition that returns an error has not modified the state.

use anchor_lang::prelude::*;

use crate::constants::REVEAL_WINDOW_SLOTS;
use crate::errors::BrokerError;
use crate::guard::require_authorized;
use crate::oracle::{RandomnessOracle, Reveal};
use crate::state::RandomnessState;

/// Claim an empty randomness state for `caller`.
pub fn initialize(state: &mut RandomnessState, caller: Pubkey, bump: u8) -> Result<()> {
    require!(!state.is_initialized(), BrokerError::AlreadyInitialized);

    state.authorized_user = caller;
    state.randomness_account = Pubkey::default();
    state.commit_slot = 0;
    state.seed_slot = 0;
    state.random_value = 0;
    state.latest_result = false;
    state.status = RandomnessState::STATUS_IDLE;
    state.bump = bump;
    Ok(())
}

/// Bind a freshly committed oracle account as the single active request.
///
/// The oracle commitment must come from the slot right before `current_slot`,
/// i.e. the commit instruction ran in the same transaction. Any older
/// commitment may already have been revealed to the world.
pub fn request_randomness(
    state: &mut RandomnessState,
    caller: Pubkey,
    randomness_account: Pubkey,
    current_slot: u64,
    oracle: &impl RandomnessOracle,
) -> Result<()> {
    require_authorized(state, &caller)?;
    require_keys_neq!(
        randomness_account,
        Pubkey::default(),
        BrokerError::InvalidOracleReference
    );
    require_keys_eq!(
        oracle.key(),
        randomness_account,
        BrokerError::InvalidOracleReference
    );
    require!(
        !oracle.is_revealed(),
        BrokerError::RandomnessAlreadyRevealed
    );

    let seed_slot = oracle.seed_slot();
    require!(
        seed_slot.checked_add(1) == Some(current_slot),
        BrokerError::RandomnessAlreadyRevealed
    );

    state.randomness_account = randomness_account;
    state.commit_slot = current_slot;
    state.seed_slot = seed_slot;
    state.status = RandomnessState::STATUS_PENDING;
    Ok(())
}

/// Resolve the active request from the oracle's revealed value.
///
/// The value is only readable in the slot it was revealed in; a reveal from
/// an earlier slot is reported as not resolved.
///
/// Returns the stored `(random_value, latest_result)` pair.
pub fn get_randomness(
    state: &mut RandomnessState,
    caller: Pubkey,
    current_slot: u64,
    oracle: &impl RandomnessOracle,
) -> Result<(u128, bool)> {
    require_authorized(state, &caller)?;
    require!(state.has_request(), BrokerError::NoActiveRequest);
    require_keys_eq!(
        oracle.key(),
        state.randomness_account,
        BrokerError::InvalidOracleReference
    );
    require!(
        state.status != RandomnessState::STATUS_RESOLVED,
        BrokerError::RandomnessAlreadyRevealed
    );
    require!(
        oracle.seed_slot() == state.seed_slot,
        BrokerError::RandomnessExpired
    );
    require!(
        current_slot <= state.commit_slot.saturating_add(REVEAL_WINDOW_SLOTS),
        BrokerError::RandomnessExpired
    );

    let revealed = match oracle.reveal() {
        Reveal::Revealed { value } => value,
        Reveal::Pending | Reveal::Stale => return err!(BrokerError::RandomnessNotResolved),
    };

    let random_value = RandomnessState::derive_value(&revealed);
    let latest_result = RandomnessState::derive_result(random_value);

    state.random_value = random_value;
    state.latest_result = latest_result;
    state.status = RandomnessState::STATUS_RESOLVED;
    Ok((random_value, latest_result))
}
