use anchor_lang::prelude::*;

use crate::errors::BrokerError;
use crate::state::RandomnessState;

/// Whether `caller` owns `state`.
pub fn is_authorized(state: &RandomnessState, caller: &Pubkey) -> bool {
    state.authorized_user == *caller
}

/// Fail with [`BrokerError::Unauthorized`] unless `caller` owns `state`.
///
/// First check of every mutating broker transition. Never touches `state`.
pub fn require_authorized(state: &RandomnessState, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(state.authorized_user, *caller, BrokerError::Unauthorized);
    Ok(())
}
