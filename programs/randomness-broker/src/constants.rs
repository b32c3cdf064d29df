/// Seed tag of the per-user [`RandomnessState`](crate::state::RandomnessState) PDA.
///
/// Seeds: `["randomnessState", authorized_user]`
pub const RANDOMNESS_STATE_SEED: &[u8] = b"randomnessState";

/// Number of slots after `commit_slot` during which a reveal may be consumed.
///
/// Set by the oracle network: the seed slothash must still be inside the
/// recent-blockhash horizon when the oracle reveals.
pub const REVEAL_WINDOW_SLOTS: u64 = 150;

/// Program that owns the oracle randomness accounts.
///
/// The `devnet` feature selects the devnet deployment.
pub mod oracle_program {
    use anchor_lang::prelude::*;

    #[cfg(not(feature = "devnet"))]
    declare_id!("SBondMDrcV3K4kxZR1HNVT7osZxAHVHgYXL5Ze1oMUv");

    #[cfg(feature = "devnet")]
    declare_id!("Aio4gaXjXzJNVLtzwtNVmSqGKpANtXhybbkhtAC94ji2");
}
