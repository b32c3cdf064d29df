use anchor_lang::prelude::*;

/// Error codes for the randomness broker.
///
/// Anchor encodes these as `6000 + variant index` in on-chain error responses.
#[error_code]
pub enum BrokerError {
    /// Signer is not the `authorized_user` of the randomness state.
    #[msg("Unauthorized access attempt.")]
    Unauthorized,
    /// The randomness state for this user already exists.
    #[msg("Randomness state already initialized.")]
    AlreadyInitialized,
    /// The oracle account is the zero address, is not the one bound in
    /// state, or is not a well-formed oracle randomness account.
    #[msg("Invalid oracle randomness account.")]
    InvalidOracleReference,
    /// `get_randomness` was called before any request was made.
    #[msg("No randomness request is active.")]
    NoActiveRequest,
    /// The oracle value is already public, or this request was already consumed.
    #[msg("Randomness already revealed.")]
    RandomnessAlreadyRevealed,
    /// The oracle has not revealed a valid value for this commitment yet.
    #[msg("Randomness not yet resolved.")]
    RandomnessNotResolved,
    /// The reveal window passed or the oracle account was re-committed.
    #[msg("Randomness request expired.")]
    RandomnessExpired,
}
