use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::oracle_program;
use crate::errors::BrokerError;

/// Outcome of asking the oracle for the value of its current commitment in
/// the current slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Committed, no value published yet.
    Pending,
    /// Published in an earlier slot. The value is no longer readable.
    Stale,
    /// Published and readable in this slot.
    Revealed { value: [u8; 32] },
}

/// The part of the oracle network the broker depends on.
///
/// Commitments are created and revealed by the oracle network itself; the
/// broker only reads which commitment an oracle account holds and whether
/// its value can be read.
pub trait RandomnessOracle {
    /// Address of the oracle randomness account.
    fn key(&self) -> Pubkey;
    /// Slot whose slothash seeds the current commitment. Changes on re-commit.
    fn seed_slot(&self) -> u64;
    /// Whether the commitment has been revealed, readable or not.
    fn is_revealed(&self) -> bool {
        !matches!(self.reveal(), Reveal::Pending)
    }
    /// Value of the current commitment as seen from the current slot.
    fn reveal(&self) -> Reveal;
}

/// Snapshot of an on-demand randomness account taken at one slot.
///
/// `value` holds what `RandomnessAccountData::get_value` returned for the
/// clock the account was loaded with, so it is only set when the reveal
/// landed in that very slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OracleAccount {
    pub key: Pubkey,
    pub seed_slot: u64,
    /// 0 while the commitment is unrevealed.
    pub reveal_slot: u64,
    pub value: Option<[u8; 32]>,
}

impl OracleAccount {
    /// Parse an oracle account passed to an instruction and read its value
    /// against `clock`.
    ///
    /// The account must be owned by the oracle program.
    pub fn load(info: &AccountInfo, clock: &Clock) -> Result<Self> {
        require_keys_eq!(
            *info.owner,
            oracle_program::ID,
            BrokerError::InvalidOracleReference
        );
        let data = RandomnessAccountData::parse(info.try_borrow_data()?)
            .map_err(|_| error!(BrokerError::InvalidOracleReference))?;

        Ok(Self {
            key: *info.key,
            seed_slot: data.seed_slot,
            reveal_slot: data.reveal_slot,
            value: data.get_value(clock.slot).ok(),
        })
    }
}

impl RandomnessOracle for OracleAccount {
    fn key(&self) -> Pubkey {
        self.key
    }

    fn seed_slot(&self) -> u64 {
        self.seed_slot
    }

    fn reveal(&self) -> Reveal {
        match self.value {
            Some(value) => Reveal::Revealed { value },
            None if self.reveal_slot == 0 => Reveal::Pending,
            None => Reveal::Stale,
        }
    }
}
