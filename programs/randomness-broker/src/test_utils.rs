use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::broker;
use crate::constants::{oracle_program, RANDOMNESS_STATE_SEED};
use crate::errors::BrokerError;
use crate::oracle::{RandomnessOracle, Reveal};
use crate::state::RandomnessState;

/// Assert that `result` failed with exactly `expected`.
pub fn assert_broker_error<T: std::fmt::Debug>(result: Result<T>, expected: BrokerError) {
    let name = format!("{expected:?}");
    let code = u32::from(expected);
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, code,
            "expected {name}, got {}",
            err.error_name
        ),
        other => panic!("expected {name}, got {other:?}"),
    }
}

/// Clock sysvar value at `slot`.
pub fn clock_at(slot: u64) -> Clock {
    Clock {
        slot,
        ..Clock::default()
    }
}

/// In-memory oracle account.
#[derive(Clone, Debug)]
pub struct MockOracle {
    pub key: Pubkey,
    pub seed_slot: u64,
    pub revealed: Option<[u8; 32]>,
    /// Revealed in an earlier slot, value no longer readable.
    pub stale: bool,
}

impl MockOracle {
    /// Fresh account committed at `seed_slot`, not yet revealed.
    pub fn committed(seed_slot: u64) -> Self {
        Self {
            key: Pubkey::new_unique(),
            seed_slot,
            revealed: None,
            stale: false,
        }
    }

    pub fn reveal_value(&mut self, value: [u8; 32]) {
        self.revealed = Some(value);
    }

    /// Move past the reveal slot.
    pub fn age(&mut self) {
        self.stale = true;
    }
}

impl RandomnessOracle for MockOracle {
    fn key(&self) -> Pubkey {
        self.key
    }

    fn seed_slot(&self) -> u64 {
        self.seed_slot
    }

    fn reveal(&self) -> Reveal {
        match self.revealed {
            Some(_) if self.stale => Reveal::Stale,
            Some(value) => Reveal::Revealed { value },
            None => Reveal::Pending,
        }
    }
}

/// Backing storage for an `AccountInfo` in native account-validation tests.
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub is_signer: bool,
    pub executable: bool,
}

impl TestAccount {
    pub fn new(key: Pubkey, owner: Pubkey, data: Vec<u8>) -> Self {
        Self {
            key,
            owner,
            lamports: 1_000_000_000,
            data,
            is_signer: false,
            executable: false,
        }
    }

    pub fn signer(key: Pubkey) -> Self {
        Self {
            is_signer: true,
            ..Self::new(key, System::id(), Vec::new())
        }
    }

    /// Initialized state record of `user` stored at `key`.
    pub fn state_at(key: Pubkey, user: Pubkey, bump: u8) -> Self {
        let mut state = RandomnessState::default();
        broker::initialize(&mut state, user, bump).unwrap();
        let mut data = Vec::new();
        state.try_serialize(&mut data).unwrap();
        data.resize(8 + RandomnessState::INIT_SPACE, 0);
        Self::new(key, crate::ID, data)
    }

    /// Initialized state record of `user` at its PDA.
    pub fn state(user: Pubkey) -> Self {
        let (key, bump) = Pubkey::find_program_address(
            &[RANDOMNESS_STATE_SEED, user.as_ref()],
            &crate::ID,
        );
        Self::state_at(key, user, bump)
    }

    pub fn oracle() -> Self {
        Self::new(Pubkey::new_unique(), oracle_program::ID, vec![0u8; 512])
    }

    pub fn system_program() -> Self {
        Self {
            executable: true,
            ..Self::new(System::id(), Pubkey::default(), Vec::new())
        }
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.is_signer,
            true,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }
}

/// Assert that `result` failed with the framework error `expected`.
pub fn assert_anchor_error<T: std::fmt::Debug>(
    result: Result<T>,
    expected: anchor_lang::error::ErrorCode,
) {
    let code = u32::from(expected);
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, code,
            "expected {expected:?}, got {}",
            err.error_name
        ),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}
