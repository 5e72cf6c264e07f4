use anchor_lang::prelude::*;

use crate::utils::constants::{DEPOSIT_SEED, STATE_SEED, VAULT_SEED};

/// Canonical `["state"]` address; account constraints compare against it.
pub fn state_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED], &crate::ID)
}

pub fn vault_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED], &crate::ID)
}

pub fn deposit_address(depositor: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DEPOSIT_SEED, depositor.as_ref()], &crate::ID)
}
