use anchor_lang::prelude::*;

/// Escrow PDA (seeds = [b"vault"]). `balance` excludes the account's rent reserve.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Vault {
    pub balance: u64,
    pub bump: u8,
}

impl Vault {
    pub const LEN: usize = 8 + // discriminator
        8 + // balance
        1; // bump
}
