use anchor_lang::prelude::*;

/// Refund receipt for one depositor (seeds = [b"deposit", depositor]).
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Deposit {
    pub depositor: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Deposit {
    pub const LEN: usize = 8 + // discriminator
        32 + // depositor
        8 + // amount
        1; // bump
}
