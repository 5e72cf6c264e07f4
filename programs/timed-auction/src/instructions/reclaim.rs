use anchor_lang::prelude::*;
use crate::{
    state::{AuctionState, Deposit, Vault},
    utils::{
        errors::AuctionError,
        events::{emit_if_closed, DepositReclaimed},
        lamports, pda, storage,
    },
};

#[derive(Accounts)]
pub struct Reclaim<'info> {
    /// CHECK: must be the ["state"] PDA; loaded by the handler
    #[account(mut, address = pda::state_address().0 @ AuctionError::InvalidAccount)]
    pub auction_instance: UncheckedAccount<'info>,

    /// CHECK: must be the ["vault"] PDA; loaded by the handler
    #[account(mut, address = pda::vault_address().0 @ AuctionError::InvalidAccount)]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    /// CHECK: the depositor's ["deposit", depositor] receipt; closed by the handler
    #[account(
        mut,
        address = pda::deposit_address(&depositor.key()).0 @ AuctionError::InvalidAccount,
    )]
    pub deposit: UncheckedAccount<'info>,
}

/// Closes the caller's receipt after the deadline. The recorded deposit comes
/// back only if nobody bid; the receipt's rent always does.
pub fn reclaim_handler(ctx: Context<Reclaim>) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &ctx.accounts;
    let depositor = accounts.depositor.key();

    let mut auction = storage::load::<AuctionState>(&accounts.auction_instance)?;
    let mut vault = storage::load::<Vault>(&accounts.vault)?;
    let mut receipt = storage::load::<Deposit>(&accounts.deposit)?;
    require_keys_eq!(receipt.depositor, depositor, AuctionError::InvalidAccount);

    let before = auction.status;
    let payout = auction.reclaim(&mut vault, &mut receipt, clock.unix_timestamp)?;

    if payout.amount > 0 {
        lamports::release(&accounts.vault, &accounts.depositor, payout.amount)?;
    }
    storage::close(&accounts.deposit, &accounts.depositor)?;

    storage::store(&accounts.auction_instance, &auction)?;
    storage::store(&accounts.vault, &vault)?;

    emit_if_closed(&auction, accounts.auction_instance.key(), before, clock.unix_timestamp);

    emit!(DepositReclaimed {
        auction: accounts.auction_instance.key(),
        depositor,
        amount: payout.amount,
    });

    msg!(
        "[auction] receipt closed depositor={} refunded={}",
        depositor,
        payout.amount
    );
    Ok(())
}
