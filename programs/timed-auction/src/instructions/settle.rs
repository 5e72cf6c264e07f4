use anchor_lang::prelude::*;
use crate::{
    state::{AuctionState, Vault},
    utils::{
        errors::AuctionError,
        events::{emit_if_closed, PrizeSettled},
        lamports, pda, storage,
    },
};

#[derive(Accounts)]
pub struct Settle<'info> {
    /// CHECK: must be the ["state"] PDA; loaded by the handler
    #[account(mut, address = pda::state_address().0 @ AuctionError::InvalidAccount)]
    pub auction_instance: UncheckedAccount<'info>,

    /// CHECK: must be the ["vault"] PDA; loaded by the handler
    #[account(mut, address = pda::vault_address().0 @ AuctionError::InvalidAccount)]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: Compared against the recorded leader/winner before any lamports move
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// Anyone may crank settlement once the deadline has passed
    pub caller: Signer<'info>,
}

pub fn settle_handler(ctx: Context<Settle>) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &ctx.accounts;

    let mut auction = storage::load::<AuctionState>(&accounts.auction_instance)?;
    let mut vault = storage::load::<Vault>(&accounts.vault)?;
    let before = auction.status;
    let payout = auction.settle(&mut vault, clock.unix_timestamp)?;

    require_keys_eq!(
        accounts.winner.key(),
        payout.recipient,
        AuctionError::InvalidAccount
    );

    lamports::release(&accounts.vault, &accounts.winner, payout.amount)?;

    storage::store(&accounts.auction_instance, &auction)?;
    storage::store(&accounts.vault, &vault)?;

    emit_if_closed(&auction, accounts.auction_instance.key(), before, clock.unix_timestamp);

    emit!(PrizeSettled {
        auction: accounts.auction_instance.key(),
        winner: payout.recipient,
        amount: payout.amount,
        total_paid_out: auction.total_paid_out,
    });

    msg!(
        "[auction] settled winner={} amount={}",
        payout.recipient,
        payout.amount
    );
    Ok(())
}
