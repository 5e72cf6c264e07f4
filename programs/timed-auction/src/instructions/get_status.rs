use anchor_lang::prelude::*;
use crate::{
    state::{AuctionState, Vault},
    utils::{errors::AuctionError, events::AuctionSnapshot, pda, storage},
};

#[derive(Accounts)]
pub struct GetStatus<'info> {
    /// CHECK: must be the ["state"] PDA; loaded by the handler
    #[account(address = pda::state_address().0 @ AuctionError::InvalidAccount)]
    pub auction_instance: UncheckedAccount<'info>,

    /// CHECK: must be the ["vault"] PDA; loaded by the handler
    #[account(address = pda::vault_address().0 @ AuctionError::InvalidAccount)]
    pub vault: UncheckedAccount<'info>,
}

pub fn get_status_handler(ctx: Context<GetStatus>) -> Result<()> {
    let auction = storage::load::<AuctionState>(&ctx.accounts.auction_instance)?;
    let vault = storage::load::<Vault>(&ctx.accounts.vault)?;
    let now = Clock::get()?.unix_timestamp;

    // Emit an event with the status as of this slot
    emit!(AuctionSnapshot {
        auction: ctx.accounts.auction_instance.key(),
        status: auction.status_at(now),
        deadline: auction.deadline,
        seconds_remaining: auction.seconds_remaining(now),
        leader: auction.leader,
        winner: auction.winner,
        leading_amount: auction.leading_amount,
        leading_bid_at: auction.leading_bid_at,
        next_time_increase: auction.next_time_increase(),
        vault_balance: vault.balance,
        bid_count: auction.bid_count,
    });

    Ok(())
}
