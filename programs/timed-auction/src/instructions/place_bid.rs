use anchor_lang::prelude::*;
use crate::{
    state::{AuctionState, Vault},
    utils::{
        errors::AuctionError,
        events::BidPlaced,
        lamports, pda, storage,
    },
};

#[derive(Accounts)]
pub struct PlaceBid<'info> {
    /// CHECK: must be the ["state"] PDA; loaded by the handler
    #[account(mut, address = pda::state_address().0 @ AuctionError::InvalidAccount)]
    pub auction_instance: UncheckedAccount<'info>,

    /// CHECK: must be the ["vault"] PDA; loaded by the handler
    #[account(mut, address = pda::vault_address().0 @ AuctionError::InvalidAccount)]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub bidder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn place_bid_handler(ctx: Context<PlaceBid>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    require!(
        accounts.bidder.lamports() >= amount,
        AuctionError::InsufficientFunds
    );

    let clock = Clock::get()?;
    let bidder = accounts.bidder.key();

    let mut auction = storage::load::<AuctionState>(&accounts.auction_instance)?;
    let mut vault = storage::load::<Vault>(&accounts.vault)?;
    let previous_leader = auction.leader;
    let previous_amount = auction.leading_amount;
    auction.place_bid(&mut vault, bidder, amount, clock.unix_timestamp)?;

    // Escrow the bid in the vault
    lamports::transfer_in(
        &accounts.system_program,
        &accounts.bidder,
        accounts.vault.to_account_info(),
        amount,
    )?;

    storage::store(&accounts.auction_instance, &auction)?;
    storage::store(&accounts.vault, &vault)?;

    emit!(BidPlaced {
        auction: accounts.auction_instance.key(),
        bidder,
        amount,
        previous_leader,
        previous_amount,
        deadline: auction.deadline,
        bid_count: auction.bid_count,
        placed_at: auction.leading_bid_at,
    });

    msg!(
        "[auction] bid bidder={} amount={} deadline={}",
        bidder,
        amount,
        auction.deadline
    );
    Ok(())
}
