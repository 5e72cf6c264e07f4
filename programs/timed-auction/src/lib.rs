#![allow(unexpected_cfgs)]

//! Timed auction with a shared escrow vault.
//!
//! Every bid escrows lamports in the vault PDA and keeps at least the current
//! extension (`time_increase_per_bet`, one second less per accepted bid) before
//! the deadline. Once the deadline passes the last leader can be paid the
//! whole vault, or depositors reclaim their funds if nobody bid.

use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;
pub use utils::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod timed_auction {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        time_increase_per_bet: u64,
        minimal_time_increase_per_bet: u64,
        auction_duration: u64,
        max_participation_amount: u64,
        min_pot_size: u64,
    ) -> Result<()> {
        let config = AuctionConfig {
            time_increase_per_bet,
            minimal_time_increase_per_bet,
            auction_duration,
            max_participation_amount,
            min_pot_size,
        };
        instructions::initialize::initialize_handler(ctx, config)
    }

    /// `amount = None` transfers the payer's whole balance.
    pub fn fund_vault(ctx: Context<FundVault>, amount: Option<u64>) -> Result<()> {
        instructions::fund_vault::fund_vault_handler(ctx, amount)
    }

    pub fn place_bid(ctx: Context<PlaceBid>, amount: u64) -> Result<()> {
        instructions::place_bid::place_bid_handler(ctx, amount)
    }

    /// Pays the vault to the winner once the deadline has passed.
    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        instructions::settle::settle_handler(ctx)
    }

    /// Refunds a depositor when the auction closed without any bid.
    pub fn reclaim(ctx: Context<Reclaim>) -> Result<()> {
        instructions::reclaim::reclaim_handler(ctx)
    }

    pub fn get_status(ctx: Context<GetStatus>) -> Result<()> {
        instructions::get_status::get_status_handler(ctx)
    }
}
