use anchor_lang::prelude::*;

use crate::state::{AuctionState, AuctionStatus};

#[event]
pub struct AuctionInitialized {
    pub auction: Pubkey,
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub time_increase_per_bet: u64,
    pub minimal_time_increase_per_bet: u64,
    pub auction_duration: u64,
    pub max_participation_amount: u64,
    pub min_pot_size: u64,
    pub deadline: i64,
}

#[event]
pub struct VaultFunded {
    pub vault: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct BidPlaced {
    pub auction: Pubkey,
    pub bidder: Pubkey,
    pub amount: u64,
    pub previous_leader: Option<Pubkey>,
    pub previous_amount: u64,
    pub deadline: i64,
    pub bid_count: u64,
    pub placed_at: i64,
}

#[event]
pub struct AuctionClosed {
    pub auction: Pubkey,
    pub leader: Option<Pubkey>,
    pub leading_amount: u64,
    pub deadline: i64,
    pub closed_at: i64,
}

#[event]
pub struct PrizeSettled {
    pub auction: Pubkey,
    pub winner: Pubkey,
    pub amount: u64,
    pub total_paid_out: u64,
}

#[event]
pub struct DepositReclaimed {
    pub auction: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
}

#[event]
pub struct AuctionSnapshot {
    pub auction: Pubkey,
    pub status: AuctionStatus,
    pub deadline: i64,
    pub seconds_remaining: i64,
    pub leader: Option<Pubkey>,
    pub winner: Option<Pubkey>,
    pub leading_amount: u64,
    pub leading_bid_at: i64,
    /// Extension the next qualifying bid would earn
    pub next_time_increase: u64,
    pub vault_balance: u64,
    pub bid_count: u64,
}

/// Emits `AuctionClosed` when the instruction persisted the Open -> Closed transition.
pub fn emit_if_closed(auction: &AuctionState, key: Pubkey, before: AuctionStatus, now: i64) {
    if before == AuctionStatus::Open && auction.status == AuctionStatus::Closed {
        emit!(AuctionClosed {
            auction: key,
            leader: auction.leader.or(auction.winner),
            leading_amount: auction.leading_amount,
            deadline: auction.deadline,
            closed_at: now,
        });
        msg!("[auction] closed deadline={} leading_amount={}", auction.deadline, auction.leading_amount);
    }
}
