use anchor_lang::prelude::*;

use crate::utils::{
    constants::{MAX_AUCTION_DURATION, MAX_TIME_INCREASE_PER_BET, MIN_AUCTION_DURATION},
    errors::AuctionError,
};

/// Parameters supplied to `initialize`, validated before they reach `AuctionState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuctionConfig {
    pub time_increase_per_bet: u64,
    pub minimal_time_increase_per_bet: u64,
    pub auction_duration: u64,
    pub max_participation_amount: u64,
    pub min_pot_size: u64,
}

impl AuctionConfig {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.time_increase_per_bet >= self.minimal_time_increase_per_bet,
            AuctionError::InvalidConfiguration
        );
        require!(
            self.time_increase_per_bet > 0
                && self.time_increase_per_bet <= MAX_TIME_INCREASE_PER_BET,
            AuctionError::InvalidConfiguration
        );
        require!(
            (MIN_AUCTION_DURATION..=MAX_AUCTION_DURATION).contains(&self.auction_duration),
            AuctionError::InvalidConfiguration
        );
        require!(
            self.max_participation_amount > 0,
            AuctionError::InvalidConfiguration
        );
        Ok(())
    }
}

/// Converts a duration in seconds into a signed clock offset.
pub fn seconds(value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| error!(AuctionError::ArithmeticOverflow))
}
