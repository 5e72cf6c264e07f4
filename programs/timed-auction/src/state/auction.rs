use anchor_lang::prelude::*;

use crate::{
    state::{config::seconds, AuctionConfig, Deposit, Vault},
    utils::{constants::TIME_DECREASE_PER_BET, errors::AuctionError},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuctionStatus {
    #[default]
    Uninitialized,
    Open,
    Closed,
}

/// Singleton auction record (PDA, seeds = [b"state"]).
///
/// Every mutating method validates first and writes last, so a rejected call
/// leaves both the state and the vault untouched.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct AuctionState {
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub status: AuctionStatus,
    /// Extension granted to the first bid
    pub time_increase_per_bet: u64,
    /// Floor the extension decays to
    pub minimal_time_increase_per_bet: u64,
    /// Seconds the extension shrinks by per accepted bid
    pub time_decrease_per_bet: u64,
    pub auction_duration: u64,
    pub max_participation_amount: u64,
    pub min_pot_size: u64,
    pub started_at: i64,
    /// No qualifying bid is accepted at or after this timestamp. Never decreases.
    pub deadline: i64,
    pub leader: Option<Pubkey>,
    pub leading_amount: u64,
    /// When the current leading bid was accepted (0 before any bid)
    pub leading_bid_at: i64,
    pub bid_count: u64,
    /// Lifetime `fund_vault` deposits
    pub total_deposited: u64,
    /// Lifetime value escrowed by bids
    pub total_bid: u64,
    pub total_paid_out: u64,
    /// Fixed by the first settlement; receives every later payout.
    pub winner: Option<Pubkey>,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Lamports the handler must move out of the vault after a successful settle/reclaim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub recipient: Pubkey,
    pub amount: u64,
}

impl AuctionState {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // vault
        1 + // status
        8 + // time_increase_per_bet
        8 + // minimal_time_increase_per_bet
        8 + // time_decrease_per_bet
        8 + // auction_duration
        8 + // max_participation_amount
        8 + // min_pot_size
        8 + // started_at
        8 + // deadline
        (1 + 32) + // leader
        8 + // leading_amount
        8 + // leading_bid_at
        8 + // bid_count
        8 + // total_deposited
        8 + // total_bid
        8 + // total_paid_out
        (1 + 32) + // winner
        1 + // bump
        1; // vault_bump

    /// Uninitialized -> Open.
    pub fn open(
        &mut self,
        config: &AuctionConfig,
        authority: Pubkey,
        vault: Pubkey,
        bump: u8,
        vault_bump: u8,
        now: i64,
    ) -> Result<()> {
        require!(
            self.status == AuctionStatus::Uninitialized,
            AuctionError::AlreadyInitialized
        );
        config.validate()?;

        let deadline = now
            .checked_add(seconds(config.auction_duration)?)
            .ok_or(AuctionError::ArithmeticOverflow)?;

        *self = AuctionState {
            authority,
            vault,
            status: AuctionStatus::Open,
            time_increase_per_bet: config.time_increase_per_bet,
            minimal_time_increase_per_bet: config.minimal_time_increase_per_bet,
            time_decrease_per_bet: TIME_DECREASE_PER_BET,
            auction_duration: config.auction_duration,
            max_participation_amount: config.max_participation_amount,
            min_pot_size: config.min_pot_size,
            started_at: now,
            deadline,
            bump,
            vault_bump,
            ..AuctionState::default()
        };
        Ok(())
    }

    /// Status as observed at `now`, without persisting anything.
    pub fn status_at(&self, now: i64) -> AuctionStatus {
        match self.status {
            AuctionStatus::Open if now >= self.deadline => AuctionStatus::Closed,
            status => status,
        }
    }

    pub fn seconds_remaining(&self, now: i64) -> i64 {
        match self.status_at(now) {
            AuctionStatus::Open => self.deadline.saturating_sub(now),
            _ => 0,
        }
    }

    /// Extension the next qualifying bid earns: `time_increase_per_bet` for the
    /// first bid, then `time_decrease_per_bet` less per accepted bid, clamped at
    /// `minimal_time_increase_per_bet`.
    pub fn next_time_increase(&self) -> u64 {
        let decay = self.bid_count.saturating_mul(self.time_decrease_per_bet);
        self.time_increase_per_bet
            .saturating_sub(decay)
            .max(self.minimal_time_increase_per_bet)
    }

    fn ensure_initialized(&self) -> Result<()> {
        require!(
            self.status != AuctionStatus::Uninitialized,
            AuctionError::InvalidAccount
        );
        Ok(())
    }

    fn ensure_closed(&self, now: i64) -> Result<()> {
        require!(
            self.status_at(now) == AuctionStatus::Closed,
            AuctionError::AuctionStillOpen
        );
        Ok(())
    }

    /// Records a vault deposit. Identical in Open and Closed; never touches the leader.
    /// A receipt is only required when value actually moves.
    pub fn deposit(
        &mut self,
        vault: &mut Vault,
        receipt: Option<&mut Deposit>,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        self.ensure_initialized()?;

        let balance = vault
            .balance
            .checked_add(amount)
            .ok_or(AuctionError::ArithmeticOverflow)?;
        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(AuctionError::ArithmeticOverflow)?;
        let receipt = match receipt {
            Some(receipt) => {
                let receipt_amount = receipt
                    .amount
                    .checked_add(amount)
                    .ok_or(AuctionError::ArithmeticOverflow)?;
                Some((receipt, receipt_amount))
            }
            None => {
                require!(amount == 0, AuctionError::InvalidAccount);
                None
            }
        };

        self.status = self.status_at(now);
        self.total_deposited = total_deposited;
        vault.balance = balance;
        if let Some((receipt, receipt_amount)) = receipt {
            receipt.amount = receipt_amount;
        }
        Ok(())
    }

    /// Open -> Open on a qualifying bid; pushes the deadline out to at least
    /// `now + next_time_increase()`. An earlier deadline is never pulled in.
    pub fn place_bid(
        &mut self,
        vault: &mut Vault,
        bidder: Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        self.ensure_initialized()?;
        require!(
            self.status_at(now) == AuctionStatus::Open,
            AuctionError::AuctionClosed
        );
        require!(
            vault.balance >= self.min_pot_size,
            AuctionError::PotTooSmall
        );
        require!(
            amount > self.leading_amount && amount <= self.max_participation_amount,
            AuctionError::BidTooLow
        );

        let extended = now
            .checked_add(seconds(self.next_time_increase())?)
            .ok_or(AuctionError::ArithmeticOverflow)?;
        let deadline = self.deadline.max(extended);

        let balance = vault
            .balance
            .checked_add(amount)
            .ok_or(AuctionError::ArithmeticOverflow)?;
        let bid_count = self
            .bid_count
            .checked_add(1)
            .ok_or(AuctionError::ArithmeticOverflow)?;
        let total_bid = self
            .total_bid
            .checked_add(amount)
            .ok_or(AuctionError::ArithmeticOverflow)?;

        self.deadline = deadline;
        self.leader = Some(bidder);
        self.leading_amount = amount;
        self.leading_bid_at = now;
        self.bid_count = bid_count;
        self.total_bid = total_bid;
        vault.balance = balance;
        Ok(())
    }

    /// Pays the whole vault balance to the winner once the deadline has passed.
    pub fn settle(&mut self, vault: &mut Vault, now: i64) -> Result<Payout> {
        self.ensure_initialized()?;
        self.ensure_closed(now)?;

        let recipient = self
            .winner
            .or(self.leader)
            .ok_or(AuctionError::NoWinner)?;
        let amount = vault.balance;
        require!(amount > 0, AuctionError::NothingToClaim);

        let total_paid_out = self
            .total_paid_out
            .checked_add(amount)
            .ok_or(AuctionError::ArithmeticOverflow)?;

        self.status = AuctionStatus::Closed;
        self.winner = Some(recipient);
        self.leader = None;
        self.total_paid_out = total_paid_out;
        vault.balance = 0;
        Ok(Payout { recipient, amount })
    }

    /// Retires a receipt after close. Deposits are refunded only when the auction
    /// closed without any bid; otherwise they belong to the pot and the payout is 0.
    pub fn reclaim(&mut self, vault: &mut Vault, receipt: &mut Deposit, now: i64) -> Result<Payout> {
        self.ensure_initialized()?;
        self.ensure_closed(now)?;

        let amount = if self.bid_count == 0 { receipt.amount } else { 0 };

        let balance = vault
            .balance
            .checked_sub(amount)
            .ok_or(AuctionError::InsufficientFunds)?;
        let total_paid_out = self
            .total_paid_out
            .checked_add(amount)
            .ok_or(AuctionError::ArithmeticOverflow)?;

        self.status = AuctionStatus::Closed;
        self.total_paid_out = total_paid_out;
        vault.balance = balance;
        receipt.amount = 0;
        Ok(Payout {
            recipient: receipt.depositor,
            amount,
        })
    }

    /// The escrow and bid invariants that must hold after every successful instruction.
    pub fn holds_invariants(&self, vault: &Vault) -> bool {
        let backed = self.leader.is_none() || vault.balance >= self.leading_amount;
        let capped = self.leading_amount <= self.max_participation_amount;
        let total_in = self.total_deposited as u128 + self.total_bid as u128;
        let conserved =
            total_in.checked_sub(self.total_paid_out as u128) == Some(vault.balance as u128);
        backed && capped && conserved
    }
}
