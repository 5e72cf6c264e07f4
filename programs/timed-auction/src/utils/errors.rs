use anchor_lang::prelude::*;

#[error_code]
pub enum AuctionError {
    #[msg("Auction has already been initialized")]
    AlreadyInitialized,
    #[msg("Auction parameters are out of bounds")]
    InvalidConfiguration,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Account does not match its expected address")]
    InvalidAccount,
    #[msg("Auction is closed")]
    AuctionClosed,
    #[msg("Bid must exceed the leading amount and stay within the participation cap")]
    BidTooLow,
    #[msg("Vault has not reached the minimum pot size")]
    PotTooSmall,
    #[msg("Auction deadline has not passed yet")]
    AuctionStillOpen,
    #[msg("No bid was placed in this auction")]
    NoWinner,
    #[msg("Nothing to claim")]
    NothingToClaim,
}
