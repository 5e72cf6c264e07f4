pub const STATE_SEED: &[u8] = b"state";
pub const VAULT_SEED: &[u8] = b"vault";
pub const DEPOSIT_SEED: &[u8] = b"deposit";

/// Shortest accepted auction window, in seconds.
pub const MIN_AUCTION_DURATION: u64 = 60;
/// Longest accepted auction window (30 days).
pub const MAX_AUCTION_DURATION: u64 = 30 * 86_400;
/// Upper bound on the per-bid deadline extension (one day).
pub const MAX_TIME_INCREASE_PER_BET: u64 = 86_400;
/// Seconds the per-bid extension shrinks by with every accepted bid.
pub const TIME_DECREASE_PER_BET: u64 = 1;
