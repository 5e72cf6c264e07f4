pub mod initialize;
pub mod fund_vault;
pub mod place_bid;
pub mod settle;
pub mod reclaim;
pub mod get_status;

pub use initialize::*;
pub use fund_vault::*;
pub use place_bid::*;
pub use settle::*;
pub use reclaim::*;
pub use get_status::*;
