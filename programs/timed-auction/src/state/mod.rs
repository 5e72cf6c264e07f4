pub mod auction;
pub mod config;
pub mod deposit;
pub mod vault;

pub use auction::*;
pub use config::*;
pub use deposit::*;
pub use vault::*;
