pub mod constants;
pub mod errors;
pub mod events;
pub mod lamports;
pub mod pda;
pub mod storage;

pub use constants::*;
pub use errors::*;
pub use events::*;
