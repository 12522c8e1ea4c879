pub use self::config::Config;
pub use self::dispatcher::{dispatch, run_dispatcher, Command};
pub use self::processor::Session;
pub use self::registry::{Friend, FriendId, FriendRegistry};
pub use self::selection::State;
pub use self::split::{compute_delta, friend_expense, PaidBy, SplitForm};
pub use self::utils::{Amount, LedgerError};

pub mod config;
mod constants;
mod dispatcher;
mod handlers;
mod processor;
mod registry;
mod selection;
mod split;
pub mod utils;
