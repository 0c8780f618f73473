pub use app::CricketConnect;
pub use config::Config;
pub use connect::accounts::AccountStore;
pub use connect::bookings::{BookingLedger, BookingOutcome};
pub use connect::catalog::{filter_grounds, Catalog};
pub use connect::fixture::{load_grounds, parse_fixture};
pub use connect::password::PasswordConfig;
pub use connect::storage::{FileStorage, MemoryStorage, Storage};
pub use connect::teams::{JoinOutcome, TeamBoard};
pub use error::{ConnectError, Result};
pub use model::*;

mod app;
mod config;
mod connect;
mod error;
mod model;
pub(crate) mod utils;
