mod booking;
mod ground;
mod notice;
mod player;
mod session;
mod team_request;

pub use booking::*;
pub use ground::*;
pub use notice::*;
pub use player::*;
pub use session::*;
pub use team_request::*;
