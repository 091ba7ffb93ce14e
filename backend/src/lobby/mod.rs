mod code;
pub mod handlers;
pub mod messages;
mod model;
mod repository;

pub use model::{Lobby, LobbyStatus};
pub use repository::LobbyRepository;
