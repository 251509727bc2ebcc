mod loader;
mod model;
mod validator;

pub use loader::{WorldError, load_world_from_str};
pub use model::{Effect, Item, LookRule, Messages, Room, RoomId, World};
pub use validator::ValidationError;
