mod actions;
mod items;
mod movement;
mod render;

pub use actions::handle_use;
pub use items::{handle_take, handle_wear};
pub use movement::handle_move;
pub use render::look_around;
