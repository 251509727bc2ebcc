use tracing::info;

use crate::world;

/// `go <destination>`. The door-guarded label is refused while the door is
/// shut, whichever room the player is in.
pub fn handle_move(
    world: &world::World,
    current_room: &mut world::RoomId,
    door_is_open: bool,
    destination: &str,
) -> String {
    if destination == world.door.guards && !door_is_open {
        return world.messages.door_closed.clone();
    }

    let room = world.room(*current_room);
    let Some(exit) = room.exit(destination) else {
        return format!("{} {}", world.messages.no_path, destination);
    };

    let target = world.room(exit.target);
    info!(from = %room.name, to = %target.name, "player moved");
    *current_room = exit.target;

    // Arrival always shows the plain description, never the look-around text.
    target.desc.clone()
}
