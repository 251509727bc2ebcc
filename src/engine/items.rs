use tracing::info;

use crate::Player;
use crate::world;

/// Move the first item named `item_name` out of the current room and into the
/// inventory. Carrying anything needs the backpack on.
pub fn handle_take(
    world: &mut world::World,
    current_room: world::RoomId,
    player: &mut Player,
    item_name: &str,
) -> String {
    if !player.wearing_backpack {
        return world.messages.nowhere_to_put.clone();
    }

    let room = world.room_mut(current_room);
    let Some(idx) = room.items.iter().position(|i| i.name == item_name) else {
        return world.messages.no_such_item.clone();
    };

    // Vec::remove keeps the rest of the room in order
    let item = room.items.remove(idx);
    info!(item = %item.name, room = %room.name, "item taken");
    player.inventory.insert(item.name.clone(), item);

    format!("{} {}", world.messages.item_added, item_name)
}

/// Only the backpack can be worn, and only where it was left. Once on, it is
/// tracked by `wearing_backpack` alone and never enters the inventory.
pub fn handle_wear(
    world: &mut world::World,
    current_room: world::RoomId,
    player: &mut Player,
    item_name: &str,
) -> String {
    if item_name != world.backpack.item || current_room != world.backpack.room {
        return world.messages.no_such_item.clone();
    }

    let room = world.room_mut(current_room);
    let Some(idx) = room.items.iter().position(|i| i.name == item_name) else {
        return world.messages.no_such_item.clone();
    };

    room.items.remove(idx);
    player.wearing_backpack = true;
    info!(item = item_name, "backpack worn");

    format!("{} {}", world.messages.put_on, item_name)
}
