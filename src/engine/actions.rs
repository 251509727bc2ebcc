use tracing::info;

use crate::Player;
use crate::world;

/// `use <item> <target>`: the held item must match a use rule for the
/// current room.
pub fn handle_use(
    world: &world::World,
    current_room: world::RoomId,
    player: &Player,
    door_is_open: &mut bool,
    item_name: &str,
    target: &str,
) -> String {
    if !player.has(item_name) {
        return format!("{} {}", world.messages.not_in_inventory, item_name);
    }

    let rule = world
        .use_rules
        .iter()
        .find(|r| r.item == item_name && r.target == target && r.room == current_room);

    let Some(rule) = rule else {
        return world.messages.nothing_to_apply.clone();
    };

    match rule.effect {
        world::Effect::OpenDoor => {
            if !*door_is_open {
                info!(item = item_name, on = target, "door opened");
            }
            *door_is_open = true;
        }
    }

    rule.response.clone()
}

#[cfg(test)]
mod tests {
    use super::handle_use;
    use crate::GameState;
    use crate::world::Item;

    fn holding(names: &[&str]) -> GameState {
        let mut game = GameState::bundled().unwrap();
        for name in names {
            game.player.inventory.insert(
                name.to_string(),
                Item {
                    name: name.to_string(),
                    location_tag: "on the table".into(),
                },
            );
        }
        game
    }

    fn apply(game: &mut GameState, item: &str, target: &str) -> String {
        handle_use(
            &game.world,
            game.current_room,
            &game.player,
            &mut game.door_is_open,
            item,
            target,
        )
    }

    fn enter(game: &mut GameState, room: &str) {
        game.current_room = game.world.room_id(room).unwrap();
    }

    #[test]
    fn item_must_be_in_inventory() {
        let mut game = holding(&[]);
        enter(&mut game, "corridor");
        assert_eq!(
            apply(&mut game, "keys", "door"),
            "no such item in inventory - keys"
        );
        assert!(!game.door_is_open);
    }

    #[test]
    fn keys_open_the_door_from_the_corridor() {
        let mut game = holding(&["keys"]);
        enter(&mut game, "corridor");
        assert_eq!(apply(&mut game, "keys", "door"), "door is open");
        assert!(game.door_is_open);

        // again is harmless
        assert_eq!(apply(&mut game, "keys", "door"), "door is open");
        assert!(game.door_is_open);
    }

    #[test]
    fn keys_do_nothing_outside_the_corridor() {
        for room in ["kitchen", "bedroom", "street"] {
            let mut game = holding(&["keys"]);
            enter(&mut game, room);
            assert_eq!(apply(&mut game, "keys", "door"), "nothing to apply to");
            assert!(!game.door_is_open, "door opened from {room}");
        }
    }

    #[test]
    fn other_pairs_have_no_effect() {
        let mut game = holding(&["keys", "notes"]);
        enter(&mut game, "corridor");
        assert_eq!(apply(&mut game, "keys", "window"), "nothing to apply to");
        assert_eq!(apply(&mut game, "notes", "door"), "nothing to apply to");
        assert!(!game.door_is_open);
    }
}
