use std::collections::HashSet;

use super::model::{LookRule, World};

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Checks a built world for authoring mistakes. Every problem is collected so
/// they can be reported together.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    for room in &world.rooms {
        // Exit labels must be unique within a room
        let mut seen: HashSet<&str> = HashSet::new();
        for exit in &room.exits {
            if !seen.insert(exit.label.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' declares exit '{}' more than once",
                    room.name, exit.label
                )));
            }
        }

        if let LookRule::Surfaces { surfaces, .. } = &room.look {
            if surfaces.is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' groups items by surface but lists no surfaces",
                    room.name
                )));
            }
        }
    }

    // The backpack has to start where it can be worn
    let backpack_room = world.room(world.backpack.room);
    if !backpack_room
        .items
        .iter()
        .any(|i| i.name == world.backpack.item)
    {
        errors.push(ValidationError::new(format!(
            "backpack '{}' is not placed in room '{}'",
            world.backpack.item, backpack_room.name
        )));
    }

    let door_reachable = world
        .rooms
        .iter()
        .flat_map(|r| &r.exits)
        .any(|e| e.label == world.door.guards);
    if !door_reachable {
        errors.push(ValidationError::new(format!(
            "door guards '{}' but no exit uses that label",
            world.door.guards
        )));
    }

    for rule in &world.use_rules {
        if rule.item.trim().is_empty() || rule.target.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "use rule in room '{}' has an empty item or target",
                world.room(rule.room).name
            )));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::load_world_from_str;
    use crate::world::model::{Exit, RoomId};

    fn bundled() -> World {
        load_world_from_str(crate::BUNDLED_WORLD).unwrap()
    }

    #[test]
    fn bundled_world_is_clean() {
        assert!(validate_world(&bundled()).is_empty());
    }

    #[test]
    fn reports_duplicate_exit_label() {
        let mut world = bundled();
        let kitchen = world.room_id("kitchen").unwrap();
        world.room_mut(kitchen).exits.push(Exit {
            label: "corridor".into(),
            target: RoomId(0),
        });
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("exit 'corridor' more than once"));
    }

    #[test]
    fn reports_missing_backpack_and_unused_door_label() {
        let mut world = bundled();
        let bedroom = world.backpack.room;
        world.room_mut(bedroom).items.retain(|i| i.name != "backpack");
        world.door.guards = "garden".into();

        let messages: Vec<String> = validate_world(&world)
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("backpack 'backpack'"));
        assert!(messages[1].contains("'garden'"));
    }
}
