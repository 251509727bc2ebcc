use crate::Player;
use crate::world;

/// What `look-around` prints for the given room.
pub fn look_around(world: &world::World, room_id: world::RoomId, player: &Player) -> String {
    use world::LookRule;

    let room = world.room(room_id);

    match &room.look {
        LookRule::Static => room.desc.clone(),
        LookRule::Backpack { worn, unworn } => {
            if player.wearing_backpack {
                worn.clone()
            } else {
                unworn.clone()
            }
        }
        LookRule::Surfaces {
            surfaces,
            empty,
            exits,
        } => describe_surfaces(room, surfaces, empty, exits, &world.backpack.item, player),
    }
}

/// "on the table: keys, notes, on the chair: backpack. can go - corridor"
fn describe_surfaces(
    room: &world::Room,
    surfaces: &[String],
    empty: &str,
    exits: &str,
    backpack: &str,
    player: &Player,
) -> String {
    let mut groups: Vec<Vec<&str>> = vec![Vec::new(); surfaces.len()];

    for item in &room.items {
        if item.name == backpack && player.wearing_backpack {
            continue;
        }
        // items on undeclared surfaces are not mentioned
        if let Some(slot) = surfaces.iter().position(|s| *s == item.location_tag) {
            groups[slot].push(item.name.as_str());
        }
    }

    let parts: Vec<String> = surfaces
        .iter()
        .zip(&groups)
        .filter(|(_, names)| !names.is_empty())
        .map(|(surface, names)| format!("{}: {}", surface, names.join(", ")))
        .collect();

    if parts.is_empty() {
        return empty.to_string();
    }

    format!("{}. {}", parts.join(", "), exits)
}
