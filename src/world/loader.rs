use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use super::model::{
    Backpack, Door, Effect, Exit, Item, LookRule, Messages, Room, RoomId, UseRule, World,
};
use super::validator::{ValidationError, validate_world};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("malformed world file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate room name: {0}")]
    DuplicateRoom(String),
    #[error("start_room '{0}' not found among rooms")]
    UnknownStartRoom(String),
    #[error("world failed validation: {}", join_problems(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(|p| p.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    messages: Messages, // [messages]
    backpack: BackpackConfig, // [backpack]
    door: DoorConfig,         // [door]
    #[serde(default)]
    use_rule: Vec<UseRuleConfig>, // [[use_rule]]
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]]
}

#[derive(Deserialize)]
struct WorldHeader {
    start_room: String,
}

#[derive(Deserialize)]
struct BackpackConfig {
    item: String,
    room: String,
}

#[derive(Deserialize)]
struct DoorConfig {
    guards: String,
}

#[derive(Deserialize)]
struct UseRuleConfig {
    item: String,
    target: String,
    room: String,
    effect: EffectConfig,
    response: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum EffectConfig {
    OpenDoor,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    look: Option<LookConfig>,

    #[serde(default)]
    item: Vec<ItemConfig>, // [[room.item]]
    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
enum LookConfig {
    Static,
    Backpack {
        worn: String,
        unworn: String,
    },
    Surfaces {
        surfaces: Vec<String>,
        empty: String,
        exits: String,
    },
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    /// Where in the room it sits: "on the table", "on the chair", ...
    at: String,
}

#[derive(Deserialize)]
struct ExitConfig {
    label: String,
    target: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: build a world from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    // Rooms go into the arena first so exits can be resolved by name.
    let mut room_index: HashMap<String, RoomId> = HashMap::new();
    for (i, rc) in world_file.room.iter().enumerate() {
        if room_index.insert(rc.name.clone(), RoomId(i)).is_some() {
            return Err(WorldError::DuplicateRoom(rc.name.clone()));
        }
    }

    let start_room = room_index
        .get(&world_file.world.start_room)
        .copied()
        .ok_or_else(|| WorldError::UnknownStartRoom(world_file.world.start_room.clone()))?;

    let mut problems: Vec<ValidationError> = Vec::new();
    let mut resolve = |name: &str, what: String| -> Option<RoomId> {
        let id = room_index.get(name).copied();
        if id.is_none() {
            problems.push(ValidationError::new(format!(
                "{} references missing room '{}'",
                what, name
            )));
        }
        id
    };

    let mut rooms: Vec<Room> = Vec::with_capacity(world_file.room.len());
    for rc in world_file.room {
        let exits = rc
            .exit
            .into_iter()
            .filter_map(|e| {
                let what = format!("room '{}' exit '{}'", rc.name, e.label);
                resolve(&e.target, what).map(|target| Exit {
                    label: e.label,
                    target,
                })
            })
            .collect();

        let items = rc
            .item
            .into_iter()
            .map(|ic| Item {
                name: ic.name,
                location_tag: ic.at,
            })
            .collect();

        rooms.push(Room {
            desc: normalize_multiline_desc(&rc.desc),
            look: build_look_rule(rc.look),
            name: rc.name,
            items,
            exits,
        });
    }

    let backpack_room = resolve(&world_file.backpack.room, "backpack".to_string());

    let use_rules: Vec<UseRule> = world_file
        .use_rule
        .into_iter()
        .filter_map(|uc| {
            let what = format!("use rule '{} {}'", uc.item, uc.target);
            let room = resolve(&uc.room, what)?;
            let effect = match uc.effect {
                EffectConfig::OpenDoor => Effect::OpenDoor,
            };
            Some(UseRule {
                item: uc.item,
                target: uc.target,
                room,
                effect,
                response: normalize_multiline_desc(&uc.response),
            })
        })
        .collect();

    let world = World {
        start_room,
        rooms,
        room_index,
        messages: world_file.messages,
        backpack: Backpack {
            item: world_file.backpack.item,
            // Unresolved rooms are already in `problems`; the world is rejected below.
            room: backpack_room.unwrap_or(start_room),
        },
        door: Door {
            guards: world_file.door.guards,
        },
        use_rules,
    };

    problems.extend(validate_world(&world));
    if !problems.is_empty() {
        for p in &problems {
            warn!(problem = %p.message, "world validation");
        }
        return Err(WorldError::Invalid(problems));
    }

    debug!(rooms = world.rooms.len(), "world loaded");
    Ok(world)
}

fn build_look_rule(cfg: Option<LookConfig>) -> LookRule {
    match cfg {
        None | Some(LookConfig::Static) => LookRule::Static,
        Some(LookConfig::Backpack { worn, unworn }) => LookRule::Backpack {
            worn: normalize_multiline_desc(&worn),
            unworn: normalize_multiline_desc(&unworn),
        },
        Some(LookConfig::Surfaces {
            surfaces,
            empty,
            exits,
        }) => LookRule::Surfaces {
            surfaces,
            empty: normalize_multiline_desc(&empty),
            exits: normalize_multiline_desc(&exits),
        },
    }
}

/// Strip TOML indentation from authored text. A wrapped line joins the
/// previous one with a space, one blank line is a newline, two or more are a
/// paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut blanks = 0usize;

    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            blanks += 1;
            continue;
        }

        if !result.is_empty() {
            result.push_str(match blanks {
                0 => " ",
                1 => "\n",
                _ => "\n\n",
            });
        }
        result.push_str(line);
        blanks = 0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[world]
start_room = "hall"

[backpack]
item = "bag"
room = "hall"

[door]
guards = "out"

[[room]]
name = "hall"
desc = "a hall"
[[room.item]]
name = "bag"
at = "on the floor"
[[room.exit]]
label = "out"
target = "yard"

[[room]]
name = "yard"
desc = "a yard"
"#;

    #[test]
    fn loads_minimal_world_with_default_messages() {
        let world = load_world_from_str(MINIMAL).unwrap();
        assert_eq!(world.rooms.len(), 2);
        assert_eq!(world.start_room, RoomId(0));
        assert_eq!(world.messages.exit_keyword, "exit");
        assert_eq!(world.messages.unknown_command, "unknown command");

        let hall = world.room(world.start_room);
        assert!(matches!(hall.look, LookRule::Static));
        assert_eq!(hall.exit("out").map(|e| e.target), world.room_id("yard"));
    }

    #[test]
    fn messages_table_overrides_only_given_keys() {
        let src = MINIMAL.replace(
            "[door]",
            "[messages]\nexit_keyword = \"quit\"\n\n[door]",
        );
        let world = load_world_from_str(&src).unwrap();
        assert_eq!(world.messages.exit_keyword, "quit");
        assert_eq!(world.messages.farewell, "You left the game.");
    }

    #[test]
    fn duplicate_room_is_rejected() {
        let src = format!("{MINIMAL}\n[[room]]\nname = \"yard\"\n");
        match load_world_from_str(&src) {
            Err(WorldError::DuplicateRoom(name)) => assert_eq!(name, "yard"),
            other => panic!("expected duplicate room error, got {:?}", other.err()),
        }
    }

    #[test]
    fn unknown_start_room_is_rejected() {
        let src = MINIMAL.replace("start_room = \"hall\"", "start_room = \"attic\"");
        assert!(matches!(
            load_world_from_str(&src),
            Err(WorldError::UnknownStartRoom(name)) if name == "attic"
        ));
    }

    #[test]
    fn exit_to_missing_room_is_a_validation_problem() {
        let src = MINIMAL.replace("target = \"yard\"", "target = \"moon\"");
        match load_world_from_str(&src) {
            Err(WorldError::Invalid(problems)) => {
                assert!(problems.iter().any(|p| p.message.contains("'moon'")));
            }
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[test]
    fn unknown_look_style_is_a_parse_error() {
        let src = MINIMAL.replace(
            "desc = \"a yard\"",
            "desc = \"a yard\"\nlook = { style = \"fancy\" }",
        );
        assert!(matches!(load_world_from_str(&src), Err(WorldError::Parse(_))));
    }

    #[test]
    fn normalize_joins_wrapped_lines_and_keeps_breaks() {
        let raw = "\n    first line\n    continues\n\n    second\n\n\n    third\n";
        assert_eq!(
            normalize_multiline_desc(raw),
            "first line continues\nsecond\n\nthird"
        );
    }
}
