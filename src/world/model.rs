use serde::Deserialize;
use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Index of a room inside `World::rooms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

/// Runtime world type used by the game loop.
pub struct World {
    pub start_room: RoomId,
    pub rooms: Vec<Room>,
    pub room_index: HashMap<String, RoomId>,
    pub messages: Messages,
    pub backpack: Backpack,
    pub door: Door,
    pub use_rules: Vec<UseRule>,
}

impl World {
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.room_index.get(name).copied()
    }
}

pub struct Room {
    pub name: String,
    pub desc: String,
    pub look: LookRule,
    pub items: Vec<Item>,
    pub exits: Vec<Exit>,
}

impl Room {
    pub fn exit(&self, label: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.label == label)
    }
}

pub struct Exit {
    pub label: String,
    pub target: RoomId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub location_tag: String, // "on the table", not a room
}

/// How `look-around` describes a room.
pub enum LookRule {
    /// The room's own description text.
    Static,
    /// Fixed text that depends only on whether the backpack is worn.
    Backpack { worn: String, unworn: String },
    /// Items grouped by location tag, one group per surface in declared order.
    Surfaces {
        surfaces: Vec<String>,
        empty: String,
        exits: String,
    },
}

/// The one wearable item and the only room it can be put on in.
pub struct Backpack {
    pub item: String,
    pub room: RoomId,
}

/// The single global door. Moving to `guards` requires it open.
pub struct Door {
    pub guards: String,
}

pub struct UseRule {
    pub item: String,
    pub target: String,
    pub room: RoomId,
    pub effect: Effect,
    pub response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    OpenDoor,
}

/// Every player-facing string the engine produces.
///
/// Read straight from the `[messages]` table; any key left out keeps its
/// default. Messages that carry an argument are prefixes joined to it with a
/// single space.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub exit_keyword: String,
    pub welcome: String,
    pub prompt: String,
    pub farewell: String,
    pub read_error: String,
    pub unknown_command: String,
    pub where_to_go: String,
    pub take_what: String,
    pub wear_what: String,
    pub nothing_to_apply: String,
    pub door_closed: String,
    pub no_path: String,
    pub nowhere_to_put: String,
    pub no_such_item: String,
    pub item_added: String,
    pub put_on: String,
    pub not_in_inventory: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            exit_keyword: "exit".into(),
            welcome: "Welcome to the game! Enter a command.".into(),
            prompt: "> ".into(),
            farewell: "You left the game.".into(),
            read_error: "Error reading command.".into(),
            unknown_command: "unknown command".into(),
            where_to_go: "where to go?".into(),
            take_what: "take what?".into(),
            wear_what: "wear what?".into(),
            nothing_to_apply: "nothing to apply to".into(),
            door_closed: "door is closed".into(),
            no_path: "no path to".into(),
            nowhere_to_put: "nowhere to put it".into(),
            no_such_item: "no such item".into(),
            item_added: "item added to inventory:".into(),
            put_on: "you put on:".into(),
            not_in_inventory: "no such item in inventory -".into(),
        }
    }
}
