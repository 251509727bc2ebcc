pub mod engine;
pub mod world;

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use engine::{handle_move, handle_take, handle_use, handle_wear, look_around};
use world::{Item, Messages, RoomId, World};

pub use world::{WorldError, load_world_from_str};

/// The apartment the binary ships with.
pub const BUNDLED_WORLD: &str = include_str!("../public/apartment.toml");

#[derive(Debug, Default)]
pub struct Player {
    /// Keyed by item name; a second item with the same name replaces the first.
    pub inventory: HashMap<String, Item>,
    pub wearing_backpack: bool,
}

impl Player {
    pub fn has(&self, item_name: &str) -> bool {
        self.inventory.contains_key(item_name)
    }
}

/// One game session. Rooms (and the items still in them) live in `world`;
/// everything else that changes during play sits beside it.
pub struct GameState {
    pub world: World,
    pub current_room: RoomId,
    pub door_is_open: bool,
    pub player: Player,
}

impl GameState {
    pub fn new(world: World) -> Self {
        GameState {
            current_room: world.start_room,
            world,
            door_is_open: false,
            player: Player::default(),
        }
    }

    /// A fresh session in the bundled apartment.
    pub fn bundled() -> Result<Self, WorldError> {
        load_world_from_str(BUNDLED_WORLD).map(GameState::new)
    }

    pub fn messages(&self) -> &Messages {
        &self.world.messages
    }

    pub fn current_room_name(&self) -> &str {
        &self.world.room(self.current_room).name
    }

    pub fn room_items(&self, room_name: &str) -> Option<&[Item]> {
        self.world
            .room_id(room_name)
            .map(|id| self.world.room(id).items.as_slice())
    }

    /// Process a single player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (String, bool) {
        let line = input.trim();
        if line == self.world.messages.exit_keyword {
            return (self.world.messages.farewell.clone(), true);
        }
        (self.dispatch(line), false)
    }

    /// Route one command line to its handler. `line` is taken as already
    /// trimmed (see `step`). Words are split on single spaces, so doubled
    /// spaces leave empty words in the arguments.
    pub fn dispatch(&mut self, line: &str) -> String {
        let mut words = line.split(' ');
        let action = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();

        debug!(action, args = args.len(), room = %self.current_room_name(), "dispatch");

        match action {
            "look-around" => look_around(&self.world, self.current_room, &self.player),
            "go" => {
                if args.is_empty() {
                    return self.world.messages.where_to_go.clone();
                }
                handle_move(
                    &self.world,
                    &mut self.current_room,
                    self.door_is_open,
                    &args.join(" "),
                )
            }
            "take" => {
                if args.is_empty() {
                    return self.world.messages.take_what.clone();
                }
                handle_take(
                    &mut self.world,
                    self.current_room,
                    &mut self.player,
                    &args.join(" "),
                )
            }
            "wear" => {
                if args.is_empty() {
                    return self.world.messages.wear_what.clone();
                }
                handle_wear(
                    &mut self.world,
                    self.current_room,
                    &mut self.player,
                    &args.join(" "),
                )
            }
            "use" => {
                if args.len() < 2 {
                    return self.world.messages.nothing_to_apply.clone();
                }
                handle_use(
                    &self.world,
                    self.current_room,
                    &self.player,
                    &mut self.door_is_open,
                    args[0],
                    args[1],
                )
            }
            _ => self.world.messages.unknown_command.clone(),
        }
    }
}

/// The interactive loop: welcome, then prompt / read / reply until the exit
/// keyword or the input runs out. A line that ends without a newline counts as
/// a failed read and is not played.
pub fn run<R: BufRead, W: Write>(
    game: &mut GameState,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", game.messages().welcome)?;

    loop {
        write!(output, "{}", game.messages().prompt)?;
        output.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(_) if line.ends_with('\n') => {}
            Ok(_) => {
                debug!(partial = line.len(), "input ended");
                writeln!(output, "{}", game.messages().read_error)?;
                break;
            }
            Err(e) => {
                warn!(error = %e, "reading command failed");
                writeln!(output, "{}", game.messages().read_error)?;
                break;
            }
        }

        let (reply, quit) = game.step(&line);
        writeln!(output, "{}", reply)?;

        if quit {
            break;
        }
    }

    output.flush()
}
