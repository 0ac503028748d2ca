//! Player state and the canonical starting world.

use serde::{Deserialize, Serialize};

use super::types::{Direction, Item, PlayerDecision, Room, UseEffect, DECISION_PLAY};
use super::world::World;

/// Where every new player begins.
pub const START_LOCATION_ID: &str = "clearing";

/// Item whose possession makes the player armed.
pub const SWORD_ITEM_ID: &str = "sword";

/// Location, inventory and recorded decisions of the single player.
///
/// `inventory` keeps insertion order so listings are stable. `decisions` is
/// append-only until an explicit reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    pub location: String,
    pub inventory: Vec<String>,
    pub decisions: Vec<PlayerDecision>,
    /// Rooms entered at least once, starting room included.
    pub visited: Vec<String>,
}

impl PlayerState {
    pub fn new(starting_room: &str) -> Self {
        Self {
            location: starting_room.to_string(),
            inventory: Vec::new(),
            decisions: Vec::new(),
            visited: vec![starting_room.to_string()],
        }
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|i| i == item_id)
    }

    pub fn has_visited(&self, room_id: &str) -> bool {
        self.visited.iter().any(|r| r == room_id)
    }

    /// Whether the adventure has started (a PLAY decision exists).
    pub fn has_started(&self) -> bool {
        self.decisions.iter().any(|d| d.kind == DECISION_PLAY)
    }

    pub fn is_armed(&self) -> bool {
        self.has_item(SWORD_ITEM_ID)
    }
}

/// Build the canonical world every adventure starts from.
///
/// ```text
///                 [village_square]
///                        | (locked)
///                 [village_gate]
///                        |
///   [dark_cave] -up- [forest_path]
///                        |
///                   [clearing] --- [riverbank]
/// ```
pub fn canonical_world_seed() -> World {
    let mut world = World::new();

    world.insert_item(Item::new(
        SWORD_ITEM_ID,
        "A short iron sword, nicked but still sharp.",
    )
    .with_effect(UseEffect::Wield));
    world.insert_item(
        Item::new("lantern", "A brass lantern with a little oil sloshing inside.")
            .with_effect(UseEffect::Light),
    );
    world.insert_item(
        Item::new("potion", "A stoppered vial of something warm and golden.")
            .with_effect(UseEffect::Rest),
    );
    world.insert_item(
        Item::new("key", "A heavy key stamped with the village crest.").with_effect(
            UseEffect::Unlock {
                room: "village_gate".to_string(),
                direction: Direction::North,
            },
        ),
    );
    world.insert_item(
        Item::new(
            "signpost",
            "The signpost reads: NORTH - Forest Path, EAST - River.",
        )
        .fixed(),
    );

    world.insert_room(
        Room::new(
            START_LOCATION_ID,
            "Clearing",
            "A quiet clearing ringed by tall pines. A weathered signpost leans by the path.",
        )
        .with_exit(Direction::North, "forest_path")
        .with_exit(Direction::East, "riverbank")
        .with_item(SWORD_ITEM_ID)
        .with_item("signpost"),
    );
    world.insert_room(
        Room::new(
            "forest_path",
            "Forest Path",
            "A narrow path winds between mossy trunks. A dark hole opens beneath the roots.",
        )
        .with_exit(Direction::South, START_LOCATION_ID)
        .with_exit(Direction::North, "village_gate")
        .with_exit(Direction::Down, "dark_cave")
        .with_item("lantern"),
    );
    world.insert_room(
        Room::new(
            "dark_cave",
            "Dark Cave",
            "Cold air and the drip of water. You can barely see your hands.",
        )
        .with_exit(Direction::Up, "forest_path")
        .with_hidden_item("key")
        .with_threat("a hissing cave bat"),
    );
    world.insert_room(
        Room::new(
            "riverbank",
            "Riverbank",
            "A slow brown river slides past reeds and smooth stones.",
        )
        .with_exit(Direction::West, START_LOCATION_ID)
        .with_item("potion"),
    );
    world.insert_room(
        Room::new(
            "village_gate",
            "Village Gate",
            "A timber palisade blocks the way. The gate to the north is barred with a great lock.",
        )
        .with_exit(Direction::South, "forest_path")
        .with_locked_exit(Direction::North, "village_square"),
    );
    world.insert_room(
        Room::new(
            "village_square",
            "Village Square",
            "Cobbles, a well, and the smell of fresh bread. You have found the village.",
        )
        .with_exit(Direction::South, "village_gate"),
    );

    world
}
