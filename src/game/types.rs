use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DECISION_PLAY: &str = "PLAY";
pub const DECISION_EXPLORE: &str = "EXPLORE";
pub const DECISION_REST: &str = "REST";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Accepts full names and single-letter abbreviations, case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "n" | "north" => Some(Direction::North),
            "s" | "south" => Some(Direction::South),
            "e" | "east" => Some(Direction::East),
            "w" | "west" => Some(Direction::West),
            "u" | "up" => Some(Direction::Up),
            "d" | "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A narrative choice recorded on the player.
///
/// The `type` is an open string: PLAY, EXPLORE and REST are predefined, any
/// other value is allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDecision {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub consequences: Vec<String>,
}

impl PlayerDecision {
    pub fn new(kind: &str, description: &str, consequences: &[&str]) -> Self {
        Self {
            kind: kind.to_string(),
            description: description.to_string(),
            consequences: consequences.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn play() -> Self {
        Self::new(
            DECISION_PLAY,
            "Start the game",
            &["Begin adventure", "Initialize player state"],
        )
    }

    pub fn explore() -> Self {
        Self::new(
            DECISION_EXPLORE,
            "Explore the current location",
            &["Discover new items", "Encounter challenges"],
        )
    }

    pub fn rest() -> Self {
        Self::new(
            DECISION_REST,
            "Take a rest to recover",
            &["Restore health", "Pass time"],
        )
    }
}

/// What happens when a carried item is used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UseEffect {
    /// Consumed; the player rests.
    Rest,
    /// Unlocks the exit `direction` of `room` when used there.
    Unlock { room: String, direction: Direction },
    /// Reveals the current room's hidden item.
    Light,
    /// Drives off the current room's threat.
    Wield,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub description: String,
    #[serde(default = "default_takeable")]
    pub takeable: bool,
    #[serde(default)]
    pub effect: Option<UseEffect>,
}

fn default_takeable() -> bool {
    true
}

impl Item {
    pub fn new(id: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            takeable: true,
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: UseEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn fixed(mut self) -> Self {
        self.takeable = false;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exit {
    pub destination: String,
    #[serde(default)]
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exits: BTreeMap<Direction, Exit>,
    #[serde(default)]
    pub items: Vec<String>,
    /// Present but unseen until revealed by a light.
    #[serde(default)]
    pub hidden_item: Option<String>,
    /// Something in the room a wielded weapon can drive away.
    #[serde(default)]
    pub threat: Option<String>,
}

impl Room {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            hidden_item: None,
            threat: None,
        }
    }

    pub fn with_exit(mut self, direction: Direction, destination: &str) -> Self {
        self.exits.insert(
            direction,
            Exit {
                destination: destination.to_string(),
                locked: false,
            },
        );
        self
    }

    pub fn with_locked_exit(mut self, direction: Direction, destination: &str) -> Self {
        self.exits.insert(
            direction,
            Exit {
                destination: destination.to_string(),
                locked: true,
            },
        );
        self
    }

    pub fn with_item(mut self, item_id: &str) -> Self {
        if !self.items.iter().any(|i| i == item_id) {
            self.items.push(item_id.to_string());
        }
        self
    }

    pub fn with_hidden_item(mut self, item_id: &str) -> Self {
        self.hidden_item = Some(item_id.to_string());
        self
    }

    pub fn with_threat(mut self, threat: &str) -> Self {
        self.threat = Some(threat.to_string());
        self
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parse_accepts_abbreviations() {
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse("down"), Some(Direction::Down));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn decision_serializes_kind_as_type() {
        let json = serde_json::to_string(&PlayerDecision::rest()).unwrap();
        assert!(json.contains("\"type\":\"REST\""));
    }

    #[test]
    fn room_builder_dedups_items() {
        let room = Room::new("r", "Room", "A room.")
            .with_item("key")
            .with_item("key")
            .with_locked_exit(Direction::East, "hall");
        assert_eq!(room.items, vec!["key".to_string()]);
        assert!(room.exits[&Direction::East].locked);
    }
}
