//! Player verb handlers.
//!
//! A handler is a pure function of the current state and the line's tokens
//! (verb included). It returns the transcript record to show and the state
//! changes to apply; the [`Adventure`](super::adventure::Adventure) applies
//! them afterwards.

use std::collections::BTreeMap;

use crate::terminal::{format_help_table, Emphasis, StyledText, TranscriptRecord};

use super::errors::GameError;
use super::inventory::format_inventory;
use super::state::PlayerState;
use super::types::{Direction, PlayerDecision, Room, UseEffect};
use super::verbs::Verb;
use super::world::World;

/// Read-only view a handler works from.
pub struct VerbContext<'a> {
    pub line: &'a str,
    pub player: &'a PlayerState,
    pub world: &'a World,
}

/// A single state change requested by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateDelta {
    MoveTo(String),
    /// Move an item from the current room into the inventory.
    Take(String),
    /// Move an item from the inventory into the current room.
    Drop(String),
    /// Remove an item from the inventory for good.
    Consume(String),
    Unlock { room: String, direction: Direction },
    /// Make the room's hidden item visible.
    Reveal(String),
    /// Remove the room's threat.
    Calm(String),
    Decide(PlayerDecision),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerbOutcome {
    Record {
        record: TranscriptRecord,
        deltas: Vec<StateDelta>,
    },
    /// Clear the transcript.
    Clear,
}

impl VerbOutcome {
    pub fn info(line: &str, output: impl Into<StyledText>) -> Self {
        VerbOutcome::Record {
            record: TranscriptRecord::info(line, output),
            deltas: Vec::new(),
        }
    }

    pub fn fail(line: &str, error: GameError) -> Self {
        VerbOutcome::Record {
            record: TranscriptRecord::error(line, error.to_string()),
            deltas: Vec::new(),
        }
    }

    pub fn with_delta(mut self, delta: StateDelta) -> Self {
        if let VerbOutcome::Record { deltas, .. } = &mut self {
            deltas.push(delta);
        }
        self
    }

    pub fn record(&self) -> Option<&TranscriptRecord> {
        match self {
            VerbOutcome::Record { record, .. } => Some(record),
            VerbOutcome::Clear => None,
        }
    }

    pub fn deltas(&self) -> &[StateDelta] {
        match self {
            VerbOutcome::Record { deltas, .. } => deltas,
            VerbOutcome::Clear => &[],
        }
    }
}

pub type VerbHandler = fn(&VerbContext<'_>, &[String]) -> VerbOutcome;

/// Verb-to-handler table. Built once with every verb; never changes after.
#[derive(Clone)]
pub struct PlayerActions {
    handlers: BTreeMap<Verb, VerbHandler>,
}

impl PlayerActions {
    pub fn standard() -> Self {
        let mut handlers: BTreeMap<Verb, VerbHandler> = BTreeMap::new();
        for verb in Verb::ALL {
            let handler: VerbHandler = match verb {
                Verb::Look => look,
                Verb::Go => go,
                Verb::Pickup => pickup,
                Verb::Drop => drop_item,
                Verb::Use => use_item,
                Verb::Inventory => inventory,
                Verb::Clear => clear,
                Verb::UserHelp => user_help,
            };
            handlers.insert(verb, handler);
        }
        Self { handlers }
    }

    pub fn get(&self, verb: Verb) -> Option<VerbHandler> {
        self.handlers.get(&verb).copied()
    }

    pub fn verbs(&self) -> impl Iterator<Item = Verb> + '_ {
        self.handlers.keys().copied()
    }
}

impl Default for PlayerActions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Argument text after the verb, lowercased. `None` when absent.
fn argument(tokens: &[String]) -> Option<String> {
    if tokens.len() < 2 {
        return None;
    }
    Some(tokens[1..].join(" ").to_lowercase())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name, description, exits, visible items and any threat.
pub fn describe_room(room: &Room) -> StyledText {
    let mut out = StyledText::new();
    out.push_emphasized(&room.name, Emphasis::Keyword)
        .push_str("\n")
        .push_str(&room.description);

    if room.exits.is_empty() {
        out.push_str("\nThere are no obvious exits.");
    } else {
        out.push_str("\nExits: ");
        for (i, (direction, exit)) in room.exits.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_emphasized(direction.as_str(), Emphasis::Command);
            if exit.locked {
                out.push_str(" (locked)");
            }
        }
    }

    if !room.items.is_empty() {
        out.push_str("\nYou see: ");
        for (i, item) in room.items.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_emphasized(item, Emphasis::Keyword);
        }
    }

    if let Some(threat) = &room.threat {
        out.push_str("\nSomething stirs: ").push_str(threat).push_str(".");
    }
    out
}

fn look(ctx: &VerbContext<'_>, tokens: &[String]) -> VerbOutcome {
    let Some(room) = ctx.world.room(&ctx.player.location) else {
        return VerbOutcome::fail(ctx.line, GameError::NothingFound);
    };

    let target = match argument(tokens) {
        None => return VerbOutcome::info(ctx.line, describe_room(room)),
        Some(t) if matches!(t.as_str(), "around" | "here" | "room") => {
            return VerbOutcome::info(ctx.line, describe_room(room))
        }
        Some(t) => t,
    };

    if room.has_item(&target) || ctx.player.has_item(&target) {
        if let Some(item) = ctx.world.item(&target) {
            return VerbOutcome::info(ctx.line, item.description.as_str());
        }
    }

    if let Some(direction) = Direction::parse(&target) {
        if let Some(exit) = room.exits.get(&direction) {
            let mut text = format!(
                "To the {} lies the {}.",
                direction,
                ctx.world.room_name(&exit.destination)
            );
            if exit.locked {
                text.push_str(" The way is locked.");
            }
            return VerbOutcome::info(ctx.line, text);
        }
    }

    VerbOutcome::fail(ctx.line, GameError::NothingFound)
}

fn go(ctx: &VerbContext<'_>, tokens: &[String]) -> VerbOutcome {
    let Some(target) = argument(tokens) else {
        return VerbOutcome::fail(ctx.line, GameError::MissingTarget(Verb::Go));
    };
    let Some(direction) = Direction::parse(&target) else {
        return VerbOutcome::fail(ctx.line, GameError::NoExit);
    };
    let Some(exit) = ctx
        .world
        .room(&ctx.player.location)
        .and_then(|room| room.exits.get(&direction))
    else {
        return VerbOutcome::fail(ctx.line, GameError::NoExit);
    };
    if exit.locked {
        return VerbOutcome::fail(ctx.line, GameError::ExitLocked(direction));
    }
    let Some(destination) = ctx.world.room(&exit.destination) else {
        return VerbOutcome::fail(ctx.line, GameError::NoExit);
    };

    let mut text = StyledText::new();
    text.push_str(&format!("You go {}.\n\n", direction));
    text.append(describe_room(destination));

    let mut outcome =
        VerbOutcome::info(ctx.line, text).with_delta(StateDelta::MoveTo(destination.id.clone()));
    if !ctx.player.has_started() {
        outcome = outcome.with_delta(StateDelta::Decide(PlayerDecision::play()));
    }
    if !ctx.player.has_visited(&destination.id) {
        outcome = outcome.with_delta(StateDelta::Decide(PlayerDecision::explore()));
    }
    outcome
}

fn pickup(ctx: &VerbContext<'_>, tokens: &[String]) -> VerbOutcome {
    let Some(item_id) = argument(tokens) else {
        return VerbOutcome::fail(ctx.line, GameError::MissingTarget(Verb::Pickup));
    };
    let present = ctx
        .world
        .room(&ctx.player.location)
        .is_some_and(|room| room.has_item(&item_id));
    if !present {
        return VerbOutcome::fail(ctx.line, GameError::NotHere(item_id));
    }
    if ctx.world.item(&item_id).is_some_and(|item| !item.takeable) {
        return VerbOutcome::fail(ctx.line, GameError::CannotTake(item_id));
    }
    VerbOutcome::info(ctx.line, format!("You pick up the {}.", item_id))
        .with_delta(StateDelta::Take(item_id))
}

fn drop_item(ctx: &VerbContext<'_>, tokens: &[String]) -> VerbOutcome {
    let Some(item_id) = argument(tokens) else {
        return VerbOutcome::fail(ctx.line, GameError::MissingTarget(Verb::Drop));
    };
    if !ctx.player.has_item(&item_id) {
        return VerbOutcome::fail(ctx.line, GameError::NotCarrying);
    }
    VerbOutcome::info(ctx.line, format!("You drop the {}.", item_id))
        .with_delta(StateDelta::Drop(item_id))
}

fn use_item(ctx: &VerbContext<'_>, tokens: &[String]) -> VerbOutcome {
    let Some(item_id) = argument(tokens) else {
        return VerbOutcome::fail(ctx.line, GameError::MissingTarget(Verb::Use));
    };
    if !ctx.player.has_item(&item_id) {
        return VerbOutcome::fail(ctx.line, GameError::NotCarrying);
    }
    let location = &ctx.player.location;
    let room = ctx.world.room(location);

    match ctx.world.item(&item_id).and_then(|item| item.effect.as_ref()) {
        Some(UseEffect::Rest) => VerbOutcome::info(
            ctx.line,
            format!("You drink the {} and rest a while. You feel restored.", item_id),
        )
        .with_delta(StateDelta::Consume(item_id.clone()))
        .with_delta(StateDelta::Decide(PlayerDecision::rest())),

        Some(UseEffect::Unlock {
            room: target,
            direction,
        }) => {
            let locked = target == location
                && room
                    .and_then(|r| r.exits.get(direction))
                    .is_some_and(|exit| exit.locked);
            if !locked {
                return VerbOutcome::fail(ctx.line, GameError::NoEffect(item_id));
            }
            VerbOutcome::info(
                ctx.line,
                format!("You turn the {} in the lock. The way {} is open.", item_id, direction),
            )
            .with_delta(StateDelta::Unlock {
                room: target.clone(),
                direction: *direction,
            })
        }

        Some(UseEffect::Light) => match room.and_then(|r| r.hidden_item.as_ref()) {
            Some(hidden) => VerbOutcome::info(
                ctx.line,
                format!("The {}'s light reveals a {}.", item_id, hidden),
            )
            .with_delta(StateDelta::Reveal(location.clone())),
            None => VerbOutcome::info(
                ctx.line,
                format!("The {} glows, but reveals nothing new.", item_id),
            ),
        },

        Some(UseEffect::Wield) => match room.and_then(|r| r.threat.as_ref()) {
            Some(threat) => VerbOutcome::info(
                ctx.line,
                format!(
                    "You brandish the {}. {} flees into the dark.",
                    item_id,
                    capitalize(threat)
                ),
            )
            .with_delta(StateDelta::Calm(location.clone())),
            None => VerbOutcome::info(
                ctx.line,
                format!("You swing the {} through the empty air.", item_id),
            ),
        },

        None => VerbOutcome::fail(ctx.line, GameError::NoEffect(item_id)),
    }
}

fn inventory(ctx: &VerbContext<'_>, _tokens: &[String]) -> VerbOutcome {
    VerbOutcome::info(ctx.line, format_inventory(ctx.player))
}

fn clear(_ctx: &VerbContext<'_>, _tokens: &[String]) -> VerbOutcome {
    VerbOutcome::Clear
}

fn user_help(ctx: &VerbContext<'_>, _tokens: &[String]) -> VerbOutcome {
    let mut page = StyledText::new();
    page.push_str("Player commands\n\n")
        .append(format_help_table(&Verb::help_entries()));
    VerbOutcome::info(ctx.line, page)
}
