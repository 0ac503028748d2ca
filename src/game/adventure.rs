//! The adventure: player state plus world, driven through the verb table.

use log::{debug, info};

use crate::logutil::escape_log;
use crate::terminal::{CommandDelegate, DelegateReply, HelpEntry};

use super::actions::{PlayerActions, StateDelta, VerbContext, VerbOutcome};
use super::errors::GameError;
use super::inventory::{add_item_to_inventory, remove_item_from_inventory};
use super::state::{canonical_world_seed, PlayerState, START_LOCATION_ID};
use super::types::PlayerDecision;
use super::verbs::{DispatchMode, Verb, VerbMatcher};
use super::world::World;

/// Single-player game state and the rules that mutate it.
///
/// Owns a pristine copy of the starting world so [`Adventure::reset`] can
/// restore it.
pub struct Adventure {
    player: PlayerState,
    world: World,
    seed: World,
    start_location: String,
    actions: PlayerActions,
    matcher: Box<dyn VerbMatcher>,
}

impl Adventure {
    /// Canonical world, starting in the clearing, leading-token dispatch.
    pub fn new() -> Self {
        Self::assemble(canonical_world_seed(), START_LOCATION_ID.to_string())
    }

    /// Canonical world with a different starting room.
    pub fn starting_at(location: &str) -> Result<Self, GameError> {
        Self::with_world(canonical_world_seed(), location)
    }

    pub fn with_world(world: World, location: &str) -> Result<Self, GameError> {
        if !world.contains_room(location) {
            return Err(GameError::UnknownRoom(location.to_string()));
        }
        Ok(Self::assemble(world, location.to_string()))
    }

    fn assemble(world: World, start_location: String) -> Self {
        Self {
            player: PlayerState::new(&start_location),
            seed: world.clone(),
            world,
            start_location,
            actions: PlayerActions::standard(),
            matcher: DispatchMode::default().matcher(),
        }
    }

    pub fn with_matcher(mut self, matcher: Box<dyn VerbMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_dispatch_mode(self, mode: DispatchMode) -> Self {
        self.with_matcher(mode.matcher())
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn start_location(&self) -> &str {
        &self.start_location
    }

    /// Append a decision to the player's history.
    pub fn make_decision(&mut self, decision: PlayerDecision) {
        debug!("decision recorded: {}", decision.kind);
        self.player.decisions.push(decision);
    }

    /// Back to the starting room with the seed world, empty inventory
    /// and no decisions.
    pub fn reset(&mut self) {
        info!("adventure reset to {}", self.start_location);
        self.world = self.seed.clone();
        self.player = PlayerState::new(&self.start_location);
    }

    /// Run `verb` against the current state and apply what it changed.
    pub fn execute(&mut self, verb: Verb, line: &str, tokens: &[String]) -> DelegateReply {
        let outcome = match self.actions.get(verb) {
            Some(handler) => {
                let ctx = VerbContext {
                    line,
                    player: &self.player,
                    world: &self.world,
                };
                handler(&ctx, tokens)
            }
            None => VerbOutcome::fail(line, GameError::NothingFound),
        };

        match outcome {
            VerbOutcome::Record { record, deltas } => {
                for delta in deltas {
                    self.apply(delta);
                }
                DelegateReply::Record(record)
            }
            VerbOutcome::Clear => DelegateReply::Clear,
        }
    }

    fn apply(&mut self, delta: StateDelta) {
        match delta {
            StateDelta::MoveTo(room) => {
                debug!("player moves {} -> {}", self.player.location, room);
                if !self.player.has_visited(&room) {
                    self.player.visited.push(room.clone());
                }
                self.player.location = room;
            }
            StateDelta::Take(item) => {
                if let Some(room) = self.world.room_mut(&self.player.location) {
                    room.items.retain(|i| i != &item);
                }
                add_item_to_inventory(&mut self.player, &item);
            }
            StateDelta::Drop(item) => {
                if remove_item_from_inventory(&mut self.player, &item) {
                    if let Some(room) = self.world.room_mut(&self.player.location) {
                        room.items.push(item);
                    }
                }
            }
            StateDelta::Consume(item) => {
                remove_item_from_inventory(&mut self.player, &item);
            }
            StateDelta::Unlock { room, direction } => {
                if let Some(exit) = self
                    .world
                    .room_mut(&room)
                    .and_then(|r| r.exits.get_mut(&direction))
                {
                    info!("exit {} of {} unlocked", direction, room);
                    exit.locked = false;
                }
            }
            StateDelta::Reveal(room) => {
                if let Some(room) = self.world.room_mut(&room) {
                    if let Some(item) = room.hidden_item.take() {
                        if !room.has_item(&item) {
                            room.items.push(item);
                        }
                    }
                }
            }
            StateDelta::Calm(room) => {
                if let Some(room) = self.world.room_mut(&room) {
                    room.threat = None;
                }
            }
            StateDelta::Decide(decision) => self.make_decision(decision),
        }
    }
}

impl Default for Adventure {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandDelegate for Adventure {
    fn help_entries(&self) -> Vec<HelpEntry> {
        Verb::help_entries()
    }

    fn dispatch(&mut self, line: &str, tokens: &[String]) -> Option<DelegateReply> {
        let verb = self.matcher.match_verb(line, tokens)?;
        debug!("verb {:?} for '{}'", verb, escape_log(line));
        Some(self.execute(verb, line, tokens))
    }
}
