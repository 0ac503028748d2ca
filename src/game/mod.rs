//! Single-player adventure state and the player verb vocabulary.
//!
//! [`Adventure`] is the [`CommandDelegate`](crate::terminal::CommandDelegate)
//! the interpreter hands unrecognized lines to. A [`VerbMatcher`] picks the
//! verb, the handler in [`PlayerActions`] computes the reply and state
//! changes, and the adventure applies them.

pub mod actions;
pub mod adventure;
pub mod errors;
pub mod inventory;
pub mod state;
pub mod types;
pub mod verbs;
pub mod world;

pub use actions::{describe_room, PlayerActions, StateDelta, VerbContext, VerbHandler, VerbOutcome};
pub use adventure::Adventure;
pub use errors::GameError;
pub use inventory::{add_item_to_inventory, format_inventory, remove_item_from_inventory};
pub use state::{canonical_world_seed, PlayerState, START_LOCATION_ID, SWORD_ITEM_ID};
pub use types::*;
pub use verbs::{DispatchMode, ExactLineMatcher, LeadingTokenMatcher, Verb, VerbMatcher};
pub use world::World;
