//! The map: rooms keyed by id and the item catalogue.

use std::collections::HashMap;

use super::types::{Item, Room};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    rooms: HashMap<String, Room>,
    items: HashMap<String, Item>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.id.clone(), room);
    }

    pub fn insert_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains_room(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    /// Room ids in sorted order.
    pub fn room_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.rooms.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Display name of a room, falling back to its id.
    pub fn room_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.rooms.get(id).map(|r| r.name.as_str()).unwrap_or(id)
    }
}
