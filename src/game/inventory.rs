/// Inventory management for the player
use super::state::PlayerState;

/// Add an item; returns false if it was already held.
pub fn add_item_to_inventory(player: &mut PlayerState, item_id: &str) -> bool {
    if player.has_item(item_id) {
        return false;
    }
    player.inventory.push(item_id.to_string());
    true
}

/// Remove an item; returns false if it was not held.
pub fn remove_item_from_inventory(player: &mut PlayerState, item_id: &str) -> bool {
    match player.inventory.iter().position(|i| i == item_id) {
        Some(index) => {
            player.inventory.remove(index);
            true
        }
        None => false,
    }
}

/// Listing in pickup order; an empty inventory gets an explicit message.
pub fn format_inventory(player: &PlayerState) -> String {
    if player.inventory.is_empty() {
        return "Your inventory is empty.".to_string();
    }
    let mut out = String::from("You are carrying:");
    for item in &player.inventory {
        out.push_str("\n  ");
        out.push_str(item);
    }
    out
}
