mod player_inventory;

pub use player_inventory::PlayerInventory;
