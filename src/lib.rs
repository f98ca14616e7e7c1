//! Dragonfell - turn-based RPG engine.
//!
//! The combat, progression, inventory, and loot logic for a tile-based
//! RPG, fully separated from rendering: scenes call the operations here
//! and draw from the returned events and state snapshots.

pub mod build_info;
pub mod catalog;
pub mod character;
pub mod combat;
pub mod core;
pub mod inventory;
pub mod loot;
pub mod save_manager;
pub mod shop;

pub use crate::core::game_state::GameState;
