//! Static content tables: items, monsters, encounters, and shops.

pub mod items;
pub mod monsters;
pub mod shops;

pub use items::*;
pub use monsters::*;
pub use shops::*;
