// Game master schema - shared record definitions
// These are the normalized records produced by game master ingestion. They
// carry no behaviour beyond small accessors, and all of them serialize so a
// loaded store can be snapshotted and restored.

// Re-export the main types
pub use battle_data::*;
pub use move_data::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod battle_data;
pub mod move_data;
pub mod pokemon_types;
pub mod species_data;
