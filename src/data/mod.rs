//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! collection. Repositories use SeaORM entity models internally and return entity
//! models to the service layer, which converts them to parameter models. All
//! database queries, inserts and updates are performed through these repositories.

pub mod club;
pub mod player;

#[cfg(test)]
mod test;

pub use club::ClubRepository;
pub use player::PlayerRepository;
