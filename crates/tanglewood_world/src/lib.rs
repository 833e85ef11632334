//! Entity model, world registry, and description structures for Tanglewood.
//!
//! This crate provides:
//! - [`EntityInfo`], [`Artefact`], [`Furniture`], [`Character`], [`Thing`] -
//!   the world object model
//! - [`Location`] - a place with its four ownership lists
//! - [`Player`] - per-actor state (inventory, location, health)
//! - [`World`] - the central registry owning every entity
//! - [`description`] - the already-parsed ingestion structures
//!
//! Ownership is kept unambiguous by construction: every artefact lives in
//! exactly one container (a location, a player's inventory, or the
//! storeroom), and relocation moves values between containers rather than
//! sharing references.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod description;
mod entity;
mod location;
mod player;
mod registry;

pub use entity::{Artefact, Character, Entity, EntityInfo, Furniture, Thing};
pub use location::Location;
pub use player::{DamageOutcome, MAX_HEALTH, Player};
pub use registry::World;
