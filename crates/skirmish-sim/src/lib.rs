//! Simulation core for a first-person shooter.
//!
//! Owns the entity registry, runs the per-frame systems (enemy AI, physics
//! pose sync, collision, bullets, explosions, cleanup), and produces a
//! render snapshot for the host each frame. Completely headless: windowing,
//! input, rendering, and rigid-body dynamics all live behind the contracts
//! in skirmish-core.

pub mod ecs;
pub mod engine;
pub mod systems;
pub mod weapon;

pub use ecs::Registry;
pub use engine::Simulation;
pub use skirmish_core as core;
