//! Projectile domain — pool + flight state machine
//!
//! - pool: FIFO reusable-object cache (acquire/release, overflow growth)
//! - components: Projectile, ProjectileState, FlightComplete
//! - systems: prewarm, advance, reclaim (chained в SimulationPlugin)

pub mod components;
pub mod pool;
pub mod systems;


pub use components::{FlightComplete, FlightOutcome, PooledProjectile, Projectile, ProjectileState};
pub use pool::ProjectilePool;
pub use systems::{advance_projectiles, idle_projectile_bundle, init_projectile_pool, reclaim_projectiles};
