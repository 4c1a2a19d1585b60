//! Input domain — resolver raw pointer event → aim decision
//!
//! Dead zone, rate gate, ray cast, fallback-to-miss. Направление спроектировано
//! так, что score judgment в Direct mode происходит в момент input'а —
//! независимо от frame-rate полёта projectile.

pub mod events;
pub mod resolver;

#[cfg(test)]
mod resolver_tests;

pub use events::AimInput;
pub use resolver::{ray_sphere_intersection, resolve_aim_input, FireControl};
