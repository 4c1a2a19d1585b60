//! Target domain — мишени тира
//!
//! Classification (закрытый набор подтипов + non-combatant), life state
//! machine Alive → Dying → (PooledIdle | despawn), snapshot restore при
//! возврате в пул, respawn hook для внешнего spawner'а.

pub mod components;
pub mod systems;


pub use components::{
    Classification, LifeState, ObjectKind, RespawnPolicy, ReturnCountdown, SpawnSnapshot, Target,
    TargetCollider, TargetEffects,
};
pub use systems::{respawn_pooled_targets, target_bundle, tick_return_countdowns, RespawnTarget};
