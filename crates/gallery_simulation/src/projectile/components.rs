//! Projectile entity компоненты
//!
//! Жизненный цикл: Idle (в пуле) → InFlight → (Arrived | Expired | Struck) → Idle.
//! Позиция — обычный Bevy Transform; presentation host синкает по VisualActive.

use bevy::prelude::*;

/// Маркер: entity принадлежит projectile pool
///
/// Инвариант: pooled entity всегда ровно в одном из {free list, in-flight set}.
#[derive(Component, Debug)]
pub struct PooledProjectile;

/// Flight state projectile
///
/// Idle entity не двигается per-frame update'ом; InFlight принадлежит ровно
/// одному активному выстрелу. Idle→InFlight только через pool acquire.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Idle,
    InFlight,
}

/// Кинематика полёта
#[derive(Component, Debug, Clone)]
pub struct Projectile {
    /// Unit vector направления полёта
    pub direction: Vec3,
    /// Units/sec
    pub speed: f32,
    /// Мировая точка, к которой летим (impact point или miss point)
    pub target_point: Vec3,
    /// Накопленное время полёта (секунды)
    pub time_alive: f32,
    /// Lifetime ceiling (секунды) — self-return по истечении
    pub lifetime: f32,
    /// Simulated fire mode: hit resolution по контакту с мишенью
    pub resolve_on_contact: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            direction: Vec3::NEG_Z,
            speed: 40.0,
            target_point: Vec3::ZERO,
            time_alive: 0.0,
            lifetime: 3.0,
            resolve_on_contact: false,
        }
    }
}

/// Чем закончился полёт
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightOutcome {
    /// Дошёл до target point (в пределах arrival epsilon)
    Arrived,
    /// Lifetime ceiling истёк, до цели не дошёл
    Expired,
    /// Simulated mode: контакт с живой мишенью
    Struck { target: Entity },
}

/// Маркер завершённого полёта — снимается reclaim'ом в том же кадре
///
/// Advancement строго раньше pool cleanup (chained), так что projectile,
/// завершившийся в этом кадре, выходит из active set до input следующего.
#[derive(Component, Debug, Clone, Copy)]
pub struct FlightComplete {
    pub outcome: FlightOutcome,
}
