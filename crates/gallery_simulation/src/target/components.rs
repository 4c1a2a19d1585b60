//! Target entity компоненты
//!
//! Мишень — state machine на "другой стороне" выстрела:
//! Alive → Dying → (PooledIdle | despawn). Classification — закрытый набор
//! подтипов, который и scoring, и presentation читают как данные.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Закрытый набор подтипов мишени
///
/// Enemy подтипы дают положительный score, Civilian (non-combatant) —
/// настроенный отрицательный штраф.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Обычная мишень
    Ordinary,
    /// Неподвижная (дешёвая)
    Stationary,
    /// Уклоняющаяся (дороже)
    Evasive,
    /// Движется по вертикали
    VerticalMover,
    /// High-value мишень
    HighValue,
    /// Non-combatant: попадание штрафуется
    Civilian,
}

impl Classification {
    /// Все варианты (для demo spawner и data-driven таблиц)
    pub const ALL: [Classification; 6] = [
        Classification::Ordinary,
        Classification::Stationary,
        Classification::Evasive,
        Classification::VerticalMover,
        Classification::HighValue,
        Classification::Civilian,
    ];

    pub fn object_kind(self) -> ObjectKind {
        match self {
            Classification::Civilian => ObjectKind::Innocent,
            _ => ObjectKind::Enemy,
        }
    }
}

/// Enemy или Innocent — итог классификации для scoring/UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Enemy,
    Innocent,
}

/// Hittable capability мишени (typed, не reflective probe)
///
/// Отсутствие компонента = collider не является валидной мишенью;
/// dispatcher логирует и пропускает, пайплайн не падает.
#[derive(Component, Debug, Clone)]
pub struct Target {
    pub classification: Classification,
    /// Opaque ключ в presentation assets (skin/theme)
    pub theme: String,
}

/// Life state мишени
///
/// Dying = hit surface выключен (resolver пересекает только Alive),
/// classification заморожена — максимум одно scoring event на жизнь.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifeState {
    #[default]
    Alive,
    Dying,
    /// Невидима, ждёт respawn из пула
    PooledIdle,
}

/// Что делать после Dying settle delay
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnPolicy {
    /// Вернуться в пул (PooledIdle), ждать RespawnTarget
    Pooled,
    /// Сцена без пулинга: entity удаляется целиком (terminal Destroyed)
    Despawn,
}

/// Снимок construction-time состояния
///
/// При возврате в пул restore идёт отсюда, не из mutable состояния
/// прошлой жизни (accumulated scale/classification не протекают).
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnSnapshot {
    pub classification: Classification,
    pub scale: Vec3,
}

/// Явный countdown Dying → PooledIdle/despawn
///
/// Компонент на самой entity вместо отложенного callback: любой другой
/// переход снимает компонент, stale return по recycled entity невозможен.
#[derive(Component, Debug, Clone, Copy)]
pub struct ReturnCountdown {
    pub remaining: f32,
}

impl ReturnCountdown {
    pub fn new(settle_delay: f32) -> Self {
        Self {
            remaining: settle_delay,
        }
    }
}

/// Сфера-collider мишени для ray cast
#[derive(Component, Debug, Clone, Copy)]
pub struct TargetCollider {
    pub radius: f32,
}

impl Default for TargetCollider {
    fn default() -> Self {
        Self { radius: 0.75 }
    }
}

/// Optional presentation asset ключи (fire-and-forget эффекты)
///
/// Каждый эффект null-check'ается отдельно: отсутствующий asset —
/// логируемый skip, не ошибка (score update не блокируется).
#[derive(Component, Debug, Clone, Default)]
pub struct TargetEffects {
    pub particle: Option<String>,
    pub sound: Option<String>,
    pub haptic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civilian_is_innocent() {
        assert_eq!(Classification::Civilian.object_kind(), ObjectKind::Innocent);
    }

    #[test]
    fn test_enemy_subtypes_are_enemies() {
        for classification in Classification::ALL {
            if classification == Classification::Civilian {
                continue;
            }
            assert_eq!(classification.object_kind(), ObjectKind::Enemy);
        }
    }

    #[test]
    fn test_life_state_default_alive() {
        assert_eq!(LifeState::default(), LifeState::Alive);
    }
}
