//! Gallery configuration — внешние, read-only для core данные
//!
//! Хост загружает конфиг из данных (serde) или берёт Default.
//! Core никогда не мутирует конфиг в рантайме.

use crate::logger::log_warning;
use crate::shared::LAYER_TARGETS;
use crate::target::Classification;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Режим hit resolution (mutually exclusive per configuration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireMode {
    /// Classification в момент input'а (recommended): judgment не зависит
    /// от frame-rate-dependent полёта projectile
    Direct,
    /// Hit resolution отложен до контакта projectile с мишенью
    Simulated,
}

/// Конфигурация тира (Bevy Resource)
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Score delta по classification (enemy > 0, Civilian < 0)
    pub score_table: BTreeMap<Classification, i32>,

    /// Money delta по classification
    pub money_table: BTreeMap<Classification, i32>,

    /// Радиус dead zone = fraction × screen height (0.0 = выключено)
    pub dead_zone_fraction: f32,

    /// Минимальный интервал между выстрелами (секунды)
    pub fire_interval: f32,

    /// Eager размер projectile pool (overflow растёт дальше)
    pub pool_capacity: usize,

    /// Скорость projectile (units/sec)
    pub projectile_speed: f32,

    /// Lifetime ceiling projectile (секунды)
    pub projectile_lifetime: f32,

    /// Arrival epsilon: дистанция до target point, считающаяся прибытием
    pub arrival_epsilon: f32,

    /// Дистанция miss-плоскости перед камерой (miss branch)
    pub miss_plane_distance: f32,

    /// Settle delay Dying → PooledIdle/despawn (секунды)
    pub settle_delay: f32,

    /// Ray cast пересекает только entity с layer & mask != 0
    pub target_layer_mask: u32,

    pub fire_mode: FireMode,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let score_table = BTreeMap::from([
            (Classification::Ordinary, 10),
            (Classification::Stationary, 5),
            (Classification::Evasive, 20),
            (Classification::VerticalMover, 15),
            (Classification::HighValue, 50),
            (Classification::Civilian, -25),
        ]);

        let money_table = BTreeMap::from([
            (Classification::Ordinary, 10),
            (Classification::Stationary, 5),
            (Classification::Evasive, 20),
            (Classification::VerticalMover, 15),
            (Classification::HighValue, 50),
            (Classification::Civilian, -50),
        ]);

        Self {
            score_table,
            money_table,
            dead_zone_fraction: 0.08,
            fire_interval: 0.2,
            pool_capacity: 50,
            projectile_speed: 40.0,
            projectile_lifetime: 3.0,
            arrival_epsilon: 0.5,
            miss_plane_distance: 25.0,
            settle_delay: 1.5,
            target_layer_mask: LAYER_TARGETS,
            fire_mode: FireMode::Direct,
        }
    }
}

impl GalleryConfig {
    /// Score delta для classification (missing entry → 0, с warning)
    pub fn score_for(&self, classification: Classification) -> i32 {
        match self.score_table.get(&classification) {
            Some(score) => *score,
            None => {
                log_warning(&format!(
                    "score table has no entry for {:?}, using 0",
                    classification
                ));
                0
            }
        }
    }

    /// Money delta для classification (missing entry → 0, с warning)
    pub fn money_for(&self, classification: Classification) -> i32 {
        match self.money_table.get(&classification) {
            Some(money) => *money,
            None => {
                log_warning(&format!(
                    "money table has no entry for {:?}, using 0",
                    classification
                ));
                0
            }
        }
    }
}
