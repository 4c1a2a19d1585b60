//! Shared компоненты между доменами (projectile, target, presentation)

use bevy::prelude::*;

pub mod camera;

pub use camera::AimCamera;

/// Layer: обычные мишени (enemy + innocent)
pub const LAYER_TARGETS: u32 = 1 << 0;

/// Layer: декорации тира (не участвуют в hit resolution по умолчанию)
pub const LAYER_SCENERY: u32 = 1 << 1;

/// Bitmask membership для ray cast фильтрации
///
/// Input resolver пересекает луч только с entity, чей layer проходит
/// `GalleryConfig::target_layer_mask`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionLayer(pub u32);

impl CollisionLayer {
    pub fn passes(&self, mask: u32) -> bool {
        self.0 & mask != 0
    }
}

/// Флаг видимости для presentation host
///
/// Core — headless: рендер entity живёт снаружи (движок/хост) и синкает
/// видимость по этому флагу. Pool владеет toggle'ом для projectiles
/// (не сама entity), target state machine — для мишеней.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualActive(pub bool);
