//! Aim camera — screen point → world ray
//!
//! Core headless: настоящей камеры рендера тут нет, только pinhole-модель
//! для input resolution. Хост синкает transform/fov со своей камерой.

use bevy::prelude::*;

/// Камера прицеливания (ECS-side value object)
///
/// Fallbacks (никогда не fatal):
/// - хост не назначил камеру → Default (origin, смотрит -Z, 60° fov)
/// - хост не назначил fire point → projectile вылетает из позиции камеры
#[derive(Resource, Debug, Clone)]
pub struct AimCamera {
    /// Позиция + ориентация камеры (Bevy convention: forward = -Z)
    pub transform: Transform,
    /// Vertical field of view (радианы)
    pub vertical_fov: f32,
    /// Размер экрана в пикселях (для NDC конверсии и dead zone)
    pub screen_size: Vec2,
    /// Откуда вылетает визуальный projectile (None = позиция камеры)
    pub fire_point: Option<Vec3>,
}

impl Default for AimCamera {
    fn default() -> Self {
        Self {
            transform: Transform::from_xyz(0.0, 1.6, 0.0),
            vertical_fov: 60f32.to_radians(),
            screen_size: Vec2::new(1920.0, 1080.0),
            fire_point: None,
        }
    }
}

impl AimCamera {
    /// Луч из камеры через screen point (пиксели, y вниз)
    ///
    /// Возвращает (origin, unit direction). Длина луча не ограничена.
    pub fn screen_ray(&self, screen_pos: Vec2) -> (Vec3, Vec3) {
        let ndc = Vec2::new(
            screen_pos.x / self.screen_size.x * 2.0 - 1.0,
            1.0 - screen_pos.y / self.screen_size.y * 2.0,
        );

        let tan_half = (self.vertical_fov * 0.5).tan();
        let aspect = self.screen_size.x / self.screen_size.y;

        let local = Vec3::new(ndc.x * tan_half * aspect, ndc.y * tan_half, -1.0);
        let dir = (self.transform.rotation * local).normalize();

        (self.transform.translation, dir)
    }

    /// Miss branch: проекция screen point на плоскость в `distance` перед камерой
    ///
    /// Плоскость перпендикулярна forward камеры — projectile летит туда
    /// для визуальной непрерывности, без scoring.
    pub fn miss_point(&self, screen_pos: Vec2, distance: f32) -> Vec3 {
        let (origin, dir) = self.screen_ray(screen_pos);
        let forward = *self.transform.forward();

        let denom = dir.dot(forward);
        let t = if denom > 1e-6 { distance / denom } else { distance };

        origin + dir * t
    }

    /// Точка вылета projectile (fallback: позиция камеры)
    pub fn fire_origin(&self) -> Vec3 {
        self.fire_point.unwrap_or(self.transform.translation)
    }

    /// Центр экрана (пиксели) — центр dead zone
    pub fn screen_center(&self) -> Vec2 {
        self.screen_size * 0.5
    }
}
