//! Input resolver — screen point → aim decision
//!
//! Per event: rate gate → dead zone → ray cast → hit/miss branch.
//! Оба branch'а запускают визуальный projectile из пула; scoring только
//! на hit branch (Direct mode — немедленно, Simulated — по контакту).

use crate::config::{FireMode, GalleryConfig};
use crate::projectile::{
    idle_projectile_bundle, PooledProjectile, Projectile, ProjectilePool, ProjectileState,
};
use crate::scoring::TargetStruck;
use crate::shared::{AimCamera, CollisionLayer, VisualActive};
use crate::target::{LifeState, Target, TargetCollider};
use bevy::prelude::*;

use super::events::AimInput;

/// Rate limit state
#[derive(Resource, Debug, Default)]
pub struct FireControl {
    /// Timestamp последнего принятого выстрела (None = ещё не стреляли,
    /// первый выстрел проходит всегда)
    pub last_shot: Option<f64>,
}

/// Ray vs sphere: ближайший t вдоль луча (длина не ограничена)
///
/// Возвращает None, если сфера позади origin или луч мимо.
pub fn ray_sphere_intersection(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let projection = to_center.dot(dir);

    let closest_sq = to_center.length_squared() - projection * projection;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }

    let half_chord = (radius_sq - closest_sq).sqrt();
    let t_near = projection - half_chord;
    let t_far = projection + half_chord;

    if t_near >= 0.0 {
        Some(t_near)
    } else if t_far >= 0.0 {
        // Origin внутри сферы
        Some(0.0)
    } else {
        None
    }
}

/// Система: resolve входящих aim events
///
/// 1. Rate gate: timestamp − last_shot < fire_interval → silent drop,
///    timestamp НЕ обновляется
/// 2. Dead zone: круг в центре экрана, радиус = fraction × screen height
///    (fraction 0 — выключено, центр принимается)
/// 3. Луч через screen point, пересечение с Alive мишенями по layer mask,
///    ближайшее пересечение побеждает
/// 4. Hit + Direct → TargetStruck сразу; Hit + Simulated → judgment
///    отложен до контакта projectile
/// 5. Miss → точка на плоскости в miss_plane_distance, projectile летит
///    туда для визуальной непрерывности, scoring нет
/// 6. last_shot обновляется для каждого принятого event'а (hit или miss)
pub fn resolve_aim_input(
    mut commands: Commands,
    mut inputs: EventReader<AimInput>,
    mut fire: ResMut<FireControl>,
    camera: Res<AimCamera>,
    config: Res<GalleryConfig>,
    mut pool: ResMut<ProjectilePool>,
    mut pooled: Query<
        (
            &mut Projectile,
            &mut ProjectileState,
            &mut Transform,
            &mut VisualActive,
        ),
        (With<PooledProjectile>, Without<Target>),
    >,
    targets: Query<
        (Entity, &Transform, &TargetCollider, &CollisionLayer, &LifeState),
        With<Target>,
    >,
    mut struck_events: EventWriter<TargetStruck>,
) {
    for input in inputs.read() {
        // 1. Rate gate (silent drop, очереди выстрелов нет)
        if let Some(last) = fire.last_shot {
            if input.timestamp - last < f64::from(config.fire_interval) {
                continue;
            }
        }

        // 2. Dead zone
        let dead_zone_radius = config.dead_zone_fraction * camera.screen_size.y;
        if dead_zone_radius > 0.0
            && input.screen_pos.distance(camera.screen_center()) <= dead_zone_radius
        {
            continue;
        }

        // 3. Ray cast: ближайшая Alive мишень, проходящая mask
        let (origin, dir) = camera.screen_ray(input.screen_pos);

        let mut nearest: Option<(Entity, f32)> = None;
        for (entity, transform, collider, layer, life) in targets.iter() {
            if *life != LifeState::Alive || !layer.passes(config.target_layer_mask) {
                continue;
            }
            if let Some(t) =
                ray_sphere_intersection(origin, dir, transform.translation, collider.radius)
            {
                if nearest.map_or(true, |(_, best)| t < best) {
                    nearest = Some((entity, t));
                }
            }
        }

        // 4/5. Hit или miss branch
        let aim_point = match nearest {
            Some((target, t)) => {
                let impact_point = origin + dir * t;
                if config.fire_mode == FireMode::Direct {
                    struck_events.send(TargetStruck {
                        target,
                        impact_point,
                    });
                }
                impact_point
            }
            None => camera.miss_point(input.screen_pos, config.miss_plane_distance),
        };

        launch_projectile(
            &mut commands,
            &mut pool,
            &mut pooled,
            &camera,
            &config,
            aim_point,
        );

        // 6. Принятый выстрел продвигает rate limit всегда
        fire.last_shot = Some(input.timestamp);
    }
}

/// Acquire из пула (или manufacture при overflow) + launch к aim point
fn launch_projectile(
    commands: &mut Commands,
    pool: &mut ProjectilePool,
    pooled: &mut Query<
        (
            &mut Projectile,
            &mut ProjectileState,
            &mut Transform,
            &mut VisualActive,
        ),
        (With<PooledProjectile>, Without<Target>),
    >,
    camera: &AimCamera,
    config: &GalleryConfig,
    aim_point: Vec3,
) {
    let fire_origin = camera.fire_origin();
    let direction = (aim_point - fire_origin).normalize_or(*camera.transform.forward());

    let flight = Projectile {
        direction,
        speed: config.projectile_speed,
        target_point: aim_point,
        time_alive: 0.0,
        lifetime: config.projectile_lifetime,
        resolve_on_contact: config.fire_mode == FireMode::Simulated,
    };

    if let Some(entity) = pool.pop_free() {
        // Acquire re-homes позицию на fire point и сбрасывает time_alive
        let Ok((mut projectile, mut state, mut transform, mut visual)) = pooled.get_mut(entity)
        else {
            // Free list содержит только pooled entities; сюда не попадаем
            return;
        };
        *projectile = flight;
        *state = ProjectileState::InFlight;
        transform.translation = fire_origin;
        visual.0 = true;
    } else {
        // Overflow: пул растёт вместо дропа выстрела
        let entity = commands
            .spawn(idle_projectile_bundle())
            .insert((
                flight,
                ProjectileState::InFlight,
                Transform::from_translation(fire_origin),
                VisualActive(true),
            ))
            .id();
        pool.register_overflow(entity);
    }
}
