//! Tests for input resolver.

#[cfg(test)]
mod tests {
    use crate::config::GalleryConfig;
    use crate::input::{ray_sphere_intersection, resolve_aim_input, AimInput, FireControl};
    use crate::projectile::{init_projectile_pool, ProjectilePool};
    use crate::scoring::TargetStruck;
    use crate::shared::{AimCamera, CollisionLayer, LAYER_SCENERY};
    use crate::target::{target_bundle, Classification, RespawnPolicy};
    use bevy::prelude::*;

    fn resolver_app(config: GalleryConfig) -> App {
        let mut app = App::new();
        app.insert_resource(Time::<Fixed>::from_hz(60.0))
            .insert_resource(config)
            .init_resource::<AimCamera>()
            .init_resource::<ProjectilePool>()
            .init_resource::<FireControl>()
            .add_event::<AimInput>()
            .add_event::<TargetStruck>()
            .add_systems(Update, (init_projectile_pool, resolve_aim_input).chain());
        app
    }

    fn aim(app: &mut App, screen_pos: Vec2, timestamp: f64) {
        app.world_mut().send_event(AimInput {
            screen_pos,
            timestamp,
        });
    }

    fn center() -> Vec2 {
        Vec2::new(960.0, 540.0)
    }

    // Мишень прямо по центру экрана default камеры (высота 1.6, смотрит -Z)
    fn spawn_center_target(app: &mut App) -> Entity {
        app.world_mut()
            .spawn(target_bundle(
                Classification::Ordinary,
                "tin_can",
                Vec3::new(0.0, 1.6, -10.0),
                Vec3::ONE,
                RespawnPolicy::Pooled,
            ))
            .id()
    }

    #[test]
    fn test_ray_sphere_direct_hit() {
        let t = ray_sphere_intersection(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -10.0), 1.0);
        assert!((t.unwrap() - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let t = ray_sphere_intersection(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(5.0, 0.0, -10.0), 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_sphere_behind_origin() {
        let t = ray_sphere_intersection(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_sphere_origin_inside() {
        let t = ray_sphere_intersection(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -0.2), 1.0);
        assert_eq!(t, Some(0.0));
    }

    #[test]
    fn test_rate_limit_drops_second_shot() {
        let config = GalleryConfig {
            dead_zone_fraction: 0.0,
            fire_interval: 0.2,
            ..Default::default()
        };
        let mut app = resolver_app(config);

        // Два выстрела ближе чем fire_interval
        aim(&mut app, center(), 0.0);
        aim(&mut app, center(), 0.1);
        app.update();

        let pool = app.world().resource::<ProjectilePool>();
        assert_eq!(pool.in_flight_len(), 1);

        // Второй выстрел НЕ обновил timestamp
        let fire = app.world().resource::<FireControl>();
        assert_eq!(fire.last_shot, Some(0.0));
    }

    #[test]
    fn test_first_shot_always_passes() {
        let mut app = resolver_app(GalleryConfig {
            dead_zone_fraction: 0.0,
            ..Default::default()
        });

        aim(&mut app, center(), 123.45);
        app.update();

        assert_eq!(app.world().resource::<ProjectilePool>().in_flight_len(), 1);
        assert_eq!(
            app.world().resource::<FireControl>().last_shot,
            Some(123.45)
        );
    }

    #[test]
    fn test_dead_zone_rejects_center() {
        let mut app = resolver_app(GalleryConfig {
            dead_zone_fraction: 0.1,
            ..Default::default()
        });

        aim(&mut app, center(), 0.0);
        app.update();

        let pool = app.world().resource::<ProjectilePool>();
        assert_eq!(pool.in_flight_len(), 0);
        // Отклонённый event не трогает rate limit
        assert_eq!(app.world().resource::<FireControl>().last_shot, None);
    }

    #[test]
    fn test_zero_dead_zone_accepts_center() {
        let mut app = resolver_app(GalleryConfig {
            dead_zone_fraction: 0.0,
            ..Default::default()
        });

        aim(&mut app, center(), 0.0);
        app.update();

        assert_eq!(app.world().resource::<ProjectilePool>().in_flight_len(), 1);
    }

    #[test]
    fn test_hit_branch_emits_target_struck() {
        let mut app = resolver_app(GalleryConfig {
            dead_zone_fraction: 0.0,
            ..Default::default()
        });
        let target = spawn_center_target(&mut app);

        aim(&mut app, center(), 0.0);
        app.update();

        let struck: Vec<_> = app
            .world_mut()
            .resource_mut::<Events<TargetStruck>>()
            .drain()
            .collect();
        assert_eq!(struck.len(), 1);
        assert_eq!(struck[0].target, target);
        // Impact point на поверхности сферы перед мишенью
        assert!(struck[0].impact_point.z > -10.0 && struck[0].impact_point.z < -9.0);
    }

    #[test]
    fn test_miss_branch_fires_projectile_without_scoring() {
        let mut app = resolver_app(GalleryConfig {
            dead_zone_fraction: 0.0,
            ..Default::default()
        });

        // Пустая сцена — гарантированный miss
        aim(&mut app, Vec2::new(300.0, 200.0), 0.0);
        app.update();

        assert_eq!(app.world().resource::<ProjectilePool>().in_flight_len(), 1);
        let struck = app.world().resource::<Events<TargetStruck>>();
        assert_eq!(struck.len(), 0);
    }

    #[test]
    fn test_layer_mask_excludes_scenery() {
        let mut app = resolver_app(GalleryConfig {
            dead_zone_fraction: 0.0,
            ..Default::default()
        });
        let target = spawn_center_target(&mut app);
        app.world_mut()
            .entity_mut(target)
            .insert(CollisionLayer(LAYER_SCENERY));

        aim(&mut app, center(), 0.0);
        app.update();

        // Scenery layer не проходит mask → miss branch
        let struck = app.world().resource::<Events<TargetStruck>>();
        assert_eq!(struck.len(), 0);
    }

    #[test]
    fn test_nearest_target_wins() {
        let mut app = resolver_app(GalleryConfig {
            dead_zone_fraction: 0.0,
            ..Default::default()
        });
        let _far = spawn_center_target(&mut app);
        let near = app
            .world_mut()
            .spawn(target_bundle(
                Classification::HighValue,
                "tin_can",
                Vec3::new(0.0, 1.6, -5.0),
                Vec3::ONE,
                RespawnPolicy::Pooled,
            ))
            .id();

        aim(&mut app, center(), 0.0);
        app.update();

        let struck: Vec<_> = app
            .world_mut()
            .resource_mut::<Events<TargetStruck>>()
            .drain()
            .collect();
        assert_eq!(struck.len(), 1);
        assert_eq!(struck[0].target, near);
    }

    #[test]
    fn test_pool_grows_past_capacity() {
        let mut app = resolver_app(GalleryConfig {
            dead_zone_fraction: 0.0,
            fire_interval: 0.0,
            pool_capacity: 2,
            ..Default::default()
        });

        for shot in 0..5 {
            aim(&mut app, center(), shot as f64);
        }
        app.update();

        let pool = app.world().resource::<ProjectilePool>();
        assert_eq!(pool.in_flight_len(), 5);
        assert_eq!(pool.spawned_total, 5); // 2 prewarmed + 3 overflow
        assert_eq!(pool.free_len(), 0);
    }
}
