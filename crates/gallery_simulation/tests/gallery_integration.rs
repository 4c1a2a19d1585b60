//! Gallery integration test
//!
//! End-to-end shot pipeline headless: input → ray cast → dispatch → scoring
//! → target settle → respawn, плюс pool инварианты под нагрузкой.

use bevy::prelude::*;
use gallery_simulation::*;

/// Helper: полный gallery App с детерминированным тиком
fn create_gallery_app(config: GalleryConfig) -> App {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin);
    app.insert_resource(config);
    app
}

fn no_dead_zone() -> GalleryConfig {
    GalleryConfig {
        dead_zone_fraction: 0.0,
        ..Default::default()
    }
}

fn shoot(app: &mut App, screen_pos: Vec2, timestamp: f64) {
    app.world_mut().send_event(AimInput {
        screen_pos,
        timestamp,
    });
}

fn screen_center() -> Vec2 {
    Vec2::new(960.0, 540.0)
}

/// Мишень по центру экрана default камеры
fn spawn_center_target(app: &mut App, classification: Classification) -> Entity {
    app.world_mut()
        .spawn(target_bundle(
            classification,
            "wooden_duck",
            Vec3::new(0.0, 1.6, -10.0),
            Vec3::ONE,
            RespawnPolicy::Pooled,
        ))
        .id()
}

fn board(app: &App) -> ScoreBoard {
    *app.world().resource::<ScoreBoard>()
}

/// Scenario A: fire interval 0.2s, выстрелы t=0.0 и t=0.1 → второй дропается
#[test]
fn test_rate_limit_end_to_end() {
    let mut app = create_gallery_app(GalleryConfig {
        fire_interval: 0.2,
        ..no_dead_zone()
    });
    spawn_center_target(&mut app, Classification::Ordinary);

    shoot(&mut app, screen_center(), 0.0);
    shoot(&mut app, screen_center(), 0.1);
    step_fixed(&mut app);

    // Только первый зарегистрировался
    assert_eq!(board(&app).hits, 1);
    assert_eq!(
        app.world().resource::<FireControl>().last_shot,
        Some(0.0),
        "дропнутый выстрел не двигает timestamp"
    );
}

/// Scenario B: high-value 50 + повторное попадание не скорится
#[test]
fn test_high_value_hit_scores_once() {
    let mut app = create_gallery_app(no_dead_zone());
    let target = spawn_center_target(&mut app, Classification::HighValue);

    shoot(&mut app, screen_center(), 0.0);
    step_fixed(&mut app);

    assert_eq!(board(&app).score, 50);
    assert_eq!(
        *app.world().get::<LifeState>(target).unwrap(),
        LifeState::Dying
    );

    // Немедленный второй выстрел: Dying мишень не пересекается лучом →
    // miss branch, score не меняется
    shoot(&mut app, screen_center(), 1.0);
    step_fixed(&mut app);

    assert_eq!(board(&app).score, 50);
    assert_eq!(board(&app).hits, 1);
}

/// Scenario C: projectile с lifetime 3s, цель недостижима → self-return
/// ровно на тике t=3s
#[test]
fn test_projectile_lifetime_self_return() {
    let mut app = create_gallery_app(GalleryConfig {
        projectile_speed: 0.5,
        projectile_lifetime: 3.0,
        miss_plane_distance: 1000.0,
        ..no_dead_zone()
    });

    // Пустая сцена → miss branch, цель в 1000 units при 0.5 u/s
    shoot(&mut app, screen_center(), 0.0);
    step_fixed(&mut app);
    assert_eq!(app.world().resource::<ProjectilePool>().in_flight_len(), 1);

    // До t=3s — всё ещё в полёте
    for _ in 0..178 {
        step_fixed(&mut app);
    }
    assert_eq!(app.world().resource::<ProjectilePool>().in_flight_len(), 1);

    // Тик t=3.0 — возврат в пул
    step_fixed(&mut app);
    let pool = app.world().resource::<ProjectilePool>();
    assert_eq!(pool.in_flight_len(), 0);
    assert_eq!(pool.free_len(), pool.spawned_total);
}

#[test]
fn test_innocent_hit_penalized() {
    let mut app = create_gallery_app(no_dead_zone());
    spawn_center_target(&mut app, Classification::Civilian);

    shoot(&mut app, screen_center(), 0.0);
    step_fixed(&mut app);

    let board = board(&app);
    assert!(board.score < 0);
    assert!(board.money < 0);
    assert_eq!(board.innocents_hit, 1);
}

#[test]
fn test_dead_zone_center_rejected_end_to_end() {
    let mut app = create_gallery_app(GalleryConfig {
        dead_zone_fraction: 0.08,
        ..Default::default()
    });
    spawn_center_target(&mut app, Classification::HighValue);

    shoot(&mut app, screen_center(), 0.0);
    step_fixed(&mut app);

    assert_eq!(board(&app).hits, 0);
    assert_eq!(app.world().resource::<ProjectilePool>().in_flight_len(), 0);
}

/// Полный цикл жизни мишени: hit → Dying → settle → PooledIdle → respawn →
/// Alive → второй hit скорится снова (ровно одно scoring event на жизнь)
#[test]
fn test_target_respawn_cycle() {
    let mut app = create_gallery_app(GalleryConfig {
        settle_delay: 0.5,
        ..no_dead_zone()
    });
    let target = spawn_center_target(&mut app, Classification::Evasive);

    shoot(&mut app, screen_center(), 0.0);
    step_fixed(&mut app);
    assert_eq!(board(&app).score, 20);

    // Settle delay 0.5s = 30 тиков
    for _ in 0..31 {
        step_fixed(&mut app);
    }
    assert_eq!(
        *app.world().get::<LifeState>(target).unwrap(),
        LifeState::PooledIdle
    );
    assert!(!app.world().get::<VisualActive>(target).unwrap().0);

    // Spawner возвращает мишень в строй
    app.world_mut().send_event(RespawnTarget {
        target,
        position: None,
    });
    step_fixed(&mut app);
    assert_eq!(
        *app.world().get::<LifeState>(target).unwrap(),
        LifeState::Alive
    );

    // Вторая жизнь скорится заново
    shoot(&mut app, screen_center(), 5.0);
    step_fixed(&mut app);
    assert_eq!(board(&app).score, 40);
    assert_eq!(board(&app).hits, 2);
}

/// Simulated mode: judgment отложен до контакта projectile
#[test]
fn test_simulated_mode_scores_on_contact() {
    let mut app = create_gallery_app(GalleryConfig {
        fire_mode: FireMode::Simulated,
        ..no_dead_zone()
    });
    let target = spawn_center_target(&mut app, Classification::Ordinary);

    shoot(&mut app, screen_center(), 0.0);
    step_fixed(&mut app);

    // В момент input'а score ещё нет
    assert_eq!(board(&app).hits, 0);

    // 10 units при 40 u/s → контакт в пределах ~секунды
    for _ in 0..60 {
        step_fixed(&mut app);
    }
    assert_eq!(board(&app).score, 10);
    assert_eq!(
        *app.world().get::<LifeState>(target).unwrap(),
        LifeState::Dying
    );
}

/// Пул никогда не отказывает: очередь выстрелов больше capacity
#[test]
fn test_pool_overflow_under_load() {
    let mut app = create_gallery_app(GalleryConfig {
        fire_interval: 0.0,
        pool_capacity: 3,
        projectile_lifetime: 30.0,
        projectile_speed: 0.1,
        miss_plane_distance: 500.0,
        ..no_dead_zone()
    });

    for shot in 0..10 {
        shoot(&mut app, Vec2::new(400.0, 300.0), shot as f64 * 0.01);
    }
    step_fixed(&mut app);

    let pool = app.world().resource::<ProjectilePool>();
    assert_eq!(pool.in_flight_len(), 10, "ни один выстрел не дропнут");
    assert_eq!(pool.spawned_total, 10); // 3 prewarmed + 7 overflow
    assert_eq!(pool.free_len(), 0);
}
