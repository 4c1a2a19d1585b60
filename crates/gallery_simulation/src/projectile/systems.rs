//! Projectile flight systems (FixedUpdate)
//!
//! Порядок внутри кадра гарантирован chain'ом в SimulationPlugin:
//! advance → … → reclaim. Projectile, завершивший полёт в этом кадре,
//! покидает active set до обработки input следующего кадра.

use crate::config::GalleryConfig;
use crate::projectile::components::{
    FlightComplete, FlightOutcome, PooledProjectile, Projectile, ProjectileState,
};
use crate::projectile::pool::ProjectilePool;
use crate::scoring::TargetStruck;
use crate::shared::VisualActive;
use crate::target::{LifeState, Target, TargetCollider};
use bevy::prelude::*;

/// Bundle для idle pooled projectile (prewarm и overflow manufacture)
pub fn idle_projectile_bundle() -> impl Bundle {
    (
        PooledProjectile,
        Projectile::default(),
        ProjectileState::Idle,
        Transform::default(),
        VisualActive(false),
    )
}

/// Система: eager prewarm пула на первом тике
///
/// Изготавливает capacity entities и кладёт их в free list. Работает до
/// input resolution (первая в chain), так что первый выстрел уже reuse'ит.
pub fn init_projectile_pool(
    mut commands: Commands,
    mut pool: ResMut<ProjectilePool>,
    config: Res<GalleryConfig>,
) {
    if pool.initialized {
        return;
    }
    pool.initialized = true;
    pool.capacity = config.pool_capacity;

    for _ in 0..config.pool_capacity {
        let entity = commands.spawn(idle_projectile_bundle()).id();
        pool.register_idle(entity);
    }
}

/// Система: продвижение всех InFlight projectiles
///
/// Завершение полёта (в порядке приоритета):
/// 1. Simulated mode: sphere overlap с живой мишенью → Struck (+ TargetStruck)
/// 2. Дистанция до target point покрывается этим шагом → Arrived (snap)
/// 3. time_alive >= lifetime → Expired
///
/// Idle entities не трогаем.
pub fn advance_projectiles(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    config: Res<GalleryConfig>,
    mut projectiles: Query<
        (
            Entity,
            &mut Projectile,
            &ProjectileState,
            &mut Transform,
            Option<&FlightComplete>,
        ),
        (With<PooledProjectile>, Without<Target>),
    >,
    targets: Query<(Entity, &Transform, &TargetCollider, &LifeState), With<Target>>,
    mut struck_events: EventWriter<TargetStruck>,
) {
    let delta = time.delta_secs();

    for (entity, mut projectile, state, mut transform, complete) in projectiles.iter_mut() {
        if *state != ProjectileState::InFlight || complete.is_some() {
            continue;
        }

        projectile.time_alive += delta;
        let travel = projectile.speed * delta;

        // Шаг покрывает остаток пути → snap на target point (без туннеля мимо epsilon)
        let to_target = projectile.target_point - transform.translation;
        if to_target.length() <= travel + config.arrival_epsilon {
            transform.translation = projectile.target_point;
        } else {
            transform.translation += projectile.direction * travel;
        }

        let mut outcome = None;

        if projectile.resolve_on_contact {
            for (target_entity, target_transform, collider, life) in targets.iter() {
                if *life != LifeState::Alive {
                    continue;
                }
                let distance = transform.translation.distance(target_transform.translation);
                if distance <= collider.radius {
                    outcome = Some(FlightOutcome::Struck {
                        target: target_entity,
                    });
                    struck_events.send(TargetStruck {
                        target: target_entity,
                        impact_point: transform.translation,
                    });
                    break;
                }
            }
        }

        if outcome.is_none() {
            let arrived = transform.translation.distance(projectile.target_point)
                <= config.arrival_epsilon;
            if arrived {
                outcome = Some(FlightOutcome::Arrived);
            } else if projectile.time_alive >= projectile.lifetime {
                outcome = Some(FlightOutcome::Expired);
            }
        }

        if let Some(outcome) = outcome {
            commands.entity(entity).insert(FlightComplete { outcome });
        }
    }
}

/// Система: возврат завершённых projectiles в пул
///
/// Release side effects (владеет пул, не entity): Idle state, сброс
/// кинематики, VisualActive off, FIFO хвост free list.
pub fn reclaim_projectiles(
    mut commands: Commands,
    mut pool: ResMut<ProjectilePool>,
    mut completed: Query<
        (
            Entity,
            &mut Projectile,
            &mut ProjectileState,
            &mut VisualActive,
        ),
        (With<PooledProjectile>, With<FlightComplete>),
    >,
) {
    for (entity, mut projectile, mut state, mut visual) in completed.iter_mut() {
        pool.release(entity);

        *state = ProjectileState::Idle;
        visual.0 = false;
        projectile.time_alive = 0.0;
        projectile.resolve_on_contact = false;

        commands.entity(entity).remove::<FlightComplete>();
    }
}
