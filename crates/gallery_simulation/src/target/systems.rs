//! Target state machine systems
//!
//! Alive → Dying (dispatcher) → settle countdown → PooledIdle | despawn.
//! Respawn из пула запускает внешний spawner через RespawnTarget event.

use crate::logger::log_warning;
use crate::shared::{CollisionLayer, VisualActive, LAYER_TARGETS};
use crate::target::components::{
    Classification, LifeState, RespawnPolicy, ReturnCountdown, SpawnSnapshot, Target,
    TargetCollider, TargetEffects,
};
use bevy::prelude::*;

/// Event от внешнего spawner'а: вернуть pooled мишень в строй
///
/// Spawner отвечает за placement — position опциональна (None = остаётся
/// там, где умерла).
#[derive(Event, Debug, Clone, Copy)]
pub struct RespawnTarget {
    pub target: Entity,
    pub position: Option<Vec3>,
}

/// Bundle полноценной мишени (контракт для spawner'а)
///
/// Snapshot classification/scale снимается здесь, construction-time —
/// restore при возврате в пул идёт из него.
pub fn target_bundle(
    classification: Classification,
    theme: impl Into<String>,
    position: Vec3,
    scale: Vec3,
    policy: RespawnPolicy,
) -> impl Bundle {
    (
        Target {
            classification,
            theme: theme.into(),
        },
        LifeState::Alive,
        policy,
        SpawnSnapshot {
            classification,
            scale,
        },
        TargetCollider::default(),
        TargetEffects::default(),
        CollisionLayer(LAYER_TARGETS),
        Transform::from_translation(position).with_scale(scale),
        VisualActive(true),
    )
}

/// Система: тик settle countdown'ов (frame-delta, без engine callbacks)
///
/// По истечении:
/// - Pooled: PooledIdle, невидима, restore из SpawnSnapshot (мутации
///   прошлой жизни не протекают в следующую)
/// - Despawn: entity удаляется целиком (terminal Destroyed)
pub fn tick_return_countdowns(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut dying: Query<(
        Entity,
        &mut ReturnCountdown,
        &mut LifeState,
        &RespawnPolicy,
        &SpawnSnapshot,
        &mut Target,
        &mut Transform,
        &mut VisualActive,
    )>,
) {
    let delta = time.delta_secs();

    for (entity, mut countdown, mut life, policy, snapshot, mut target, mut transform, mut visual) in
        dying.iter_mut()
    {
        countdown.remaining -= delta;
        if countdown.remaining > 0.0 {
            continue;
        }

        commands.entity(entity).remove::<ReturnCountdown>();

        match policy {
            RespawnPolicy::Pooled => {
                *life = LifeState::PooledIdle;
                visual.0 = false;
                target.classification = snapshot.classification;
                transform.scale = snapshot.scale;
            }
            RespawnPolicy::Despawn => {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Система: respawn pooled мишеней по запросу spawner'а
///
/// Только PooledIdle возвращается в Alive. Stale countdown (если переход
/// случился другим путём) снимается здесь же — recycled entity не может
/// получить отложенный возврат прошлой жизни.
pub fn respawn_pooled_targets(
    mut commands: Commands,
    mut respawn_events: EventReader<RespawnTarget>,
    mut pooled: Query<(&mut LifeState, &mut Transform, &mut VisualActive), With<Target>>,
) {
    for respawn in respawn_events.read() {
        let Ok((mut life, mut transform, mut visual)) = pooled.get_mut(respawn.target) else {
            log_warning(&format!(
                "respawn requested for missing target {:?}",
                respawn.target
            ));
            continue;
        };

        if *life != LifeState::PooledIdle {
            log_warning(&format!(
                "respawn requested for target {:?} in state {:?}, skipping",
                respawn.target, *life
            ));
            continue;
        }

        if let Some(position) = respawn.position {
            transform.translation = position;
        }

        *life = LifeState::Alive;
        visual.0 = true;
        commands.entity(respawn.target).remove::<ReturnCountdown>();
    }
}
