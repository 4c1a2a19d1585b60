//! Hit dispatcher — classification попадания и score judgment
//!
//! Вход: TargetStruck (от input resolver'а в Direct mode, от projectile
//! contact в Simulated mode). Выход: ScoreChanged для economy/score
//! collaborators + fire-and-forget presentation requests.
//!
//! Ничто здесь не fatal: невалидная мишень логируется и пропускается,
//! duplicate hit молча игнорируется, отсутствующий asset — skip эффекта.

use crate::config::GalleryConfig;
use crate::logger::{log, log_warning};
use crate::target::{
    Classification, LifeState, ObjectKind, ReturnCountdown, Target, TargetEffects,
};
use bevy::prelude::*;

/// Event: луч/projectile попал в collider
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetStruck {
    pub target: Entity,
    pub impact_point: Vec3,
}

/// Event: resolved hit → economy/score collaborators
///
/// UI/экономика обновляют totals асинхронно к попаданию — synchronous
/// контракт core'а заканчивается на этом event'е.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScoreChanged {
    pub target: Entity,
    pub object_kind: ObjectKind,
    pub classification: Classification,
    pub score_delta: i32,
    pub money_delta: i32,
    pub impact_point: Vec3,
}

/// Presentation request: particle burst в точке попадания
#[derive(Event, Debug, Clone)]
pub struct ParticleBurstRequest {
    pub asset: String,
    pub position: Vec3,
}

/// Presentation request: spatial sound
#[derive(Event, Debug, Clone)]
pub struct PlaySoundRequest {
    pub asset: String,
    pub position: Vec3,
}

/// Presentation request: haptic pulse
#[derive(Event, Debug, Clone, Copy)]
pub struct HapticPulseRequest;

/// Система: resolve попаданий
///
/// Per event:
/// 1. Typed capability lookup: entity без Target — не мишень, log + no-op
///    (выстрел уже израсходован, rate limit уже продвинут resolver'ом)
/// 2. Guard: не Alive → молча игнорируем (duplicate hit в одном шаге)
/// 3. ObjectKind + score/money delta из таблиц конфига
/// 4. Alive → Dying: hit surface выключен, classification заморожена,
///    settle countdown взведён
/// 5. ScoreChanged + независимые presentation requests
pub fn resolve_target_hits(
    mut commands: Commands,
    mut struck_events: EventReader<TargetStruck>,
    mut targets: Query<(&Target, &mut LifeState, Option<&TargetEffects>)>,
    config: Res<GalleryConfig>,
    mut score_events: EventWriter<ScoreChanged>,
    mut particle_events: EventWriter<ParticleBurstRequest>,
    mut sound_events: EventWriter<PlaySoundRequest>,
    mut haptic_events: EventWriter<HapticPulseRequest>,
) {
    for struck in struck_events.read() {
        let Ok((target, mut life, effects)) = targets.get_mut(struck.target) else {
            log_warning(&format!(
                "struck collider {:?} is not a valid target, ignoring",
                struck.target
            ));
            continue;
        };

        // Duplicate hit: Dying/PooledIdle мишень не скорится второй раз
        if *life != LifeState::Alive {
            continue;
        }

        let classification = target.classification;
        let object_kind = classification.object_kind();
        let score_delta = config.score_for(classification);
        let money_delta = config.money_for(classification);

        *life = LifeState::Dying;
        commands
            .entity(struck.target)
            .insert(ReturnCountdown::new(config.settle_delay));

        score_events.send(ScoreChanged {
            target: struck.target,
            object_kind,
            classification,
            score_delta,
            money_delta,
            impact_point: struck.impact_point,
        });

        // Каждый эффект null-check'ается отдельно; skip — не ошибка
        let effects = effects.cloned().unwrap_or_default();

        if let Some(asset) = effects.particle {
            particle_events.send(ParticleBurstRequest {
                asset,
                position: struck.impact_point,
            });
        } else {
            log("no particle asset for target, skipping burst");
        }

        if let Some(asset) = effects.sound {
            sound_events.send(PlaySoundRequest {
                asset,
                position: struck.impact_point,
            });
        } else {
            log("no sound asset for target, skipping playback");
        }

        if effects.haptic {
            haptic_events.send(HapticPulseRequest);
        }
    }
}
