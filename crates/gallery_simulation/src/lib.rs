//! Tin Alley Simulation Core
//!
//! Headless ECS-симуляция аркадного тира на Bevy 0.16: projectile lifecycle
//! и hit-resolution pipeline. Рендер, UI, звук, haptics — внешние
//! collaborators, core общается с ними events'ами (fire-and-forget) и
//! флагом VisualActive.
//!
//! Поток кадра (FixedUpdate, chained):
//! input → projectile advancement → hit dispatch → scoring → target
//! countdowns → respawn → pool reclaim. Projectile, завершившийся в этом
//! кадре, покидает active set до input'а следующего кадра.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod config;
pub mod input;
pub mod logger;
pub mod projectile;
pub mod scoring;
pub mod shared;
pub mod target;

// Re-export основных типов для удобства хоста
pub use config::{FireMode, GalleryConfig};
pub use input::{resolve_aim_input, AimInput, FireControl};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_logger, LogLevel, LogPrinter};
pub use projectile::{
    advance_projectiles, init_projectile_pool, reclaim_projectiles, FlightOutcome, PooledProjectile,
    Projectile, ProjectilePool, ProjectileState,
};
pub use scoring::{
    apply_score_changes, resolve_target_hits, HapticPulseRequest, ParticleBurstRequest,
    PlaySoundRequest, ScoreBoard, ScoreChanged, TargetStruck,
};
pub use shared::{AimCamera, CollisionLayer, VisualActive, LAYER_SCENERY, LAYER_TARGETS};
pub use target::{
    respawn_pooled_targets, target_bundle, tick_return_countdowns, Classification, LifeState,
    ObjectKind, RespawnPolicy, RespawnTarget, ReturnCountdown, SpawnSnapshot, Target,
    TargetCollider, TargetEffects,
};

/// Главный plugin симуляции (весь shot pipeline)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Конфиг и состояние pipeline (хост может заменить до первого тика)
            .init_resource::<GalleryConfig>()
            .init_resource::<AimCamera>()
            .init_resource::<ProjectilePool>()
            .init_resource::<FireControl>()
            .init_resource::<ScoreBoard>()
            // События pipeline
            .add_event::<AimInput>()
            .add_event::<TargetStruck>()
            .add_event::<ScoreChanged>()
            .add_event::<ParticleBurstRequest>()
            .add_event::<PlaySoundRequest>()
            .add_event::<HapticPulseRequest>()
            .add_event::<RespawnTarget>();

        // Порядок внутри кадра фиксирован: advancement строго раньше pool
        // cleanup, scoring раньше target countdowns
        app.add_systems(
            FixedUpdate,
            (
                // Фаза 0: eager prewarm пула (первый тик)
                init_projectile_pool,
                // Фаза 1: input → aim decision (+ TargetStruck в Direct mode)
                resolve_aim_input,
                // Фаза 2: полёт projectiles (+ TargetStruck в Simulated mode)
                advance_projectiles,
                // Фаза 3: hit dispatch + economy
                resolve_target_hits,
                apply_score_changes,
                // Фаза 4: target state machine
                tick_return_countdowns,
                respawn_pooled_targets,
                // Фаза 5: pool cleanup (строго после advancement)
                reclaim_projectiles,
            )
                .chain(), // Последовательное выполнение
        );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0));

    app
}

/// Один детерминированный simulation tick (FixedUpdate, ровно timestep)
///
/// Для тестов и headless demo: не зависит от wall clock, в отличие от
/// app.update() с реальным временем.
pub fn step_fixed(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(timestep);
    app.world_mut().run_schedule(FixedUpdate);
}
