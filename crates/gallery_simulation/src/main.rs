//! Headless demo тира
//!
//! Поднимает simulation core без рендера, расставляет мишени seeded RNG'ом
//! и скриптует серию выстрелов по ним. Печатает score по ходу.

use bevy::prelude::*;
use gallery_simulation::{
    create_headless_app, step_fixed, target_bundle, AimCamera, AimInput, Classification,
    DeterministicRng, GalleryConfig, RespawnPolicy, ScoreBoard, SimulationPlugin,
};
use rand::Rng;

fn main() {
    let seed = 42;
    println!("Starting Tin Alley headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);
    app.insert_resource(GalleryConfig {
        dead_zone_fraction: 0.0, // скриптованные выстрелы целятся и в центр
        ..Default::default()
    });

    spawn_target_row(&mut app);

    let camera = app.world().resource::<AimCamera>().clone();
    let screen = camera.screen_size;

    // 600 тиков = 10 секунд; выстрел каждые 0.25s по случайной точке экрана
    for tick in 0..600 {
        if tick % 15 == 0 {
            let screen_pos = {
                let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
                Vec2::new(
                    rng.rng.gen_range(0.2..0.8) * screen.x,
                    rng.rng.gen_range(0.3..0.7) * screen.y,
                )
            };
            app.world_mut().send_event(AimInput {
                screen_pos,
                timestamp: tick as f64 / 60.0,
            });
        }

        step_fixed(&mut app);

        if tick % 100 == 0 {
            let board = *app.world().resource::<ScoreBoard>();
            println!(
                "Tick {}: score {} money {} hits {}",
                tick, board.score, board.money, board.hits
            );
        }
    }

    let board = *app.world().resource::<ScoreBoard>();
    println!(
        "Simulation complete! score {} money {} hits {} (innocents: {})",
        board.score, board.money, board.hits, board.innocents_hit
    );
}

/// Ряд мишеней перед камерой (x от -6 до 6, глубина 10-14)
fn spawn_target_row(app: &mut App) {
    let placements: Vec<(Classification, Vec3)> = {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        (0..7)
            .map(|slot| {
                let classification =
                    Classification::ALL[rng.rng.gen_range(0..Classification::ALL.len())];
                let position = Vec3::new(
                    -6.0 + slot as f32 * 2.0,
                    1.6,
                    -(10.0 + rng.rng.gen_range(0.0..4.0)),
                );
                (classification, position)
            })
            .collect()
    };

    for (classification, position) in placements {
        app.world_mut().spawn(target_bundle(
            classification,
            "tin_can",
            position,
            Vec3::ONE,
            RespawnPolicy::Pooled,
        ));
    }
}
