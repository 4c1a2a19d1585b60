//! Input events от хоста (pointer/touch)

use bevy::prelude::*;

/// Raw aim event: screen point + device timestamp
///
/// Timestamp — секунды по часам устройства ввода; rate limit считается по
/// нему, не по frame time (батч событий внутри одного тика гейтится верно).
#[derive(Event, Debug, Clone, Copy)]
pub struct AimInput {
    /// Пиксели, y вниз
    pub screen_pos: Vec2,
    /// Секунды
    pub timestamp: f64,
}
