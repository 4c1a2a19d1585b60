//! Projectile pool — reusable-object cache
//!
//! FIFO free list + in-flight set. Acquire никогда не фейлится: пустой free
//! list → caller манифактурит новую entity и регистрирует её через
//! register_overflow (unbounded growth, выстрел не дропается никогда).
//!
//! Пул владеет presentation toggle'ом (VisualActive) — сама projectile
//! entity о рендере не знает, её state machine engine-agnostic.

use bevy::prelude::*;
use std::collections::{HashSet, VecDeque};

/// Пул projectile entities (Bevy Resource)
///
/// Инварианты:
/// - каждая entity ровно в одном из {free, in_flight}
/// - spawned_total только растёт (entities не уничтожаются, пока жив пул)
#[derive(Resource, Debug, Default)]
pub struct ProjectilePool {
    free: VecDeque<Entity>,
    in_flight: HashSet<Entity>,
    /// Eager размер из конфига (выставляется при init)
    pub capacity: usize,
    /// Сколько entities всего изготовлено (capacity + overflow)
    pub spawned_total: usize,
    /// Eager prewarm уже выполнен (первый тик)
    pub initialized: bool,
}

impl ProjectilePool {
    /// Acquire: голова free list → in-flight. None = пул пуст, caller
    /// обязан изготовить новую entity и вызвать register_overflow.
    pub fn pop_free(&mut self) -> Option<Entity> {
        let entity = self.free.pop_front()?;
        self.in_flight.insert(entity);
        Some(entity)
    }

    /// Регистрация свежеизготовленной entity сразу как in-flight (overflow)
    pub fn register_overflow(&mut self, entity: Entity) {
        self.in_flight.insert(entity);
        self.spawned_total += 1;
    }

    /// Регистрация prewarmed entity в free list (инициализация пула)
    pub fn register_idle(&mut self, entity: Entity) {
        self.free.push_back(entity);
        self.spawned_total += 1;
    }

    /// Release: in-flight → хвост free list (FIFO — oldest-released reused
    /// first, равномерный износ per-instance декораций).
    ///
    /// Идемпотентно: повторный release уже idle entity — no-op.
    pub fn release(&mut self, entity: Entity) -> bool {
        if !self.in_flight.remove(&entity) {
            return false;
        }
        self.free.push_back(entity);
        true
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    pub fn in_flight_len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_in_flight(&self, entity: Entity) -> bool {
        self.in_flight.contains(&entity)
    }

    pub fn is_idle(&self, entity: Entity) -> bool {
        self.free.contains(&entity)
    }
}
