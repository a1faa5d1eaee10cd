//! Player and enemy actors.
//!
//! An `Actor` is a square unit with health, a shot cooldown, a post-hit
//! invulnerability window, and (for enemies) border-avoidance steering and a
//! movement trail. All timers compare against a millisecond clock passed in
//! by the caller; nothing here reads the wall clock.
//!
//! Death is not handled here. Callers watch [`Actor::life`] and remove
//! actors that reach zero.

use std::collections::VecDeque;

use glam::Vec2;
use tracing::debug;

use quadrado_ai::steering::{self, SteeringContext};
use quadrado_core::config::GameConfig;
use quadrado_core::constants::*;
use quadrado_core::enums::ActorKind;
use quadrado_core::events::AudioEvent;
use quadrado_core::state::{ActorView, TrailSegment};
use quadrado_core::types::{ActorId, Rgb};

use crate::balance;
use crate::persistence::UpgradeSource;
use crate::projectile::{ProjectileSink, ProjectileSpawn};

/// Axis-aligned collision box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub min: Vec2,
    pub size: f32,
}

impl Hitbox {
    pub fn max(&self) -> Vec2 {
        self.min + Vec2::splat(self.size)
    }

    pub fn intersects(&self, other: &Hitbox) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

#[derive(Debug, Clone)]
pub struct Actor {
    id: ActorId,
    kind: ActorKind,
    position: Vec2,
    hitbox: Hitbox,
    size: f32,
    speed: f32,
    color: Rgb,
    dark_color: Rgb,
    bright_color: Rgb,

    life: u32,
    max_life: u32,

    invulnerable: bool,
    hit_at_ms: u64,
    invulnerability_ms: u64,

    last_shot_ms: Option<u64>,
    cooldown_ms: u64,

    /// Past positions, most recent first. Enemies only.
    trail: VecDeque<Vec2>,

    angle: f32,
    pulse_phase: u8,
    last_pulse_ms: u64,
    damage_flash: u32,
}

impl Actor {
    /// Create an actor with one life. Cooldown and invulnerability come from
    /// `config`; enemy cooldown is derived from `color`.
    pub fn new(
        id: ActorId,
        kind: ActorKind,
        position: Vec2,
        size: f32,
        color: Rgb,
        speed: f32,
        config: &GameConfig,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            hitbox: Hitbox {
                min: position,
                size,
            },
            size,
            speed,
            color,
            dark_color: color.offset(-50),
            bright_color: color.offset(70),
            life: 1,
            max_life: 1,
            invulnerable: false,
            hit_at_ms: 0,
            invulnerability_ms: config.combat.invulnerability_ms,
            last_shot_ms: None,
            cooldown_ms: balance::shot_cooldown_ms(kind, color, &config.combat),
            trail: VecDeque::with_capacity(MAX_TRAIL_POSITIONS + 1),
            angle: 0.0,
            pulse_phase: 0,
            last_pulse_ms: 0,
            damage_flash: 0,
        }
    }

    /// Create the player in the palette's player color. Max life is the
    /// persisted life upgrade level, never below one.
    pub fn player(
        id: ActorId,
        position: Vec2,
        size: f32,
        speed: f32,
        config: &GameConfig,
        upgrades: &impl UpgradeSource,
    ) -> Self {
        let color = config.palette.player;
        Self::new(id, ActorKind::Player, position, size, color, speed, config)
            .with_max_life(upgrades.life_level().max(1))
    }

    pub fn enemy(
        id: ActorId,
        position: Vec2,
        size: f32,
        color: Rgb,
        speed: f32,
        config: &GameConfig,
    ) -> Self {
        Self::new(id, ActorKind::Enemy, position, size, color, speed, config)
    }

    /// Set both current and max life. Extension point for tougher variants.
    pub fn with_max_life(mut self, max_life: u32) -> Self {
        self.max_life = max_life;
        self.life = max_life;
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn is_player(&self) -> bool {
        self.kind.is_player()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn dark_color(&self) -> Rgb {
        self.dark_color
    }

    pub fn bright_color(&self) -> Rgb {
        self.bright_color
    }

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn health_ratio(&self) -> f32 {
        self.life as f32 / self.max_life.max(1) as f32
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    /// Past positions, most recent first.
    pub fn trail(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.trail.iter().copied()
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Center of the square, used as the projectile origin.
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat((self.size / 2.0).floor())
    }

    // --- Per-tick operations ---

    /// Move one step along `(dx, dy)` scaled by speed.
    ///
    /// Enemies record their trail and are steered away from the arena edges;
    /// the player is only clamped to the arena.
    pub fn move_by(&mut self, dx: f32, dy: f32, config: &GameConfig) {
        if !self.is_player() {
            self.trail.push_front(self.position);
            self.trail.truncate(MAX_TRAIL_POSITIONS);
        }

        let update = steering::evaluate(
            &SteeringContext {
                kind: self.kind,
                position: self.position,
                direction: Vec2::new(dx, dy),
                speed: self.speed,
                size: self.size,
            },
            &config.arena,
            &config.steering,
        );

        self.position = update.position;
        self.hitbox.min = update.position;

        if dx != 0.0 || dy != 0.0 {
            self.angle = (self.angle + ROTATION_STEP_DEG) % 360.0;
        }
    }

    /// Fire if the cooldown has elapsed. Returns whether a projectile was
    /// requested.
    ///
    /// Without a `direction` the player fires right and enemies fire left.
    /// A supplied direction is used as given and is expected to be
    /// normalized already.
    pub fn shoot(
        &mut self,
        now_ms: u64,
        direction: Option<Vec2>,
        config: &GameConfig,
        projectiles: &mut impl ProjectileSink,
        audio: &mut Vec<AudioEvent>,
    ) -> bool {
        if let Some(last) = self.last_shot_ms {
            if now_ms.saturating_sub(last) < self.cooldown_ms {
                return false;
            }
        }
        self.last_shot_ms = Some(now_ms);

        let origin = self.center();
        let (dir, speed) = match (direction, self.kind) {
            (Some(dir), _) => (dir, config.combat.aimed_shot_speed),
            (None, ActorKind::Player) => (Vec2::X, config.combat.player_shot_speed),
            (None, ActorKind::Enemy) => (Vec2::NEG_X, config.combat.aimed_shot_speed),
        };

        projectiles.push_projectile(ProjectileSpawn {
            x: origin.x,
            y: origin.y,
            dir_x: dir.x,
            dir_y: dir.y,
            color: balance::shot_color(self.kind, self.color, &config.palette),
            speed,
        });
        audio.push(AudioEvent::Shot {
            actor: self.id,
            channel: SHOT_AUDIO_CHANNEL,
        });
        true
    }

    /// Apply one point of damage unless invulnerable.
    ///
    /// Returns `false` when the hit was ignored; callers must check this
    /// before running death or score logic.
    pub fn take_damage(&mut self, now_ms: u64) -> bool {
        if self.invulnerable {
            return false;
        }
        self.life = self.life.saturating_sub(1);
        self.invulnerable = true;
        self.hit_at_ms = now_ms;
        self.damage_flash = DAMAGE_FLASH_FRAMES;
        debug!(actor = %self.id, life = self.life, "damage applied");
        true
    }

    /// Expire invulnerability and advance cosmetic counters.
    pub fn update(&mut self, now_ms: u64) {
        if self.invulnerable && now_ms.saturating_sub(self.hit_at_ms) >= self.invulnerability_ms {
            self.invulnerable = false;
        }

        if now_ms.saturating_sub(self.last_pulse_ms) > PULSE_INTERVAL_MS {
            self.last_pulse_ms = now_ms;
            self.pulse_phase = (self.pulse_phase + 1) % PULSE_PHASES;
        }

        self.damage_flash = self.damage_flash.saturating_sub(1);
    }

    // --- Rendering snapshot ---

    /// Read-only view for the renderer at time `now_ms`.
    pub fn view(&self, now_ms: u64) -> ActorView {
        let half = PULSE_PHASES / 2;
        let pulse_offset = if self.pulse_phase < half {
            self.pulse_phase
        } else {
            PULSE_PHASES - self.pulse_phase
        };

        ActorView {
            id: self.id,
            kind: self.kind,
            position: self.position,
            size: self.size,
            color: self.color,
            dark_color: self.dark_color,
            bright_color: self.bright_color,
            display_color: if self.damage_flash > 0 { WHITE } else { self.color },
            life: self.life,
            max_life: self.max_life,
            health_ratio: self.health_ratio(),
            invulnerable: self.invulnerable,
            visible: !(self.invulnerable && now_ms % BLINK_PERIOD_MS < BLINK_PERIOD_MS / 2),
            pulse_offset,
            angle: self.angle,
            trail: self.trail_segments(),
        }
    }

    fn trail_segments(&self) -> Vec<TrailSegment> {
        let len = self.trail.len() as f32;
        let color = self.color.offset(TRAIL_COLOR_OFFSET);
        self.trail
            .iter()
            .enumerate()
            .map(|(i, &pos)| {
                let age = i as f32 / len;
                let size = (self.size * (1.0 - age * 0.7)).floor();
                TrailSegment {
                    position: pos + Vec2::splat((self.size - size) / 2.0),
                    size,
                    alpha: (255.0 * (1.0 - age)) as u8,
                    color,
                }
            })
            .collect()
    }
}
