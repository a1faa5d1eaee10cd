//! Headless session driver.
//!
//! Wraps a `SimulationEngine` with the pieces a renderer-less run needs: a
//! scripted pilot for the player, wandering enemies that aim at the player,
//! and a minimal projectile flight model so shots can actually land. The
//! engine itself only requests projectiles; flying them is left to the host.

use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use quadrado_core::commands::SimCommand;
use quadrado_core::enums::{ActorKind, GamePhase};
use quadrado_core::events::{AudioEvent, GameEvent};
use quadrado_core::state::GameStateSnapshot;
use quadrado_core::types::{ActorId, Rgb};
use quadrado_sim::actor::Hitbox;
use quadrado_sim::engine::{SimConfig, SimulationEngine};
use quadrado_sim::persistence::UpgradeSource;

/// Edge length of a projectile's collision box.
const SHOT_SIZE: f32 = 6.0;

/// Ticks the pilot holds one vertical direction before reversing.
const PILOT_SWEEP_TICKS: u64 = 90;

/// Chance per tick that an enemy picks a new heading.
const WANDER_TURN_CHANCE: f64 = 0.02;

const ENEMY_SIZE: f32 = 30.0;
const ENEMY_SPEED: f32 = 2.0;

const WAVE_COLORS: [Rgb; 4] = [
    Rgb::new(255, 0, 0),
    Rgb::new(180, 40, 200),
    Rgb::new(255, 140, 0),
    Rgb::new(90, 200, 120),
];

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Enemies spawned at the start of the session.
    pub enemies: usize,
    /// Sleep between ticks to hold the configured tick rate.
    pub realtime: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            enemies: 5,
            realtime: false,
        }
    }
}

/// A projectile in flight, tagged with which side fired it.
#[derive(Debug, Clone, Copy)]
struct Shot {
    position: Vec2,
    velocity: Vec2,
    from_player: bool,
}

impl Shot {
    fn hitbox(&self) -> Hitbox {
        Hitbox {
            min: self.position - Vec2::splat(SHOT_SIZE / 2.0),
            size: SHOT_SIZE,
        }
    }
}

/// Outcome of [`Session::run`].
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub ticks: u64,
    pub phase: GamePhase,
    pub enemies_destroyed: usize,
    pub shots: usize,
    pub player_life: u32,
    pub last_snapshot: GameStateSnapshot,
}

pub struct Session {
    engine: SimulationEngine,
    script: ChaCha8Rng,
    options: LoopOptions,
    headings: HashMap<ActorId, Vec2>,
    shots: Vec<Shot>,
    ticks: u64,
    shots_fired: usize,
    enemies_destroyed: usize,
}

impl Session {
    /// Build the engine and queue the opening wave.
    pub fn new(config: SimConfig, upgrades: &impl UpgradeSource, options: LoopOptions) -> Self {
        // Offset so the script does not mirror the engine's own RNG stream.
        let script = ChaCha8Rng::seed_from_u64(config.seed ^ 0x5155_4144);
        let mut session = Self {
            engine: SimulationEngine::new(config, upgrades),
            script,
            options,
            headings: HashMap::new(),
            shots: Vec::new(),
            ticks: 0,
            shots_fired: 0,
            enemies_destroyed: 0,
        };
        session.queue_wave();
        session
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }

    /// Run up to `ticks` ticks. Stops early once the game is over and the
    /// final explosion has faded.
    pub fn run(&mut self, ticks: u64) -> SessionSummary {
        let rate = self.engine.config().tick_rate.0.max(1);
        let tick_duration = Duration::from_nanos(1_000_000_000 / rate as u64);
        let mut next_tick_time = Instant::now();
        let mut last_snapshot = None;

        for _ in 0..ticks {
            let snapshot = self.step();
            let finished =
                snapshot.phase == GamePhase::GameOver && self.engine.effects().is_empty();
            last_snapshot = Some(snapshot);
            if finished {
                info!(tick = self.ticks, "session ended early");
                break;
            }

            if self.options.realtime {
                next_tick_time += tick_duration;
                let now = Instant::now();
                if next_tick_time > now {
                    thread::sleep(next_tick_time - now);
                } else if now - next_tick_time > tick_duration * 2 {
                    next_tick_time = now;
                }
            }
        }

        SessionSummary {
            ticks: self.ticks,
            phase: self.engine.phase(),
            enemies_destroyed: self.enemies_destroyed,
            shots: self.shots_fired,
            player_life: self.engine.player().life(),
            last_snapshot: last_snapshot.unwrap_or_else(|| self.engine.tick()),
        }
    }

    /// Queue this tick's commands, advance the engine, and pick up the
    /// projectiles it requested.
    pub fn step(&mut self) -> GameStateSnapshot {
        self.queue_pilot();
        self.queue_enemies();
        self.queue_collisions();

        let snapshot = self.engine.tick();
        self.ticks += 1;
        self.record(&snapshot);
        snapshot
    }

    fn queue_wave(&mut self) {
        let arena = self.engine.config().arena;
        let commands: Vec<SimCommand> = (0..self.options.enemies)
            .map(|i| SimCommand::SpawnEnemy {
                x: sample_span(
                    &mut self.script,
                    arena.width * 0.6,
                    arena.width - ENEMY_SIZE * 2.0,
                ),
                y: sample_span(
                    &mut self.script,
                    ENEMY_SIZE,
                    arena.height - ENEMY_SIZE * 2.0,
                ),
                size: ENEMY_SIZE,
                color: WAVE_COLORS[i % WAVE_COLORS.len()],
                speed: ENEMY_SPEED,
            })
            .collect();
        self.engine.queue_commands(commands);
    }

    fn queue_pilot(&mut self) {
        let player = self.engine.player_id();
        let dy = if (self.ticks / PILOT_SWEEP_TICKS) % 2 == 0 {
            1.0
        } else {
            -1.0
        };
        self.engine.queue_commands([
            SimCommand::Move {
                actor: player,
                dx: 0.0,
                dy,
            },
            SimCommand::Shoot {
                actor: player,
                direction: None,
            },
        ]);
    }

    fn queue_enemies(&mut self) {
        let target = self.engine.player().center();
        let mut commands = Vec::with_capacity(self.engine.enemies().len() * 2);

        for enemy in self.engine.enemies() {
            let heading = self.headings.entry(enemy.id()).or_insert(Vec2::NEG_X);
            if self.script.gen_bool(WANDER_TURN_CHANCE) {
                *heading = Vec2::new(
                    self.script.gen_range(-1.0..=0.5),
                    self.script.gen_range(-1.0..=1.0),
                );
            }

            let aim = (target - enemy.center()).normalize_or_zero();
            commands.push(SimCommand::Move {
                actor: enemy.id(),
                dx: heading.x,
                dy: heading.y,
            });
            commands.push(SimCommand::Shoot {
                actor: enemy.id(),
                direction: (aim != Vec2::ZERO).then(|| aim.to_array()),
            });
        }
        self.engine.queue_commands(commands);
    }

    /// Fly shots one step and queue hits for anything they touch, plus
    /// contact hits between the player and enemies.
    fn queue_collisions(&mut self) {
        let arena = self.engine.config().arena;
        let player = self.engine.player();
        let player_box = player.hitbox();
        let mut hits = Vec::new();

        self.shots.retain_mut(|shot| {
            shot.position += shot.velocity;
            let shot_box = shot.hitbox();

            let target = if shot.from_player {
                self.engine
                    .enemies()
                    .iter()
                    .find(|e| e.hitbox().intersects(&shot_box))
                    .map(|e| e.id())
            } else {
                player_box.intersects(&shot_box).then(|| player.id())
            };
            if let Some(actor) = target {
                hits.push(actor);
                return false;
            }

            (0.0..=arena.width).contains(&shot.position.x)
                && (0.0..=arena.height).contains(&shot.position.y)
        });

        for enemy in self.engine.enemies() {
            if enemy.hitbox().intersects(&player_box) {
                hits.push(player.id());
                hits.push(enemy.id());
            }
        }

        for &actor in &hits {
            debug!(actor = %actor, tick = self.ticks, "hit queued");
        }
        self.engine
            .queue_commands(hits.into_iter().map(|actor| SimCommand::Hit { actor }));
    }

    fn record(&mut self, snapshot: &GameStateSnapshot) {
        let player = self.engine.player_id();

        // Every accepted shot emits exactly one projectile and one audio
        // event, in the same order.
        for (spawn, audio) in snapshot.projectiles.iter().zip(&snapshot.audio_events) {
            let AudioEvent::Shot { actor, .. } = audio;
            self.shots.push(Shot {
                position: Vec2::new(spawn.x, spawn.y),
                velocity: Vec2::new(spawn.dir_x, spawn.dir_y) * spawn.speed,
                from_player: *actor == player,
            });
        }
        self.shots_fired += snapshot.projectiles.len();

        for event in &snapshot.events {
            if let GameEvent::ActorDestroyed {
                actor,
                kind: ActorKind::Enemy,
                ..
            } = event
            {
                self.headings.remove(actor);
                self.enemies_destroyed += 1;
            }
        }
    }
}

/// Uniform sample from `lo..hi`. Arenas too small for the span collapse it
/// to its lower end, kept at or above zero.
fn sample_span(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo.min(hi).max(0.0)
    }
}
