//! Simulation engine for one arena, one player, and any number of enemies.
//!
//! `SimulationEngine` owns the actors and effects, applies queued commands,
//! removes destroyed enemies, and produces `GameStateSnapshot`s. Completely
//! headless, with a seeded RNG so runs are reproducible.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use quadrado_core::commands::SimCommand;
use quadrado_core::config::GameConfig;
use quadrado_core::constants::HIT_PARTICLES;
use quadrado_core::enums::GamePhase;
use quadrado_core::events::{AudioEvent, GameEvent, ProjectileSpawn};
use quadrado_core::state::GameStateSnapshot;
use quadrado_core::types::{ActorId, ActorIdAllocator, Rgb, SimTime};

use crate::actor::Actor;
use crate::effects::Effects;
use crate::persistence::UpgradeSource;

/// Where and how the player starts.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSpawn {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            position: Vec2::new(100.0, 285.0),
            size: 30.0,
            speed: 5.0,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
    pub player: PlayerSpawn,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
            player: PlayerSpawn::default(),
        }
    }
}

pub struct SimulationEngine {
    config: GameConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    ids: ActorIdAllocator,
    player: Actor,
    enemies: Vec<Actor>,
    command_queue: VecDeque<SimCommand>,
    effects: Effects,
    projectiles: Vec<ProjectileSpawn>,
    audio_events: Vec<AudioEvent>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine. The player's max life is read from `upgrades` once.
    pub fn new(config: SimConfig, upgrades: &impl UpgradeSource) -> Self {
        let mut ids = ActorIdAllocator::new();
        let spawn = config.player;
        let player = Actor::player(
            ids.allocate(),
            spawn.position,
            spawn.size,
            spawn.speed,
            &config.game,
            upgrades,
        );
        info!(
            seed = config.seed,
            max_life = player.max_life(),
            "simulation engine created"
        );

        Self {
            config: config.game,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ids,
            player,
            enemies: Vec::new(),
            command_queue: VecDeque::new(),
            effects: Effects::new(),
            projectiles: Vec::new(),
            audio_events: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Add an enemy immediately and return its id.
    pub fn spawn_enemy(&mut self, position: Vec2, size: f32, color: Rgb, speed: f32) -> ActorId {
        let id = self.ids.allocate();
        self.enemies
            .push(Actor::enemy(id, position, size, color, speed, &self.config));
        debug!(actor = %id, x = position.x, y = position.y, "enemy spawned");
        id
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Active;
        }

        let now = self.time.now_ms();

        if self.phase == GamePhase::Active {
            self.player.update(now);
            for enemy in &mut self.enemies {
                enemy.update(now);
            }
            self.process_commands(now);
            self.reap_destroyed();
        } else {
            self.command_queue.clear();
        }

        self.effects.update();
        self.time.advance(self.config.tick_rate.0);
        self.build_snapshot(now)
    }

    fn process_commands(&mut self, now: u64) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                SimCommand::SpawnEnemy {
                    x,
                    y,
                    size,
                    color,
                    speed,
                } => {
                    self.spawn_enemy(Vec2::new(x, y), size, color, speed);
                }
                SimCommand::Move { actor, dx, dy } => {
                    let config = &self.config;
                    match find_actor(&mut self.player, &mut self.enemies, actor) {
                        Some(a) => a.move_by(dx, dy, config),
                        None => debug!(actor = %actor, "move for unknown actor ignored"),
                    }
                }
                SimCommand::Shoot { actor, direction } => {
                    let config = &self.config;
                    match find_actor(&mut self.player, &mut self.enemies, actor) {
                        Some(a) => {
                            a.shoot(
                                now,
                                direction.map(Vec2::from),
                                config,
                                &mut self.projectiles,
                                &mut self.audio_events,
                            );
                        }
                        None => debug!(actor = %actor, "shot for unknown actor ignored"),
                    }
                }
                SimCommand::Hit { actor } => self.apply_hit(actor, now),
            }
        }
    }

    fn apply_hit(&mut self, id: ActorId, now: u64) {
        let tick = self.time.tick;
        let Some(actor) = find_actor(&mut self.player, &mut self.enemies, id) else {
            debug!(actor = %id, "hit for unknown actor ignored");
            return;
        };
        if !actor.take_damage(now) {
            return;
        }
        self.events.push(GameEvent::ActorDamaged {
            actor: id,
            life: actor.life(),
            tick,
        });
        if actor.is_alive() {
            let center = actor.center();
            let color = actor.color();
            self.effects
                .burst(&mut self.rng, center.x, center.y, color, HIT_PARTICLES);
        }
    }

    /// Explode and remove enemies at zero life; end the game if the player
    /// is out of lives.
    fn reap_destroyed(&mut self) {
        let tick = self.time.tick;
        let (dead, alive): (Vec<Actor>, Vec<Actor>) = std::mem::take(&mut self.enemies)
            .into_iter()
            .partition(|e| !e.is_alive());
        self.enemies = alive;

        for enemy in dead {
            let center = enemy.center();
            self.effects
                .explode(&mut self.rng, center.x, center.y, enemy.color());
            self.events.push(GameEvent::ActorDestroyed {
                actor: enemy.id(),
                kind: enemy.kind(),
                tick,
            });
            debug!(actor = %enemy.id(), "enemy destroyed");
        }

        if !self.player.is_alive() {
            let center = self.player.center();
            self.effects
                .explode(&mut self.rng, center.x, center.y, self.player.color());
            self.events.push(GameEvent::ActorDestroyed {
                actor: self.player.id(),
                kind: self.player.kind(),
                tick,
            });
            self.phase = GamePhase::GameOver;
            info!(tick, "player destroyed, game over");
        }
    }

    fn build_snapshot(&mut self, now: u64) -> GameStateSnapshot {
        GameStateSnapshot {
            time: self.time,
            phase: self.phase,
            player: (self.phase != GamePhase::GameOver).then(|| self.player.view(now)),
            enemies: self.enemies.iter().map(|e| e.view(now)).collect(),
            particles: self.effects.particle_views(),
            flashes: self.effects.flash_views(),
            projectiles: std::mem::take(&mut self.projectiles),
            audio_events: std::mem::take(&mut self.audio_events),
            events: std::mem::take(&mut self.events),
        }
    }

    // --- Accessors ---

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    pub fn player_id(&self) -> ActorId {
        self.player.id()
    }

    pub fn enemies(&self) -> &[Actor] {
        &self.enemies
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        if self.player.id() == id {
            return Some(&self.player);
        }
        self.enemies.iter().find(|e| e.id() == id)
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }
}

fn find_actor<'a>(
    player: &'a mut Actor,
    enemies: &'a mut [Actor],
    id: ActorId,
) -> Option<&'a mut Actor> {
    if player.id() == id {
        return Some(player);
    }
    enemies.iter_mut().find(|e| e.id() == id)
}
