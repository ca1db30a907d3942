//! Fixed-step game orchestration
//!
//! [`TankGame`] owns the arena and advances it one tick per [`TankGame::update`]
//! call. Player input arrives separately through [`TankGame::handle_player_input`].

use super::collision::{
    deal_with_collision_between_enemy_tanks_and_bullets,
    deal_with_collision_between_player_tank_and_bullets, deal_with_collision_for_bullets,
};
use super::events::{EventKind, EventLog};
use super::movement::{Command, MotionController};
use super::rect::Rect;
use super::state::{Bullet, PlayerState, Roster, Tank, TankRole};
use super::wall::{Wall, perimeter_walls};
use crate::consts::*;
use crate::{heading, truncate};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Every enemy destroyed
    Won,
    /// Player destroyed
    Lost,
}

/// A running arena
#[derive(Debug, Clone)]
pub struct TankGame {
    name: String,
    walls: Vec<Wall>,
    roster: Roster,
    phase: GamePhase,
    /// Ticks simulated so far
    time_ticks: u64,
}

impl TankGame {
    /// Create a game; the arena perimeter is added after `walls`
    pub fn new(name: impl Into<String>, player: Tank, enemies: Vec<Tank>, walls: Vec<Wall>) -> Self {
        let mut game = Self {
            name: name.into(),
            walls: Vec::new(),
            roster: Roster::new(player, enemies),
            phase: GamePhase::Playing,
            time_ticks: 0,
        };
        game.build_arena(walls);
        game
    }

    /// Reset this game in place to a new configuration
    pub fn set_up(&mut self, player: Tank, enemies: Vec<Tank>, walls: Vec<Wall>) {
        self.roster = Roster::new(player, enemies);
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.build_arena(walls);
    }

    fn build_arena(&mut self, walls: Vec<Wall>) {
        debug_assert!(self.roster.player.as_ref().is_none_or(|p| p.role() == TankRole::Player));
        debug_assert!(self.roster.enemies.iter().all(|e| e.role() == TankRole::Enemy));

        self.walls.clear();
        for wall in walls {
            self.add_wall(wall);
        }
        for wall in perimeter_walls(ARENA_WIDTH, ARENA_HEIGHT) {
            self.add_wall(wall);
        }

        log::info!(
            "Game '{}' set up: {} enemies, {} walls",
            self.name,
            self.roster.enemies.len(),
            self.walls.len()
        );
    }

    /// Add a wall unless one already sits at the same position
    pub fn add_wall(&mut self, wall: Wall) -> bool {
        if wall.wall_with_identical_property_contained(&self.walls) {
            return false;
        }
        self.walls.push(wall);
        true
    }

    /// Advance one tick: enemies act, bullets move, then collisions resolve
    pub fn update(&mut self, events: &mut EventLog) {
        if self.is_game_over() {
            return;
        }
        self.time_ticks += 1;
        events.set_tick(self.time_ticks);

        let motion = MotionController::new(&self.walls);
        motion.move_all_enemy_tanks(&mut self.roster);
        motion.move_all_bullets(&mut self.roster);

        deal_with_collision_for_bullets(&mut self.roster, events);
        let won = deal_with_collision_between_enemy_tanks_and_bullets(&mut self.roster, events);
        let lost = deal_with_collision_between_player_tank_and_bullets(&mut self.roster, events);

        if won {
            self.phase = GamePhase::Won;
            events.record(EventKind::GameWon);
            log::info!("Game '{}' won after {} ticks", self.name, self.time_ticks);
        } else if lost {
            self.phase = GamePhase::Lost;
            events.record(EventKind::GameLost);
            log::info!("Game '{}' lost after {} ticks", self.name, self.time_ticks);
        }
    }

    /// Move or rotate the player's tank, then fire on `Command::Fire`
    pub fn handle_player_input(&mut self, command: Command, events: &mut EventLog) {
        if self.is_game_over() {
            return;
        }
        let Some(player) = self.roster.player.as_mut() else {
            return;
        };
        events.set_tick(self.time_ticks);

        MotionController::new(&self.walls).move_tank(player, command);
        if command == Command::Fire && fire_bullet(player) {
            events.record(EventKind::BulletFired {
                shooter: TankRole::Player,
            });
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's tank, if still alive
    pub fn player(&self) -> Option<&Tank> {
        self.roster.player.as_ref()
    }

    pub fn player_state(&self) -> &PlayerState {
        &self.roster.player
    }

    pub fn enemies(&self) -> &[Tank] {
        &self.roster.enemies
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Bullets whose tank has been destroyed
    pub fn orphans(&self) -> &[Bullet] {
        &self.roster.orphans
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}

/// Fire a bullet from `tank`'s muzzle along its gun
///
/// Returns false without firing when the tank already has its maximum number
/// of live bullets.
pub fn fire_bullet(tank: &mut Tank) -> bool {
    if !tank.can_fire() {
        return false;
    }

    let dir = heading(tank.gun_angle());
    let size = tank.size();
    let centre = tank.position + size / 2;
    let muzzle = truncate(dir * (size.as_dvec2() * MUZZLE_OFFSET_RATIO));
    let velocity = truncate(dir * BULLET_SPEED);

    tank.add_bullet(Bullet::new(centre + muzzle, velocity));
    true
}
