//! Per-tick motion of tanks and bullets
//!
//! Tanks stop at walls (push-back); bullets bounce off them. Bullets that
//! have used up their bounces are culled right after moving.

use glam::IVec2;

use super::collision::CollisionResolver;
use super::state::{Bullet, Roster, Tank};
use super::wall::Wall;
use crate::consts::TANK_SPEED;

/// One player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Clockwise,
    AntiClockwise,
    Fire,
}

impl Command {
    /// Map the classic console letters to commands
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "w" => Some(Command::Up),
            "s" => Some(Command::Down),
            "d" => Some(Command::Right),
            "a" => Some(Command::Left),
            "e" => Some(Command::Clockwise),
            "q" => Some(Command::AntiClockwise),
            "b" => Some(Command::Fire),
            _ => None,
        }
    }

    /// Tank displacement for one tick of this command
    pub fn velocity(self) -> IVec2 {
        match self {
            Command::Up => IVec2::new(0, -TANK_SPEED),
            Command::Down => IVec2::new(0, TANK_SPEED),
            Command::Left => IVec2::new(-TANK_SPEED, 0),
            Command::Right => IVec2::new(TANK_SPEED, 0),
            Command::Clockwise | Command::AntiClockwise | Command::Fire => IVec2::ZERO,
        }
    }
}

/// Moves everything in the arena by one tick
#[derive(Debug, Clone, Copy)]
pub struct MotionController<'a> {
    resolver: CollisionResolver<'a>,
}

impl<'a> MotionController<'a> {
    pub fn new(walls: &'a [Wall]) -> Self {
        Self {
            resolver: CollisionResolver::new(walls),
        }
    }

    pub fn resolver(&self) -> &CollisionResolver<'a> {
        &self.resolver
    }

    /// Move the player's, each enemy's, then the ownerless bullets
    ///
    /// Returns how many bullets were culled for running out of bounces.
    pub fn move_all_bullets(&self, roster: &mut Roster) -> usize {
        let mut culled = 0;
        if let Some(player) = roster.player.as_mut() {
            culled += self.move_bullets(player.bullets_mut());
        }
        for enemy in roster.enemies.iter_mut() {
            culled += self.move_bullets(enemy.bullets_mut());
        }
        culled += self.move_bullets(&mut roster.orphans);

        if culled > 0 {
            log::trace!("{} spent bullet(s) culled", culled);
        }
        culled
    }

    fn move_bullets(&self, bullets: &mut Vec<Bullet>) -> usize {
        for bullet in bullets.iter_mut() {
            if self.resolver.is_colliding_with_a_wall(bullet.velocity, &*bullet) {
                self.resolver.bounce_off_wall(bullet);
            } else {
                bullet.advance();
            }
        }

        let before = bullets.len();
        bullets.retain(|b| !b.is_spent());
        before - bullets.len()
    }

    /// Apply one command to a tank: rotate the gun, then step with push-back
    ///
    /// `Fire` neither moves nor fires here; spawning bullets is up to the game.
    pub fn move_tank(&self, tank: &mut Tank, command: Command) {
        match command {
            Command::Clockwise => tank.rotate_gun_clockwise(),
            Command::AntiClockwise => tank.rotate_gun_anticlockwise(),
            _ => {}
        }

        let vel = command.velocity();
        tank.position = self.resolver.pushed_back_position_or_advance(vel, &*tank);
    }

    pub fn move_player_tank(&self, roster: &mut Roster, command: Command) {
        if let Some(player) = roster.player.as_mut() {
            self.move_tank(player, command);
        }
    }

    /// Placeholder enemy behaviour: hold position and sweep the gun anticlockwise
    pub fn move_all_enemy_tanks(&self, roster: &mut Roster) {
        for enemy in roster.enemies.iter_mut() {
            self.move_tank(enemy, Command::Fire);
            self.move_tank(enemy, Command::AntiClockwise);
        }
    }
}
