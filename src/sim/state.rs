//! Arena entities and the collections that own them
//!
//! Bullets belong to the tank that fired them. When a tank is destroyed its
//! surviving bullets move into the ownerless pool held by [`Roster`].

use std::fmt;

use glam::IVec2;

use super::rect::Rect;
use crate::consts::*;

/// Render tag for every entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityColor {
    Wall,
    Bullet,
    Player,
    Enemy,
}

impl EntityColor {
    /// sRGB triple for renderers
    pub fn rgb(self) -> [u8; 3] {
        match self {
            EntityColor::Wall => [192, 192, 192],
            EntityColor::Bullet => [0, 0, 0],
            EntityColor::Player => [0, 0, 255],
            EntityColor::Enemy => [255, 200, 0],
        }
    }
}

/// A projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub position: IVec2,
    pub velocity: IVec2,
    /// Wall bounces so far
    pub bounce_count: u32,
}

impl Bullet {
    pub fn new(position: IVec2, velocity: IVec2) -> Self {
        Self::with_bounce_count(position, velocity, 0)
    }

    pub fn with_bounce_count(position: IVec2, velocity: IVec2, bounce_count: u32) -> Self {
        Self {
            position,
            velocity,
            bounce_count,
        }
    }

    /// Move by one tick of velocity, ignoring walls
    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: IVec2) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn increase_bounce_count(&mut self) {
        self.bounce_count += 1;
    }

    /// Bounced often enough to be removed
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.bounce_count >= MAX_BOUNCE_COUNT
    }

    pub fn color(&self) -> EntityColor {
        EntityColor::Bullet
    }

    /// Same position, velocity and bounce count
    pub fn has_identical_properties(&self, other: &Bullet) -> bool {
        self == other
    }
}

impl Rect for Bullet {
    #[inline]
    fn position(&self) -> IVec2 {
        self.position
    }

    #[inline]
    fn size(&self) -> IVec2 {
        IVec2::new(BULLET_WIDTH, BULLET_HEIGHT)
    }
}

/// Which side a tank fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TankRole {
    Player,
    Enemy,
}

impl fmt::Display for TankRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TankRole::Player => write!(f, "Player tank"),
            TankRole::Enemy => write!(f, "Enemy tank"),
        }
    }
}

/// A tank with a rotating gun and the bullets it has fired
#[derive(Debug, Clone, PartialEq)]
pub struct Tank {
    role: TankRole,
    pub position: IVec2,
    /// Degrees in 0..360, clockwise from +x since y grows downward
    gun_angle: i32,
    /// Live bullets in firing order
    bullets: Vec<Bullet>,
}

impl Tank {
    pub fn new(role: TankRole, position: IVec2, gun_angle: i32) -> Self {
        debug_assert!(
            (0..360).contains(&gun_angle),
            "gun angle {} outside 0..360",
            gun_angle
        );
        Self {
            role,
            position,
            gun_angle,
            bullets: Vec::new(),
        }
    }

    pub fn player(position: IVec2, gun_angle: i32) -> Self {
        Self::new(TankRole::Player, position, gun_angle)
    }

    pub fn enemy(position: IVec2, gun_angle: i32) -> Self {
        Self::new(TankRole::Enemy, position, gun_angle)
    }

    #[inline]
    pub fn role(&self) -> TankRole {
        self.role
    }

    #[inline]
    pub fn gun_angle(&self) -> i32 {
        self.gun_angle
    }

    pub fn set_gun_angle(&mut self, gun_angle: i32) {
        debug_assert!(
            (0..360).contains(&gun_angle),
            "gun angle {} outside 0..360",
            gun_angle
        );
        self.gun_angle = gun_angle;
    }

    pub fn rotate_gun_clockwise(&mut self) {
        self.gun_angle = (self.gun_angle + ROTATE_SPEED).rem_euclid(360);
    }

    pub fn rotate_gun_anticlockwise(&mut self) {
        self.gun_angle = (self.gun_angle - ROTATE_SPEED).rem_euclid(360);
    }

    #[inline]
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    #[inline]
    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    /// Append without checking the live bullet cap (used when loading)
    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    /// Hand every live bullet over, leaving the tank with none
    pub fn take_bullets(&mut self) -> Vec<Bullet> {
        std::mem::take(&mut self.bullets)
    }

    /// Still below the live bullet cap
    #[inline]
    pub fn can_fire(&self) -> bool {
        self.bullets.len() < MAX_BULLET_PER_TANK
    }

    pub fn color(&self) -> EntityColor {
        match self.role {
            TankRole::Player => EntityColor::Player,
            TankRole::Enemy => EntityColor::Enemy,
        }
    }

    /// Same position, gun angle and bullet list (in order)
    pub fn has_identical_properties(&self, other: &Tank) -> bool {
        self.position == other.position
            && self.gun_angle == other.gun_angle
            && self.bullets.len() == other.bullets.len()
            && self
                .bullets
                .iter()
                .zip(&other.bullets)
                .all(|(a, b)| a.has_identical_properties(b))
    }
}

impl Rect for Tank {
    #[inline]
    fn position(&self) -> IVec2 {
        self.position
    }

    #[inline]
    fn size(&self) -> IVec2 {
        IVec2::new(TANK_WIDTH, TANK_HEIGHT)
    }
}

/// The player's tank, or nothing once it has been destroyed
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerState {
    Alive(Tank),
    Eliminated,
}

impl PlayerState {
    pub fn as_ref(&self) -> Option<&Tank> {
        match self {
            PlayerState::Alive(tank) => Some(tank),
            PlayerState::Eliminated => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut Tank> {
        match self {
            PlayerState::Alive(tank) => Some(tank),
            PlayerState::Eliminated => None,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        matches!(self, PlayerState::Alive(_))
    }

    /// Mark the player destroyed, returning the tank if it was still alive
    pub fn eliminate(&mut self) -> Option<Tank> {
        match std::mem::replace(self, PlayerState::Eliminated) {
            PlayerState::Alive(tank) => Some(tank),
            PlayerState::Eliminated => None,
        }
    }
}

/// Every mutable collection touched by collision resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub player: PlayerState,
    pub enemies: Vec<Tank>,
    /// Bullets whose tank has been destroyed
    pub orphans: Vec<Bullet>,
}

impl Roster {
    pub fn new(player: Tank, enemies: Vec<Tank>) -> Self {
        Self {
            player: PlayerState::Alive(player),
            enemies,
            orphans: Vec::new(),
        }
    }

    /// Live bullets across every tank and the ownerless pool
    pub fn bullet_count(&self) -> usize {
        self.player.as_ref().map_or(0, |p| p.bullets().len())
            + self.enemies.iter().map(|e| e.bullets().len()).sum::<usize>()
            + self.orphans.len()
    }
}
