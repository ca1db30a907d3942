//! Tank Arena - a tick-based 2D tank combat simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (walls, bullets, tanks, collisions, game state)
//! - `persistence`: JSON save files with the classic field layout
//! - `settings`: Driver configuration

pub mod persistence;
pub mod settings;
pub mod sim;

pub use persistence::PersistenceError;
pub use settings::Settings;
pub use sim::{Command, EventLog, GamePhase, TankGame};

use glam::{DVec2, IVec2};

/// Game configuration constants
pub mod consts {
    /// Wall tile size; every wall sits on this grid
    pub const WALL_WIDTH: i32 = 40;
    pub const WALL_HEIGHT: i32 = 40;

    /// Arena dimensions, in wall tiles
    pub const WALLS_ACROSS: i32 = 15;
    pub const WALLS_DOWN: i32 = 20;
    pub const ARENA_WIDTH: i32 = WALL_WIDTH * WALLS_ACROSS;
    pub const ARENA_HEIGHT: i32 = WALL_HEIGHT * WALLS_DOWN;

    /// Bullet defaults
    pub const BULLET_WIDTH: i32 = 5;
    pub const BULLET_HEIGHT: i32 = 5;
    pub const BULLET_SPEED: f64 = 5.0;
    /// A bullet that has bounced this many times is removed
    pub const MAX_BOUNCE_COUNT: u32 = 3;
    /// Live bullets a single tank may own at once
    pub const MAX_BULLET_PER_TANK: usize = 5;

    /// Tank defaults
    pub const TANK_WIDTH: i32 = 20;
    pub const TANK_HEIGHT: i32 = 20;
    /// Pixels per movement command
    pub const TANK_SPEED: i32 = 1;
    /// Degrees per rotate command
    pub const ROTATE_SPEED: i32 = 2;
    /// Muzzle distance from the tank centre, as a fraction of the tank size
    pub const MUZZLE_OFFSET_RATIO: f64 = 0.9;
}

/// Unit direction for a gun angle in degrees (y grows downward, so angles run clockwise)
#[inline]
pub fn heading(angle_degrees: i32) -> DVec2 {
    let radians = f64::from(angle_degrees).to_radians();
    DVec2::new(radians.cos(), radians.sin())
}

/// Truncate toward zero into integer pixel space
#[inline]
pub fn truncate(v: DVec2) -> IVec2 {
    IVec2::new(v.x as i32, v.y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_cardinal_directions() {
        let east = truncate(heading(0) * 5.0);
        assert_eq!(east, IVec2::new(5, 0));

        let south = truncate(heading(90) * 5.0);
        assert_eq!(south, IVec2::new(0, 5));

        let west = truncate(heading(180) * 5.0);
        assert_eq!(west, IVec2::new(-5, 0));

        let north = truncate(heading(270) * 5.0);
        assert_eq!(north, IVec2::new(0, -5));
    }

    #[test]
    fn test_truncate_rounds_toward_zero() {
        assert_eq!(truncate(DVec2::new(2.9, -2.9)), IVec2::new(2, -2));
    }
}
