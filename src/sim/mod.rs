//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `update` per tick)
//! - Integer pixel positions and velocities
//! - Stable iteration order (walls, player, enemies, ownerless bullets)
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod movement;
pub mod rect;
pub mod state;
pub mod tick;
pub mod wall;

pub use collision::{
    CollisionResolver, deal_with_collision_between_enemy_tanks_and_bullets,
    deal_with_collision_between_player_tank_and_bullets, deal_with_collision_for_bullets,
};
pub use events::{Event, EventKind, EventLog};
pub use movement::{Command, MotionController};
pub use rect::{Bounds, Rect};
pub use state::{Bullet, EntityColor, PlayerState, Roster, Tank, TankRole};
pub use tick::{GamePhase, TankGame, fire_bullet};
pub use wall::{Wall, WallContact, perimeter_walls};
