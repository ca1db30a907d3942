//! Save/load of arenas as JSON
//!
//! The file layout is fixed and shared with existing save files:
//! `{ name, playerTank, enemyTanks, walls }`, camelCase keys, four-space
//! indentation. Bullets in the ownerless pool are not part of the layout.

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Bullet, EventKind, EventLog, Rect, Tank, TankGame, TankRole, Wall};

/// Errors from reading or writing save files
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wall at ({x}, {y}) is not aligned to the wall grid")]
    OffGridWall { x: i32, y: i32 },

    #[error("gun angle {0} is outside 0..360")]
    GunAngleOutOfRange(i32),

    #[error("the player tank has been destroyed; a lost game cannot be saved")]
    PlayerEliminated,
}

/// Top-level save file record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFile {
    pub name: String,
    pub player_tank: TankRecord,
    pub enemy_tanks: Vec<TankRecord>,
    pub walls: Vec<WallRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankRecord {
    pub pos_x: i32,
    pub pos_y: i32,
    pub gun_angle: i32,
    pub bullets: Vec<BulletRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletRecord {
    pub pos_x: i32,
    pub pos_y: i32,
    pub vel_x: i32,
    pub vel_y: i32,
    /// Older files omit this
    #[serde(default)]
    pub bounce_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallRecord {
    pub pos_x: i32,
    pub pos_y: i32,
}

impl From<&Bullet> for BulletRecord {
    fn from(b: &Bullet) -> Self {
        Self {
            pos_x: b.position.x,
            pos_y: b.position.y,
            vel_x: b.velocity.x,
            vel_y: b.velocity.y,
            bounce_count: b.bounce_count,
        }
    }
}

impl From<BulletRecord> for Bullet {
    fn from(r: BulletRecord) -> Self {
        Bullet::with_bounce_count(
            IVec2::new(r.pos_x, r.pos_y),
            IVec2::new(r.vel_x, r.vel_y),
            r.bounce_count,
        )
    }
}

impl From<&Tank> for TankRecord {
    fn from(t: &Tank) -> Self {
        Self {
            pos_x: t.position.x,
            pos_y: t.position.y,
            gun_angle: t.gun_angle(),
            bullets: t.bullets().iter().map(BulletRecord::from).collect(),
        }
    }
}

impl TankRecord {
    fn into_tank(self, role: TankRole) -> Result<Tank, PersistenceError> {
        if !(0..360).contains(&self.gun_angle) {
            return Err(PersistenceError::GunAngleOutOfRange(self.gun_angle));
        }
        let mut tank = Tank::new(role, IVec2::new(self.pos_x, self.pos_y), self.gun_angle);
        for bullet in self.bullets {
            tank.add_bullet(bullet.into());
        }
        Ok(tank)
    }
}

impl From<&Wall> for WallRecord {
    fn from(w: &Wall) -> Self {
        let p = w.position();
        Self {
            pos_x: p.x,
            pos_y: p.y,
        }
    }
}

impl WallRecord {
    fn into_wall(self) -> Result<Wall, PersistenceError> {
        let position = IVec2::new(self.pos_x, self.pos_y);
        if !Wall::is_on_grid(position) {
            return Err(PersistenceError::OffGridWall {
                x: self.pos_x,
                y: self.pos_y,
            });
        }
        Ok(Wall::new(position))
    }
}

impl SaveFile {
    /// Snapshot a game; fails once the player has been destroyed
    pub fn from_game(game: &TankGame) -> Result<Self, PersistenceError> {
        let player = game.player().ok_or(PersistenceError::PlayerEliminated)?;
        Ok(Self {
            name: game.name().to_string(),
            player_tank: player.into(),
            enemy_tanks: game.enemies().iter().map(TankRecord::from).collect(),
            walls: game.walls().iter().map(WallRecord::from).collect(),
        })
    }

    /// Build a fresh game from this record (perimeter walls are re-added)
    pub fn into_game(self) -> Result<TankGame, PersistenceError> {
        let player = self.player_tank.into_tank(TankRole::Player)?;
        let enemies = self
            .enemy_tanks
            .into_iter()
            .map(|r| r.into_tank(TankRole::Enemy))
            .collect::<Result<Vec<_>, _>>()?;
        let walls = self
            .walls
            .into_iter()
            .map(WallRecord::into_wall)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TankGame::new(self.name, player, enemies, walls))
    }
}

/// Serialize `game` with four-space indentation
pub fn to_json_string(game: &TankGame) -> Result<String, PersistenceError> {
    let record = SaveFile::from_game(game)?;
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    record.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

pub fn from_json_str(text: &str) -> Result<TankGame, PersistenceError> {
    let record: SaveFile = serde_json::from_str(text)?;
    record.into_game()
}

pub fn read_game(path: impl AsRef<Path>) -> Result<TankGame, PersistenceError> {
    let text = fs::read_to_string(path.as_ref())?;
    from_json_str(&text)
}

/// Write `game` to `path`, creating parent directories as needed
pub fn write_game(path: impl AsRef<Path>, game: &TankGame) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let json = to_json_string(game)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    log::info!("Saved game '{}' to {}", game.name(), path.display());
    Ok(())
}

impl TankGame {
    /// Load a game from `path`, recording where it came from
    pub fn initialize_from_file(
        path: impl AsRef<Path>,
        events: &mut EventLog,
    ) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        let game = read_game(path)?;
        log::info!("Loaded game '{}' from {}", game.name(), path.display());
        events.record(EventKind::GameInitialized {
            source: path.display().to_string(),
        });
        Ok(game)
    }
}
