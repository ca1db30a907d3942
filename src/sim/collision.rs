//! Collision queries against the arena walls and cross-entity resolution
//!
//! Wall queries go through [`CollisionResolver`], which borrows the wall list.
//! Bullet and tank resolution operates on the [`Roster`]: each pass marks what
//! it hit, then removes the marked bullets before the next pass runs, so a
//! bullet destroyed early in a tick is never matched again later that tick.

use glam::IVec2;

use super::events::{EventKind, EventLog};
use super::rect::{Bounds, Rect};
use super::state::{Bullet, Roster, Tank, TankRole};
use super::wall::Wall;

/// Wall-facing collision queries for one arena
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver<'a> {
    walls: &'a [Wall],
}

impl<'a> CollisionResolver<'a> {
    pub fn new(walls: &'a [Wall]) -> Self {
        Self { walls }
    }

    /// True if moving `entity` by `vel` lands it in any wall
    pub fn is_colliding_with_a_wall<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        self.first_colliding_wall(vel, entity).is_some()
    }

    /// First wall, in arena order, that `entity` would land in
    pub fn first_colliding_wall<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> Option<&'a Wall> {
        self.walls.iter().find(|w| w.is_colliding_with_wall(vel, entity))
    }

    /// Where `entity` ends up after moving by `vel` with walls as hard stops
    pub fn pushed_back_position_or_advance<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> IVec2 {
        match self.first_colliding_wall(vel, entity) {
            // Already inside the wall: no face to stop against
            Some(wall) if wall.is_penetrated_by(entity) => entity.position() + vel,
            Some(wall) => wall.resting_push_back(vel, entity),
            None => entity.position() + vel,
        }
    }

    /// Reflect `bullet` off the wall it is about to hit
    ///
    /// The caller must have seen `is_colliding_with_a_wall` hold for this
    /// bullet. One axis of position is mirrored across the struck face (the
    /// x axis when a side face is struck), every struck axis has its velocity
    /// flipped, and the bounce count goes up by exactly one.
    pub fn bounce_off_wall(&self, bullet: &mut Bullet) {
        let vel = bullet.velocity;
        let wall = self
            .first_colliding_wall(vel, &*bullet)
            .expect("bounce resolved for a bullet with no colliding wall");

        if wall.is_penetrated_by(&*bullet) {
            // Spawned inside a wall: pass through and still spend a bounce
            bullet.advance();
            bullet.increase_bounce_count();
            return;
        }

        // A bullet fired from a tank beside the wall may start flush with a face
        let contact = wall.resting_contact(vel, &*bullet);
        let pushed = wall.resting_push_back(vel, &*bullet);
        let origin = bullet.position;

        bullet.position = if contact.is_side() {
            IVec2::new(origin.x + (pushed.x - origin.x) * 2 - vel.x, pushed.y)
        } else {
            IVec2::new(pushed.x, origin.y + (pushed.y - origin.y) * 2 - vel.y)
        };
        bullet.increase_bounce_count();

        let mut reflected = vel;
        if contact.is_side() {
            reflected.x = -vel.x;
        }
        if contact.is_cap() {
            reflected.y = -vel.y;
        }
        bullet.set_velocity(reflected);
    }
}

/// Remove every pair of overlapping bullets, wherever they are held
///
/// Order: pairs within each tank (player first), player against each enemy,
/// every enemy pair, then each tank against the ownerless pool.
pub fn deal_with_collision_for_bullets(roster: &mut Roster, events: &mut EventLog) {
    let mut destroyed = 0;

    if let Some(player) = roster.player.as_mut() {
        destroyed += destroy_overlapping_within(player.bullets_mut());
    }
    for enemy in roster.enemies.iter_mut() {
        destroyed += destroy_overlapping_within(enemy.bullets_mut());
    }

    if let Some(player) = roster.player.as_mut() {
        for enemy in roster.enemies.iter_mut() {
            destroyed += destroy_overlapping_between(player.bullets_mut(), enemy.bullets_mut());
        }
    }
    for j in 1..roster.enemies.len() {
        let (head, tail) = roster.enemies.split_at_mut(j);
        let later = &mut tail[0];
        for earlier in head.iter_mut() {
            destroyed += destroy_overlapping_between(earlier.bullets_mut(), later.bullets_mut());
        }
    }

    if let Some(player) = roster.player.as_mut() {
        destroyed += destroy_overlapping_between(player.bullets_mut(), &mut roster.orphans);
    }
    for enemy in roster.enemies.iter_mut() {
        destroyed += destroy_overlapping_between(enemy.bullets_mut(), &mut roster.orphans);
    }

    if destroyed > 0 {
        events.record(EventKind::BulletsDestroyed { count: destroyed });
    }
}

/// Destroy every enemy hit by a tank's bullet
///
/// Each enemy is tested against the player's bullets and then every enemy's
/// bullets, its own included. Bullets that hit are removed; an enemy that was
/// hit is removed after all enemies have been tested, its bullets moving to
/// the ownerless pool. Returns true when no enemy remains.
pub fn deal_with_collision_between_enemy_tanks_and_bullets(
    roster: &mut Roster,
    events: &mut EventLog,
) -> bool {
    let mut struck = vec![false; roster.enemies.len()];
    let mut destroyed = 0;

    for (t, hit) in struck.iter_mut().enumerate() {
        let target = roster.enemies[t].bounds();

        if let Some(player) = roster.player.as_mut() {
            let removed = remove_bullets_hitting(player.bullets_mut(), &target);
            *hit |= removed > 0;
            destroyed += removed;
        }
        for shooter in roster.enemies.iter_mut() {
            let removed = remove_bullets_hitting(shooter.bullets_mut(), &target);
            *hit |= removed > 0;
            destroyed += removed;
        }
    }

    if destroyed > 0 {
        events.record(EventKind::BulletsDestroyed { count: destroyed });
    }

    let enemies = std::mem::take(&mut roster.enemies);
    for (mut enemy, hit) in enemies.into_iter().zip(struck) {
        if hit {
            orphan_bullets_of(&mut enemy, &mut roster.orphans, events);
            events.record(EventKind::TankDestroyed {
                role: TankRole::Enemy,
            });
        } else {
            roster.enemies.push(enemy);
        }
    }

    roster.enemies.is_empty()
}

/// Eliminate the player if a tank's bullet hit it
///
/// The player's own bullets are tested first, then each enemy's in order; the
/// first shooter with a hit has its hitting bullets removed and testing stops.
/// Returns true when the player is (now or already) eliminated.
pub fn deal_with_collision_between_player_tank_and_bullets(
    roster: &mut Roster,
    events: &mut EventLog,
) -> bool {
    let Some(player) = roster.player.as_mut() else {
        return true;
    };
    let target = player.bounds();

    let mut removed = remove_bullets_hitting(player.bullets_mut(), &target);
    if removed == 0 {
        for enemy in roster.enemies.iter_mut() {
            removed = remove_bullets_hitting(enemy.bullets_mut(), &target);
            if removed > 0 {
                break;
            }
        }
    }
    if removed == 0 {
        return false;
    }

    events.record(EventKind::BulletsDestroyed { count: removed });
    if let Some(mut player) = roster.player.eliminate() {
        orphan_bullets_of(&mut player, &mut roster.orphans, events);
    }
    events.record(EventKind::TankDestroyed {
        role: TankRole::Player,
    });
    true
}

fn orphan_bullets_of(tank: &mut Tank, orphans: &mut Vec<Bullet>, events: &mut EventLog) {
    let bullets = tank.take_bullets();
    if !bullets.is_empty() {
        events.record(EventKind::BulletsOrphaned {
            count: bullets.len(),
        });
        orphans.extend(bullets);
    }
}

fn destroy_overlapping_within(bullets: &mut Vec<Bullet>) -> usize {
    let mut marks = vec![false; bullets.len()];
    for i in 0..bullets.len() {
        for j in (i + 1)..bullets.len() {
            if bullets[i].overlaps(&bullets[j]) {
                marks[i] = true;
                marks[j] = true;
            }
        }
    }
    retain_unmarked(bullets, &marks)
}

fn destroy_overlapping_between(a: &mut Vec<Bullet>, b: &mut Vec<Bullet>) -> usize {
    let mut marks_a = vec![false; a.len()];
    let mut marks_b = vec![false; b.len()];
    for (i, first) in a.iter().enumerate() {
        for (j, second) in b.iter().enumerate() {
            if first.overlaps(second) {
                marks_a[i] = true;
                marks_b[j] = true;
            }
        }
    }
    retain_unmarked(a, &marks_a) + retain_unmarked(b, &marks_b)
}

fn remove_bullets_hitting(bullets: &mut Vec<Bullet>, target: &Bounds) -> usize {
    let before = bullets.len();
    bullets.retain(|b| !b.overlaps(target));
    before - bullets.len()
}

/// Drop the bullets whose mark is set; returns how many were dropped
fn retain_unmarked(bullets: &mut Vec<Bullet>, marks: &[bool]) -> usize {
    let before = bullets.len();
    let mut marks = marks.iter().copied();
    bullets.retain(|_| !marks.next().unwrap_or(false));
    before - bullets.len()
}
