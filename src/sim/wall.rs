//! Static grid-aligned walls and swept wall collision
//!
//! A wall is a WALL_WIDTH x WALL_HEIGHT tile whose top left corner sits on the
//! wall grid. Its right and bottom edges are inclusive (`x + width - 1`), one
//! pixel narrower than the edges of moving entities; the push-back math relies
//! on that asymmetry.
//!
//! Collision is tested at the destination only (`position + velocity`), so an
//! entity moving faster than a wall is wide can pass through it.

use glam::IVec2;

use super::rect::Rect;
use super::state::EntityColor;
use crate::consts::{WALL_HEIGHT, WALL_WIDTH};

/// Which faces of a wall a moving entity would strike this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContact {
    /// Struck the left or right face
    #[inline]
    pub fn is_side(&self) -> bool {
        self.left || self.right
    }

    /// Struck the top or bottom face
    #[inline]
    pub fn is_cap(&self) -> bool {
        self.top || self.bottom
    }
}

/// A static wall tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    position: IVec2,
    left_edge: i32,
    right_edge: i32,
    top_edge: i32,
    bottom_edge: i32,
}

impl Wall {
    /// Create a wall with its top left corner at `position`
    ///
    /// `position` must lie on the wall grid.
    pub fn new(position: IVec2) -> Self {
        debug_assert!(
            Self::is_on_grid(position),
            "wall instantiated with invalid coordinates ({}, {})",
            position.x,
            position.y
        );
        Self {
            position,
            left_edge: position.x,
            right_edge: position.x + WALL_WIDTH - 1,
            top_edge: position.y,
            bottom_edge: position.y + WALL_HEIGHT - 1,
        }
    }

    /// Whether a wall may be placed with its corner at `position`
    #[inline]
    pub fn is_on_grid(position: IVec2) -> bool {
        position.x % WALL_WIDTH == 0 && position.y % WALL_HEIGHT == 0
    }

    pub fn color(&self) -> EntityColor {
        EntityColor::Wall
    }

    /// True if moving `entity` by `vel` puts its box inside this wall
    pub fn is_colliding_with_wall<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        let dest = entity.position() + vel;

        dest.x <= self.right_edge
            && dest.x + entity.width() >= self.left_edge
            && dest.y <= self.bottom_edge
            && dest.y + entity.height() >= self.top_edge
    }

    /// True if moving `entity` by `vel` strikes this wall's left face
    ///
    /// `entity` must not already overlap the wall. An entity arriving from a
    /// corner is assigned to this face when it crosses the wall's left edge
    /// line no later than the top or bottom edge line.
    pub fn is_colliding_with_left_wall<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        self.assert_not_on_top(entity);
        self.strikes_left(vel, entity)
    }

    fn strikes_left<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        if !self.is_colliding_with_wall(vel, entity) || entity.right_edge() > self.left_edge {
            return false;
        }

        let to_face = time_to(self.left_edge - entity.right_edge(), vel.x);
        if entity.top_edge() >= self.top_edge && entity.bottom_edge() <= self.bottom_edge {
            true
        } else if entity.top_edge() < self.top_edge {
            time_to(self.top_edge - entity.bottom_edge(), vel.y) <= to_face
        } else {
            time_to(self.bottom_edge - entity.top_edge(), vel.y) <= to_face
        }
    }

    /// True if moving `entity` by `vel` strikes this wall's right face
    ///
    /// `entity` must not already overlap the wall.
    pub fn is_colliding_with_right_wall<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        self.assert_not_on_top(entity);
        self.strikes_right(vel, entity)
    }

    fn strikes_right<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        if !self.is_colliding_with_wall(vel, entity) || entity.left_edge() < self.right_edge {
            return false;
        }

        let to_face = time_to(self.right_edge - entity.left_edge(), vel.x);
        if entity.top_edge() >= self.top_edge && entity.bottom_edge() <= self.bottom_edge {
            true
        } else if entity.top_edge() < self.top_edge {
            time_to(self.top_edge - entity.bottom_edge(), vel.y) <= to_face
        } else {
            time_to(self.bottom_edge - entity.top_edge(), vel.y) <= to_face
        }
    }

    /// True if moving `entity` by `vel` strikes this wall's top face
    ///
    /// `entity` must not already overlap the wall. From a corner, the top face
    /// wins when the top edge line is crossed no earlier than the side line.
    pub fn is_colliding_with_top_wall<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        self.assert_not_on_top(entity);
        self.strikes_top(vel, entity)
    }

    fn strikes_top<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        if !self.is_colliding_with_wall(vel, entity) || entity.bottom_edge() > self.top_edge {
            return false;
        }

        let to_face = time_to(self.top_edge - entity.bottom_edge(), vel.y);
        if entity.left_edge() >= self.left_edge && entity.right_edge() <= self.right_edge {
            true
        } else if entity.right_edge() < self.left_edge {
            to_face >= time_to(self.left_edge - entity.right_edge(), vel.x)
        } else {
            to_face >= time_to(self.right_edge - entity.left_edge(), vel.x)
        }
    }

    /// True if moving `entity` by `vel` strikes this wall's bottom face
    ///
    /// `entity` must not already overlap the wall.
    pub fn is_colliding_with_bottom_wall<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        self.assert_not_on_top(entity);
        self.strikes_bottom(vel, entity)
    }

    fn strikes_bottom<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> bool {
        if !self.is_colliding_with_wall(vel, entity) || entity.top_edge() < self.bottom_edge {
            return false;
        }

        let to_face = time_to(self.bottom_edge - entity.top_edge(), vel.y);
        if entity.left_edge() >= self.left_edge && entity.right_edge() <= self.right_edge {
            true
        } else if entity.right_edge() < self.left_edge {
            to_face >= time_to(self.left_edge - entity.right_edge(), vel.x)
        } else {
            to_face >= time_to(self.right_edge - entity.left_edge(), vel.x)
        }
    }

    /// All four face predicates, evaluated against the same state
    pub fn contact<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> WallContact {
        self.assert_not_on_top(entity);
        self.resting_contact(vel, entity)
    }

    /// Like [`Wall::contact`], but `entity` may rest against one of the faces
    pub(crate) fn resting_contact<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> WallContact {
        WallContact {
            left: self.strikes_left(vel, entity),
            right: self.strikes_right(vel, entity),
            top: self.strikes_top(vel, entity),
            bottom: self.strikes_bottom(vel, entity),
        }
    }

    /// X of the entity's corner after moving by `vel` and stopping at this wall
    ///
    /// Returns the unobstructed `x + vel.x` when neither side face is struck.
    pub fn coordinate_x_if_pushed_back<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> i32 {
        self.assert_not_on_top(entity);
        self.pushed_back_x(vel, entity)
    }

    /// Y of the entity's corner after moving by `vel` and stopping at this wall
    ///
    /// Returns the unobstructed `y + vel.y` when neither cap face is struck.
    pub fn coordinate_y_if_pushed_back<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> i32 {
        self.assert_not_on_top(entity);
        self.pushed_back_y(vel, entity)
    }

    /// Both push-back coordinates; `entity` may rest against one of the faces
    pub(crate) fn resting_push_back<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> IVec2 {
        IVec2::new(self.pushed_back_x(vel, entity), self.pushed_back_y(vel, entity))
    }

    fn pushed_back_x<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> i32 {
        if self.strikes_left(vel, entity) {
            self.left_edge - entity.width() - 1
        } else if self.strikes_right(vel, entity) {
            self.right_edge + 1
        } else {
            entity.position().x + vel.x
        }
    }

    fn pushed_back_y<E: Rect + ?Sized>(&self, vel: IVec2, entity: &E) -> i32 {
        if self.strikes_bottom(vel, entity) {
            self.bottom_edge + 1
        } else if self.strikes_top(vel, entity) {
            self.top_edge - entity.height() - 1
        } else {
            entity.position().y + vel.y
        }
    }

    /// True if `entity` reaches past every face line of this wall
    ///
    /// No face predicate can hold for such an entity. Touching a face does
    /// not count.
    pub fn is_penetrated_by<E: Rect + ?Sized>(&self, entity: &E) -> bool {
        entity.right_edge() > self.left_edge
            && entity.left_edge() < self.right_edge
            && entity.bottom_edge() > self.top_edge
            && entity.top_edge() < self.bottom_edge
    }

    /// Same position as `other`
    #[inline]
    pub fn has_identical_properties(&self, other: &Wall) -> bool {
        self.position == other.position
    }

    /// Whether `walls` already holds a wall at this position
    pub fn wall_with_identical_property_contained(&self, walls: &[Wall]) -> bool {
        walls.iter().any(|w| w.has_identical_properties(self))
    }

    /// X of the corner of the grid cell containing `x`
    ///
    /// A coordinate on a cell boundary belongs to the cell starting there.
    #[inline]
    pub fn top_left_x_of_wall_bounding(x: i32) -> i32 {
        x.div_euclid(WALL_WIDTH) * WALL_WIDTH
    }

    /// Y of the corner of the grid cell containing `y`
    #[inline]
    pub fn top_left_y_of_wall_bounding(y: i32) -> i32 {
        y.div_euclid(WALL_HEIGHT) * WALL_HEIGHT
    }

    fn assert_not_on_top<E: Rect + ?Sized>(&self, entity: &E) {
        debug_assert!(
            !self.is_colliding_with_wall(IVec2::ZERO, entity),
            "object on top of wall at ({}, {})",
            self.position.x,
            self.position.y
        );
    }
}

impl Rect for Wall {
    #[inline]
    fn position(&self) -> IVec2 {
        self.position
    }

    #[inline]
    fn size(&self) -> IVec2 {
        IVec2::new(WALL_WIDTH, WALL_HEIGHT)
    }

    #[inline]
    fn right_edge(&self) -> i32 {
        self.right_edge
    }

    #[inline]
    fn bottom_edge(&self) -> i32 {
        self.bottom_edge
    }
}

/// Ticks needed to cover `distance` at `speed`, with IEEE semantics for a
/// stationary axis (a zero speed gives an infinite or NaN ratio)
#[inline]
fn time_to(distance: i32, speed: i32) -> f64 {
    f64::from(distance) / f64::from(speed)
}

/// The ring of walls lining the border of a `width` x `height` arena
///
/// Full left and right columns first, then the top and bottom rows between them.
pub fn perimeter_walls(width: i32, height: i32) -> Vec<Wall> {
    let rows = height / WALL_HEIGHT;
    let cols = width / WALL_WIDTH;
    let mut walls = Vec::with_capacity((2 * rows + 2 * (cols - 2).max(0)) as usize);

    for i in 0..rows {
        walls.push(Wall::new(IVec2::new(0, WALL_HEIGHT * i)));
        walls.push(Wall::new(IVec2::new(WALL_WIDTH * (cols - 1), WALL_HEIGHT * i)));
    }
    for i in 1..(cols - 1) {
        walls.push(Wall::new(IVec2::new(WALL_WIDTH * i, 0)));
        walls.push(Wall::new(IVec2::new(WALL_WIDTH * i, WALL_HEIGHT * (rows - 1))));
    }

    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::rect::Bounds;
    use proptest::prelude::*;

    fn tank_at(x: i32, y: i32) -> Bounds {
        Bounds::new(IVec2::new(x, y), IVec2::new(TANK_WIDTH, TANK_HEIGHT))
    }

    fn bullet_at(x: i32, y: i32) -> Bounds {
        Bounds::new(IVec2::new(x, y), IVec2::new(BULLET_WIDTH, BULLET_HEIGHT))
    }

    /// Wall at grid cell (2, 5), away from everything else
    fn wall() -> Wall {
        Wall::new(IVec2::new(WALL_WIDTH * 2, WALL_HEIGHT * 5))
    }

    #[test]
    fn test_edges_are_inclusive() {
        let w = wall();
        assert_eq!(w.left_edge(), 80);
        assert_eq!(w.right_edge(), 80 + WALL_WIDTH - 1);
        assert_eq!(w.top_edge(), 200);
        assert_eq!(w.bottom_edge(), 200 + WALL_HEIGHT - 1);
    }

    #[test]
    fn test_not_colliding_far_away() {
        let w = wall();
        let tank = tank_at(WALL_WIDTH * 8, WALL_HEIGHT * 8);
        assert!(!w.is_colliding_with_wall(IVec2::new(0, TANK_SPEED), &tank));
    }

    #[test]
    fn test_colliding_just_at_each_boundary() {
        let w = wall();
        let v = TANK_SPEED;

        let from_left = tank_at(w.left_edge() - v - TANK_WIDTH, w.top_edge());
        assert!(w.is_colliding_with_wall(IVec2::new(v, 0), &from_left));
        let from_left = tank_at(w.left_edge() - v - TANK_WIDTH - 1, w.top_edge());
        assert!(!w.is_colliding_with_wall(IVec2::new(v, 0), &from_left));

        let from_right = tank_at(w.right_edge() + v, w.top_edge());
        assert!(w.is_colliding_with_wall(IVec2::new(-v, 0), &from_right));
        let from_right = tank_at(w.right_edge() + v + 1, w.top_edge());
        assert!(!w.is_colliding_with_wall(IVec2::new(-v, 0), &from_right));

        let from_top = tank_at(w.left_edge(), w.top_edge() - v - TANK_HEIGHT);
        assert!(w.is_colliding_with_wall(IVec2::new(0, v), &from_top));
        let from_top = tank_at(w.left_edge(), w.top_edge() - v - TANK_HEIGHT - 1);
        assert!(!w.is_colliding_with_wall(IVec2::new(0, v), &from_top));

        let from_bottom = tank_at(w.left_edge(), w.bottom_edge() + v);
        assert!(w.is_colliding_with_wall(IVec2::new(0, -v), &from_bottom));
        let from_bottom = tank_at(w.left_edge(), w.bottom_edge() + v + 1);
        assert!(!w.is_colliding_with_wall(IVec2::new(0, -v), &from_bottom));
    }

    #[test]
    fn test_left_face_straight_on() {
        let w = wall();
        let tank = tank_at(w.left_edge() - TANK_WIDTH - TANK_SPEED, w.top_edge());
        assert!(w.is_colliding_with_left_wall(IVec2::new(TANK_SPEED, 0), &tank));
        assert!(!w.is_colliding_with_right_wall(IVec2::new(TANK_SPEED, 0), &tank));
        assert!(!w.is_colliding_with_top_wall(IVec2::new(TANK_SPEED, 0), &tank));

        let short = tank_at(w.left_edge() - TANK_WIDTH - TANK_SPEED - 1, w.top_edge());
        assert!(!w.is_colliding_with_left_wall(IVec2::new(TANK_SPEED, 0), &short));
    }

    #[test]
    fn test_left_face_from_top_left_corner() {
        let w = wall();
        // Bottom edge already one pixel below the wall's top edge
        let tank = tank_at(
            w.left_edge() - TANK_SPEED - TANK_WIDTH,
            w.top_edge() - TANK_HEIGHT + 1,
        );
        let vel = IVec2::new(TANK_SPEED, TANK_SPEED);
        assert!(w.is_colliding_with_left_wall(vel, &tank));
        assert!(!w.is_colliding_with_top_wall(vel, &tank));

        let short = tank_at(tank.left_edge() - 1, tank.top_edge());
        assert!(!w.is_colliding_with_left_wall(vel, &short));
    }

    #[test]
    fn test_top_face_wins_when_reached_later_from_corner() {
        let w = wall();
        // 2px above, 1px to the left, moving down-right fast: crosses the
        // left edge line first, then the top edge line while already inside
        // the horizontal span
        let bullet = bullet_at(w.left_edge() - BULLET_WIDTH - 1, w.top_edge() - BULLET_HEIGHT - 2);
        let vel = IVec2::new(4, 4);
        assert!(w.is_colliding_with_wall(vel, &bullet));
        assert!(w.is_colliding_with_top_wall(vel, &bullet));
        assert!(!w.is_colliding_with_left_wall(vel, &bullet));
    }

    #[test]
    fn test_exact_corner_counts_for_both_faces() {
        let w = wall();
        let bullet = bullet_at(w.left_edge() - BULLET_WIDTH - 2, w.top_edge() - BULLET_HEIGHT - 2);
        let vel = IVec2::new(3, 3);
        let contact = w.contact(vel, &bullet);
        assert!(contact.left);
        assert!(contact.top);
        assert!(!contact.right);
        assert!(!contact.bottom);
    }

    #[test]
    fn test_right_top_bottom_faces_straight_on() {
        let w = wall();
        let v = TANK_SPEED;

        let from_right = tank_at(w.right_edge() + v, w.top_edge());
        assert!(w.is_colliding_with_right_wall(IVec2::new(-v, 0), &from_right));
        assert!(!w.is_colliding_with_left_wall(IVec2::new(-v, 0), &from_right));

        let from_top = tank_at(w.left_edge(), w.top_edge() - v - TANK_HEIGHT);
        assert!(w.is_colliding_with_top_wall(IVec2::new(0, v), &from_top));
        assert!(!w.is_colliding_with_bottom_wall(IVec2::new(0, v), &from_top));

        let from_bottom = tank_at(w.left_edge(), w.bottom_edge() + v);
        assert!(w.is_colliding_with_bottom_wall(IVec2::new(0, -v), &from_bottom));
        assert!(!w.is_colliding_with_top_wall(IVec2::new(0, -v), &from_bottom));
    }

    #[test]
    fn test_push_back_coordinates() {
        let w = wall();

        let from_left = bullet_at(w.left_edge() - BULLET_WIDTH - 3, w.top_edge() + 10);
        let vel = IVec2::new(10, 0);
        assert_eq!(w.coordinate_x_if_pushed_back(vel, &from_left), w.left_edge() - BULLET_WIDTH - 1);
        assert_eq!(w.coordinate_y_if_pushed_back(vel, &from_left), from_left.top_edge());

        let from_right = bullet_at(w.right_edge() + 3, w.top_edge() + 10);
        let vel = IVec2::new(-10, 0);
        assert_eq!(w.coordinate_x_if_pushed_back(vel, &from_right), w.right_edge() + 1);

        let from_top = bullet_at(w.left_edge() + 10, w.top_edge() - BULLET_HEIGHT - 3);
        let vel = IVec2::new(0, 10);
        assert_eq!(w.coordinate_y_if_pushed_back(vel, &from_top), w.top_edge() - BULLET_HEIGHT - 1);
        assert_eq!(w.coordinate_x_if_pushed_back(vel, &from_top), from_top.left_edge());

        let from_bottom = bullet_at(w.left_edge() + 10, w.bottom_edge() + 3);
        let vel = IVec2::new(0, -10);
        assert_eq!(w.coordinate_y_if_pushed_back(vel, &from_bottom), w.bottom_edge() + 1);
    }

    #[test]
    fn test_push_back_without_collision_advances() {
        let w = wall();
        let far = bullet_at(400, 400);
        let vel = IVec2::new(3, -2);
        assert_eq!(w.coordinate_x_if_pushed_back(vel, &far), 403);
        assert_eq!(w.coordinate_y_if_pushed_back(vel, &far), 398);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "object on top of wall")]
    fn test_directional_predicate_rejects_overlapping_entity() {
        let w = wall();
        let inside = tank_at(w.left_edge(), w.top_edge());
        w.is_colliding_with_left_wall(IVec2::new(0, TANK_SPEED), &inside);
    }

    #[test]
    fn test_touching_a_face_is_not_penetration() {
        let w = wall();
        assert!(w.is_penetrated_by(&tank_at(w.left_edge(), w.top_edge())));
        assert!(!w.is_penetrated_by(&tank_at(w.left_edge() - TANK_WIDTH, w.top_edge())));
        assert!(!w.is_penetrated_by(&tank_at(w.right_edge(), w.top_edge())));
        assert!(!w.is_penetrated_by(&tank_at(w.left_edge(), w.top_edge() - TANK_HEIGHT)));
        assert!(!w.is_penetrated_by(&tank_at(w.left_edge(), w.bottom_edge())));
    }

    #[test]
    fn test_resting_contact_for_flush_entity() {
        let w = wall();
        let flush = bullet_at(w.left_edge() - BULLET_WIDTH, w.top_edge() + 10);
        let vel = IVec2::new(5, 0);
        assert!(w.overlaps(&flush));

        let contact = w.resting_contact(vel, &flush);
        assert_eq!(contact, WallContact { left: true, ..Default::default() });
        assert_eq!(
            w.resting_push_back(vel, &flush),
            IVec2::new(w.left_edge() - BULLET_WIDTH - 1, w.top_edge() + 10)
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid coordinates")]
    fn test_off_grid_wall_is_rejected() {
        Wall::new(IVec2::new(WALL_WIDTH + 1, 0));
    }

    #[test]
    fn test_wall_with_identical_property_contained() {
        let walls = vec![
            Wall::new(IVec2::new(0, 0)),
            Wall::new(IVec2::new(WALL_WIDTH * 2, WALL_HEIGHT * 5)),
            Wall::new(IVec2::new(0, WALL_HEIGHT * 3)),
        ];
        assert!(wall().wall_with_identical_property_contained(&walls));
        let other = Wall::new(IVec2::new(WALL_WIDTH * 3, WALL_HEIGHT));
        assert!(!other.wall_with_identical_property_contained(&walls));
        assert!(!other.wall_with_identical_property_contained(&[]));
    }

    #[test]
    fn test_top_left_of_wall_bounding() {
        assert_eq!(Wall::top_left_x_of_wall_bounding(0), 0);
        assert_eq!(Wall::top_left_x_of_wall_bounding(WALL_WIDTH - 1), 0);
        assert_eq!(Wall::top_left_x_of_wall_bounding(WALL_WIDTH), WALL_WIDTH);
        assert_eq!(Wall::top_left_x_of_wall_bounding(WALL_WIDTH * 3 + 7), WALL_WIDTH * 3);
        assert_eq!(Wall::top_left_y_of_wall_bounding(WALL_HEIGHT * 2), WALL_HEIGHT * 2);
        assert_eq!(Wall::top_left_y_of_wall_bounding(WALL_HEIGHT * 2 - 1), WALL_HEIGHT);
    }

    #[test]
    fn test_perimeter_walls_cover_border_once() {
        let walls = perimeter_walls(ARENA_WIDTH, ARENA_HEIGHT);
        let cols = ARENA_WIDTH / WALL_WIDTH;
        let rows = ARENA_HEIGHT / WALL_HEIGHT;
        assert_eq!(walls.len() as i32, 2 * rows + 2 * (cols - 2));

        for i in 0..rows {
            let left = Wall::new(IVec2::new(0, WALL_HEIGHT * i));
            let right = Wall::new(IVec2::new(WALL_WIDTH * (cols - 1), WALL_HEIGHT * i));
            assert!(left.wall_with_identical_property_contained(&walls));
            assert!(right.wall_with_identical_property_contained(&walls));
        }
        for i in 1..(cols - 1) {
            let top = Wall::new(IVec2::new(WALL_WIDTH * i, 0));
            let bottom = Wall::new(IVec2::new(WALL_WIDTH * i, WALL_HEIGHT * (rows - 1)));
            assert!(top.wall_with_identical_property_contained(&walls));
            assert!(bottom.wall_with_identical_property_contained(&walls));
        }

        for (i, w) in walls.iter().enumerate() {
            assert!(!w.wall_with_identical_property_contained(&walls[i + 1..]));
        }
    }

    #[test]
    fn test_perimeter_walls_other_dimensions() {
        let walls = perimeter_walls(400, 1200);
        assert_eq!(walls.len(), 2 * 30 + 2 * 8);
        assert!(Wall::new(IVec2::new(360, 1160)).wall_with_identical_property_contained(&walls));
        assert!(!Wall::new(IVec2::new(40, 40)).wall_with_identical_property_contained(&walls));
    }

    proptest! {
        #[test]
        fn prop_at_rest_collision_matches_overlap(x in 0i32..400, y in 0i32..400) {
            let w = wall();
            let tank = tank_at(x, y);
            prop_assert_eq!(w.is_colliding_with_wall(IVec2::ZERO, &tank), w.overlaps(&tank));
        }

        #[test]
        fn prop_side_face_hit_exactly_at_speed(speed in 1i32..=WALL_WIDTH, dy in 0i32..(WALL_HEIGHT - TANK_HEIGHT)) {
            let w = wall();
            let y = w.top_edge() + dy;

            let at = tank_at(w.left_edge() - TANK_WIDTH - speed, y);
            prop_assert!(w.is_colliding_with_left_wall(IVec2::new(speed, 0), &at));
            let beyond = tank_at(w.left_edge() - TANK_WIDTH - speed - 1, y);
            prop_assert!(!w.is_colliding_with_left_wall(IVec2::new(speed, 0), &beyond));

            let at = tank_at(w.right_edge() + speed, y);
            prop_assert!(w.is_colliding_with_right_wall(IVec2::new(-speed, 0), &at));
            let beyond = tank_at(w.right_edge() + speed + 1, y);
            prop_assert!(!w.is_colliding_with_right_wall(IVec2::new(-speed, 0), &beyond));
        }

        #[test]
        fn prop_cap_face_hit_exactly_at_speed(speed in 1i32..=WALL_HEIGHT, dx in 0i32..(WALL_WIDTH - TANK_WIDTH)) {
            let w = wall();
            let x = w.left_edge() + dx;

            let at = tank_at(x, w.top_edge() - TANK_HEIGHT - speed);
            prop_assert!(w.is_colliding_with_top_wall(IVec2::new(0, speed), &at));
            let beyond = tank_at(x, w.top_edge() - TANK_HEIGHT - speed - 1);
            prop_assert!(!w.is_colliding_with_top_wall(IVec2::new(0, speed), &beyond));

            let at = tank_at(x, w.bottom_edge() + speed);
            prop_assert!(w.is_colliding_with_bottom_wall(IVec2::new(0, -speed), &at));
            let beyond = tank_at(x, w.bottom_edge() + speed + 1);
            prop_assert!(!w.is_colliding_with_bottom_wall(IVec2::new(0, -speed), &beyond));
        }
    }
}
