//! World state and the per-tick rules: scrolling, scoring, recycling,
//! gravity, jumping and collision.
//!
//! Coordinates are in pixels with y growing downward. The three pipes share
//! one horizontal offset and sit [`PIPE_SPACING`] columns apart, so the
//! leftmost pipe (index 0) is always the next one the bird meets.

use crate::rng::XorShift32;

pub const PLAYER_X: i32 = 8;
pub const PLAYER_WIDTH: i32 = 5;
pub const PLAYER_HEIGHT: i32 = 4;
pub const PLAYER_START_Y: i32 = 40;

pub const PIPE_COUNT: usize = 3;
pub const PIPE_WIDTH: i32 = 8;
/// Rows of open air below each top pipe.
pub const PIPE_GAP: i32 = 20;
pub const PIPE_SPACING: i32 = 40;
/// Columns the pipes move left per tick.
pub const PIPE_SPEED: i32 = 2;
pub const PIPES_START_X: i32 = 81;
/// The leftmost pipe is recycled once its offset drops below this.
pub const RECYCLE_X: i32 = -10;
/// Offset at which the leftmost pipe's right edge has just passed the bird.
pub const SCORE_X: i32 = PLAYER_X - 1;

pub const MIN_PIPE_HEIGHT: i32 = 8;
/// Placeholder heights shown before the first start.
pub const DUMMY_PIPE_HEIGHT: i32 = 10;

pub const JUMP_HEIGHT: i32 = 10;
/// Rows per tick the bird drops once dead.
pub const DEATH_FALL: i32 = 2;

/// Top-pipe height in `[8, 39]` drawn from `rng`.
pub fn random_pipe_height(rng: &mut XorShift32) -> i32 {
    (rng.next_u32() & 31) as i32 + MIN_PIPE_HEIGHT
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pipes {
    /// Column of the leftmost pipe's left edge.
    pub x: i32,
    /// Top-pipe heights, leftmost first.
    pub heights: [i32; PIPE_COUNT],
}

impl Pipes {
    /// Left edge of pipe `i`.
    pub fn column(&self, i: usize) -> i32 {
        self.x + i as i32 * PIPE_SPACING
    }

    pub fn randomize(&mut self, rng: &mut XorShift32) {
        for height in &mut self.heights {
            *height = random_pipe_height(rng);
        }
    }

    /// Move the leftmost pipe to the far right with a fresh height.
    fn recycle(&mut self, rng: &mut XorShift32) {
        self.x += PIPE_SPACING;
        self.heights.rotate_left(1);
        self.heights[PIPE_COUNT - 1] = random_pipe_height(rng);
    }
}

/// What a call to [`World::scroll`] did besides moving the pipes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scroll {
    pub scored: bool,
    pub recycled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    pub player_y: i32,
    pub pipes: Pipes,
    pub score: u32,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub const fn new() -> Self {
        Self {
            player_y: PLAYER_START_Y,
            pipes: Pipes {
                x: PIPES_START_X,
                heights: [DUMMY_PIPE_HEIGHT; PIPE_COUNT],
            },
            score: 0,
        }
    }

    /// Scroll the pipes one step, scoring and recycling as they go.
    pub fn scroll(&mut self, rng: &mut XorShift32) -> Scroll {
        let mut step = Scroll::default();

        self.pipes.x -= PIPE_SPEED;
        if self.pipes.x == SCORE_X {
            self.score = self.score.wrapping_add(1);
            step.scored = true;
        }
        if self.pipes.x < RECYCLE_X {
            self.pipes.recycle(rng);
            step.recycled = true;
        }

        step
    }

    /// One tick of gravity, then `jumps` kicks.
    ///
    /// Each kick checks the row the bird is on after gravity and any
    /// earlier kick.
    pub fn fly(&mut self, jumps: u32) {
        self.player_y += 1;
        for _ in 0..jumps {
            self.jump();
        }
    }

    /// Kick the bird upward, unless it is already at the top row or above.
    pub fn jump(&mut self) {
        if self.player_y > 0 {
            self.player_y -= JUMP_HEIGHT;
        }
    }

    /// Death animation step.
    pub fn sink(&mut self) {
        self.player_y = self.player_y.saturating_add(DEATH_FALL);
    }

    /// Whether the bird touches the leftmost pipe pair.
    pub fn collides(&self) -> bool {
        let x = self.pipes.x;
        let height = self.pipes.heights[0];

        let overlaps_x = PLAYER_X < x + PIPE_WIDTH && PLAYER_X + PLAYER_WIDTH > x;
        if !overlaps_x {
            return false;
        }

        let hits_top = self.player_y < height;
        let hits_bottom = self.player_y + PLAYER_HEIGHT > height + PIPE_GAP;
        hits_top || hits_bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn world(pipes_x: i32, heights: [i32; 3], player_y: i32) -> World {
        World {
            player_y,
            pipes: Pipes { x: pipes_x, heights },
            score: 0,
        }
    }

    #[test]
    fn starts_with_dummy_pipes_offscreen() {
        let world = World::new();
        assert_eq!(world.player_y, 40);
        assert_eq!(world.pipes.x, 81);
        assert_eq!(world.pipes.heights, [10, 10, 10]);
        assert_eq!(
            [world.pipes.column(0), world.pipes.column(1), world.pipes.column(2)],
            [81, 121, 161]
        );
    }

    #[test]
    fn forty_six_scrolls_recycle_once() {
        let mut rng = XorShift32::new(1);
        let mut world = world(81, [9, 9, 13], 40);

        let mut recycles = 0;
        for tick in 1..=46 {
            let step = world.scroll(&mut rng);
            if step.recycled {
                recycles += 1;
                assert_eq!(tick, 46);
            }
        }

        assert_eq!(recycles, 1);
        assert_eq!(world.pipes.x, 29);
        assert_eq!(world.pipes.heights, [9, 13, (0x0004_2021 & 31) + 8]);
        assert_eq!(world.score, 1);
    }

    #[test]
    fn pipe_offset_stays_bounded() {
        let mut rng = XorShift32::new(99);
        let mut world = World::new();
        for _ in 0..1_000 {
            world.scroll(&mut rng);
            assert!((RECYCLE_X..=80).contains(&world.pipes.x), "x = {}", world.pipes.x);
        }
    }

    #[test]
    fn recycle_shifts_heights_left() {
        let mut rng = XorShift32::new(5);
        let mut world = world(-9, [11, 22, 33], 30);
        let step = world.scroll(&mut rng);

        assert!(step.recycled);
        assert_eq!(world.pipes.heights[..2], [22, 33]);
        assert!((8..=39).contains(&world.pipes.heights[2]));
    }

    #[test]
    fn score_edge_fires_once() {
        let mut rng = XorShift32::new(1);
        let mut world = world(9, [20, 20, 20], 30);

        assert_eq!(world.scroll(&mut rng), Scroll { scored: true, recycled: false });
        assert_eq!(world.score, 1);

        for _ in 0..19 {
            assert!(!world.scroll(&mut rng).scored);
        }
        assert_eq!(world.score, 1);
    }

    #[test]
    fn random_heights_stay_in_range() {
        let mut rng = XorShift32::default();
        for _ in 0..10_000 {
            let h = random_pipe_height(&mut rng);
            assert!((8..=39).contains(&h));
        }
    }

    fn flown(player_y: i32, jumps: u32) -> i32 {
        let mut w = world(81, [10; 3], player_y);
        w.fly(jumps);
        w.player_y
    }

    #[test]
    fn gravity_without_jump() {
        assert_eq!(flown(30, 0), 31);
        assert_eq!(flown(0, 0), 1);
        assert_eq!(flown(-4, 0), -3);
    }

    #[test]
    fn jump_nets_minus_nine() {
        assert_eq!(flown(30, 1), 21);
        assert_eq!(flown(1, 1), -8);
    }

    #[test]
    fn top_row_jumps_after_gravity() {
        // gravity first puts the bird at row 1, which may still jump
        assert_eq!(flown(0, 1), -9);
        assert_eq!(flown(-1, 1), 0);
        assert_eq!(flown(-3, 1), -2);
    }

    #[test]
    fn two_sources_jump_twice() {
        assert_eq!(flown(30, 2), 11);
        // the second kick is skipped once the bird is above the screen
        assert_eq!(flown(5, 2), -4);
    }

    #[test]
    fn start_jump_lifts_ten_rows() {
        let mut w = World::new();
        w.jump();
        assert_eq!(w.player_y, 30);
    }

    #[test]
    fn hits_top_pipe() {
        assert!(world(6, [20, 10, 10], 10).collides());
    }

    #[test]
    fn flies_through_gap() {
        assert!(!world(6, [10, 10, 10], 15).collides());
    }

    #[test]
    fn hits_bottom_pipe() {
        // gap is [10, 30); bird spans [27, 31)
        assert!(world(6, [10, 10, 10], 27).collides());
        assert!(!world(6, [10, 10, 10], 26).collides());
    }

    #[test]
    fn no_collision_outside_pipe_columns() {
        // pipe [13, 21) starts where the bird [8, 13) ends
        assert!(!world(13, [50, 10, 10], 0).collides());
        assert!(world(12, [50, 10, 10], 0).collides());
        // pipe [0, 8) ends where the bird starts
        assert!(!world(0, [50, 10, 10], 0).collides());
        assert!(world(1, [50, 10, 10], 0).collides());
    }

    #[test]
    fn sinking_moves_two_rows() {
        let mut w = World::new();
        w.sink();
        assert_eq!(w.player_y, 42);
    }
}
