use glam::IVec2;

use crate::components::PaddleKind;
use crate::config::Config;

/// Integer pixel rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn from_center_size(center: IVec2, size: IVec2) -> Self {
        let mut rect = Self {
            min: IVec2::ZERO,
            size,
        };
        rect.set_center(center);
        rect
    }

    pub fn left(&self) -> i32 {
        self.min.x
    }

    pub fn right(&self) -> i32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.min.y
    }

    pub fn bottom(&self) -> i32 {
        self.min.y + self.size.y
    }

    pub fn center_x(&self) -> i32 {
        self.min.x + self.size.x / 2
    }

    pub fn center_y(&self) -> i32 {
        self.min.y + self.size.y / 2
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.center_x(), self.center_y())
    }

    pub fn set_center_x(&mut self, x: i32) {
        self.min.x = x - self.size.x / 2;
    }

    pub fn set_center_y(&mut self, y: i32) {
        self.min.y = y - self.size.y / 2;
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.set_center_x(center.x);
        self.set_center_y(center.y);
    }

    /// Grow by `amount` on every side
    pub fn inflate(&self, amount: i32) -> Self {
        Self::new(
            self.min.x - amount,
            self.min.y - amount,
            self.size.x + 2 * amount,
            self.size.y + 2 * amount,
        )
    }

    /// Strict overlap test: shared edges and empty rects never collide
    pub fn collides(&self, other: &Rect) -> bool {
        if self.size.x <= 0 || self.size.y <= 0 || other.size.x <= 0 || other.size.y <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Play area geometry derived from the config
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
    pub score_area_height: i32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
            score_area_height: config.score_area_height,
        }
    }

    /// Play area rectangle in surface coordinates
    pub fn play_area(&self) -> Rect {
        Rect::new(0, self.score_area_height, self.width, self.height)
    }

    /// Score strip above the play area
    pub fn score_area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.score_area_height)
    }

    /// Centre of the play area, where the ball is served from
    pub fn ball_spawn(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.score_area_height + self.height / 2)
    }

    /// Starting rectangle for a paddle, vertically centred
    pub fn paddle_spawn(&self, kind: PaddleKind, config: &Config) -> Rect {
        Rect::new(
            config.paddle_x(kind),
            self.score_area_height + (self.height - config.paddle_height) / 2,
            config.paddle_width,
            config.paddle_height,
        )
    }

    /// Whether a horizontal centre still lies inside `[0, width]`
    pub fn contains_x(&self, x: i32) -> bool {
        (0..=self.width).contains(&x)
    }
}
