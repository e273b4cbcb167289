/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 500;
    pub const SCORE_AREA_HEIGHT: i32 = 50; // Strip above the play area

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = Self::ARENA_HEIGHT / 5;
    pub const PADDLE_EDGE_OFFSET: i32 = 10; // Gap between arena edge and paddle
    pub const PLAYER_SWING: i32 = 9;
    pub const AI_SWING: i32 = 5;
    pub const PLAYER_MARGIN: i32 = 10;
    pub const AI_MARGIN: i32 = 5;
    pub const AI_JITTER: i32 = 3;

    // Ball
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEED_INITIAL: f32 = 12.0;
    pub const PLAYER_HIT_BONUS: f32 = 0.3;
    pub const AI_HIT_BONUS: f32 = 0.1;
    pub const WALL_HIT_BONUS: f32 = 0.2;
    pub const DEFLECT_JITTER: i32 = 20; // Degrees

    /// Launch bands in whole degrees. Keeps serves away from both axes.
    pub const LAUNCH_BANDS: [(i32, i32); 4] = [(50, 70), (110, 130), (230, 250), (290, 310)];

    // Score
    pub const WIN_SCORE: u32 = 11;
    pub const WIN_MARGIN: u32 = 2;
}
