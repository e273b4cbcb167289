//! Frame layout drawn against an abstract canvas
//!
//! The host owns the actual surface and fonts; this module only decides what
//! goes where.

use glam::IVec2;

use crate::error::RenderError;
use crate::map::Rect;
use crate::{Ball, GameMap, Paddle, PaddleKind, Score};

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ROYAL_BLUE: Color = Color::rgb(67, 110, 238);
    pub const DARK_GRAY: Color = Color::rgb(50, 50, 50);
}

/// Text styles the layout asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Score,  // 36 pt
    Banner, // 50 pt
}

impl Font {
    pub fn point_size(self) -> i32 {
        match self {
            Font::Score => 36,
            Font::Banner => 50,
        }
    }
}

/// Drawing primitives supplied by the host
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: i32) -> Result<(), RenderError>;
    fn fill_ellipse(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;
    /// Size of `text` once rendered in `font`
    fn measure_text(&mut self, text: &str, font: Font) -> Result<IVec2, RenderError>;
    fn draw_text(
        &mut self,
        text: &str,
        font: Font,
        rect: Rect,
        color: Color,
    ) -> Result<(), RenderError>;
    /// Flip the finished frame onto the display
    fn present(&mut self) -> Result<(), RenderError>;
}

const FRAME_THICKNESS: i32 = 5;
const CENTER_LINE_WIDTH: i32 = 4;
const DIVIDER_HEIGHT: i32 = 2;
const PROMPT_OFFSET: i32 = 50; // Below the victory message
const PROMPT_PADDING: i32 = 10;
const PROMPT_BORDER: i32 = 2;

pub fn paddle_color(kind: PaddleKind) -> Color {
    match kind {
        PaddleKind::Player => Color::WHITE,
        PaddleKind::Ai => Color::RED,
    }
}

/// White borders around the play area, the centre line and the score divider
pub fn frame_rects(map: &GameMap) -> [Rect; 6] {
    let (w, h, s) = (map.width, map.height, map.score_area_height);
    [
        Rect::new(0, s - DIVIDER_HEIGHT, w, DIVIDER_HEIGHT),
        Rect::new(0, s, w, FRAME_THICKNESS),
        Rect::new(0, s + h - FRAME_THICKNESS, w, FRAME_THICKNESS),
        Rect::new(w / 2 - CENTER_LINE_WIDTH / 2, s, CENTER_LINE_WIDTH, h),
        Rect::new(0, s, FRAME_THICKNESS, h),
        Rect::new(w - FRAME_THICKNESS, s, FRAME_THICKNESS, h),
    ]
}

fn draw_centered<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    font: Font,
    center: IVec2,
) -> Result<(), RenderError> {
    let size = canvas.measure_text(text, font)?;
    let rect = Rect::from_center_size(center, size);
    canvas.draw_text(text, font, rect, Color::WHITE)
}

fn draw_score<C: Canvas + ?Sized>(
    canvas: &mut C,
    map: &GameMap,
    score: &Score,
) -> Result<(), RenderError> {
    let strip_y = map.score_area_height / 2;
    draw_centered(
        canvas,
        &format!("You: {}", score.player),
        Font::Score,
        IVec2::new(map.width / 4, strip_y),
    )?;
    draw_centered(
        canvas,
        &format!("Pong AI: {}", score.ai),
        Font::Score,
        IVec2::new(map.width * 3 / 4, strip_y),
    )?;

    if score.is_deuce() {
        draw_centered(canvas, "Deuce", Font::Score, IVec2::new(map.width / 2, strip_y))?;
    }

    let banner = if score.player_victory {
        Some(("You win!", map.width / 4))
    } else if score.ai_victory {
        Some(("You lose...", map.width * 3 / 4))
    } else {
        None
    };

    if let Some((message, x)) = banner {
        let middle = map.score_area_height + map.height / 2;
        draw_centered(canvas, message, Font::Banner, IVec2::new(x, middle))?;
        draw_exit_prompt(canvas, IVec2::new(map.width / 2, middle + PROMPT_OFFSET))?;
    }
    Ok(())
}

fn draw_exit_prompt<C: Canvas + ?Sized>(canvas: &mut C, center: IVec2) -> Result<(), RenderError> {
    let text = "Press ESC to exit";
    let size = canvas.measure_text(text, Font::Score)?;
    let text_rect = Rect::from_center_size(center, size);
    let panel = text_rect.inflate(PROMPT_PADDING);
    canvas.fill_rect(panel, Color::BLACK)?;
    canvas.stroke_rect(panel, Color::WHITE, PROMPT_BORDER)?;
    canvas.draw_text(text, Font::Score, text_rect, Color::WHITE)
}

/// Draw one full frame and present it
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    map: &GameMap,
    score: &Score,
    paddles: &[Paddle],
    ball: Option<&Ball>,
) -> Result<(), RenderError> {
    canvas.fill_rect(map.play_area(), Color::ROYAL_BLUE)?;
    canvas.fill_rect(map.score_area(), Color::DARK_GRAY)?;

    for rect in frame_rects(map) {
        canvas.fill_rect(rect, Color::WHITE)?;
    }

    draw_score(canvas, map, score)?;

    for paddle in paddles {
        canvas.fill_rect(paddle.rect, paddle_color(paddle.kind))?;
    }
    if let Some(ball) = ball {
        canvas.fill_ellipse(ball.rect, Color::WHITE)?;
    }

    canvas.present()
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect(Rect, Color),
    StrokeRect(Rect, Color, i32),
    FillEllipse(Rect, Color),
    Text(String, Font, Rect, Color),
    Present,
}

/// Canvas that keeps the commands of the current frame in memory.
///
/// Text is measured with a fixed glyph box: half the point size wide and
/// the point size tall.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
    pub frames: u64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text drawn since the last clear
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::FillRect(rect, color));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: i32) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::StrokeRect(rect, color, width));
        Ok(())
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::FillEllipse(rect, color));
        Ok(())
    }

    fn measure_text(&mut self, text: &str, font: Font) -> Result<IVec2, RenderError> {
        let size = font.point_size();
        Ok(IVec2::new(text.chars().count() as i32 * size / 2, size))
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: Font,
        rect: Rect,
        color: Color,
    ) -> Result<(), RenderError> {
        let command = DrawCommand::Text(text.to_string(), font, rect, color);
        self.commands.push(command);
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Present);
        self.frames += 1;
        Ok(())
    }
}
