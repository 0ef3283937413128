use ggez::graphics::{self, Canvas, DrawMode, DrawParam, Image, Mesh, Rect, Text};
use ggez::mint::Point2;
use ggez::{Context, GameResult};
use log::warn;

use crate::game::{Cell, Game, GameConfig};

pub const BACKGROUND_COLOR: graphics::Color =
    graphics::Color::new(173.0 / 255.0, 204.0 / 255.0, 96.0 / 255.0, 1.0);
const DARK_COLOR: graphics::Color =
    graphics::Color::new(43.0 / 255.0, 51.0 / 255.0, 24.0 / 255.0, 1.0);

const FOOD_TEXTURE: &str = "/food.png";
const TITLE: &str = "Retro Snake";
const TEXT_SCALE: f32 = 40.0;
const FRAME_THICKNESS: f32 = 5.0;
/// Corner radius of a segment as a share of the cell side
const SEGMENT_ROUNDNESS: f32 = 0.25;

/// Pixel geometry of the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    cell_size: f32,
    offset: f32,
    grid_size: i32,
}

impl Layout {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cell_size: config.cell_size as f32,
            offset: config.offset as f32,
            grid_size: config.grid_size,
        }
    }

    fn board_side(&self) -> f32 {
        self.cell_size * self.grid_size as f32
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.offset + cell.x as f32 * self.cell_size,
            self.offset + cell.y as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Outline drawn just outside the board. ggez strokes along the centre of the
    /// edge, so the rectangle sits half a line width inside the outer bound.
    pub fn frame_rect(&self) -> Rect {
        let start = self.offset - FRAME_THICKNESS / 2.0;
        let side = self.board_side() + FRAME_THICKNESS;
        Rect::new(start, start, side, side)
    }

    pub fn title_position(&self) -> Point2<f32> {
        Point2 {
            x: self.offset - 5.0,
            y: 20.0,
        }
    }

    pub fn score_position(&self) -> Point2<f32> {
        Point2 {
            x: self.offset - 5.0,
            y: self.offset + self.board_side() + 10.0,
        }
    }
}

/// Draws the board, the snake, the food and the score
pub struct Board {
    layout: Layout,
    food_texture: Option<Image>,
}

impl Board {
    pub fn new(ctx: &mut Context, config: &GameConfig) -> Self {
        let food_texture = match Image::from_path(ctx, FOOD_TEXTURE) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("food texture unavailable, drawing a square instead: {}", e);
                None
            }
        };

        Self {
            layout: Layout::new(config),
            food_texture,
        }
    }

    pub fn draw(&self, ctx: &mut Context, canvas: &mut Canvas, game: &Game) -> GameResult {
        canvas.draw(
            &Mesh::new_rectangle(
                ctx,
                DrawMode::stroke(FRAME_THICKNESS),
                self.layout.frame_rect(),
                DARK_COLOR,
            )?,
            DrawParam::default(),
        );

        let mut title_text = Text::new(TITLE);
        let title = title_text.set_scale(TEXT_SCALE);
        canvas.draw(
            title,
            DrawParam::default()
                .dest(self.layout.title_position())
                .color(DARK_COLOR),
        );

        let mut score_text = Text::new(game.score().to_string());
        let score = score_text.set_scale(TEXT_SCALE);
        canvas.draw(
            score,
            DrawParam::default()
                .dest(self.layout.score_position())
                .color(DARK_COLOR),
        );

        self.draw_food(ctx, canvas, game.food().position())?;

        let radius = self.layout.cell_size * SEGMENT_ROUNDNESS;
        for cell in game.snake().body() {
            canvas.draw(
                &Mesh::new_rounded_rectangle(
                    ctx,
                    DrawMode::fill(),
                    self.layout.cell_rect(*cell),
                    radius,
                    DARK_COLOR,
                )?,
                DrawParam::default(),
            );
        }

        Ok(())
    }

    fn draw_food(&self, ctx: &mut Context, canvas: &mut Canvas, position: Cell) -> GameResult {
        let rect = self.layout.cell_rect(position);

        match &self.food_texture {
            Some(texture) => {
                let scale_x = rect.w / texture.width() as f32;
                let scale_y = rect.h / texture.height() as f32;
                canvas.draw(
                    texture,
                    DrawParam::default()
                        .dest(Point2 { x: rect.x, y: rect.y })
                        .scale([scale_x, scale_y]),
                );
            }
            None => {
                canvas.draw(
                    &Mesh::new_rounded_rectangle(
                        ctx,
                        DrawMode::fill(),
                        rect,
                        rect.w * SEGMENT_ROUNDNESS,
                        graphics::Color::RED,
                    )?,
                    DrawParam::default(),
                );
            }
        }

        Ok(())
    }
}
