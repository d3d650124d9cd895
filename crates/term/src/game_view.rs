//! GameView: a [`Renderer`] that draws into a terminal framebuffer.
//!
//! This module is pure (no I/O). The engine drives it through `present`; the
//! caller then flushes [`GameView::framebuffer_mut`] with a
//! [`TerminalRenderer`](crate::renderer::TerminalRenderer).
//!
//! Surface units map 1:1 onto terminal characters, so the layout's grid
//! origin is the first character of cell (0, 0) and the border sits one
//! character outside it.

use crate::core::{GridState, Layout, Piece};
use crate::engine::{QuizPrompt, Renderer, StatusView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::ShapeFamily;

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SELECTED_BG: Rgb = Rgb::new(70, 70, 95);

/// Framebuffer-backed game renderer.
pub struct GameView {
    fb: FrameBuffer,
}

impl GameView {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.fb.resize(width, height);
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Fill one grid-cell-sized block whose top-left is at surface `(x, y)`.
    fn fill_block(&mut self, x: i32, y: i32, layout: &Layout, ch: char, style: CellStyle) {
        let cell = layout.cell();
        let (w, h) = (cell.width as i32, cell.height as i32);
        for dy in 0..h {
            for dx in 0..w {
                let (px, py) = (x + dx, y + dy);
                if px >= 0 && py >= 0 && px <= u16::MAX as i32 && py <= u16::MAX as i32 {
                    self.fb.put_char(px as u16, py as u16, ch, style);
                }
            }
        }
    }

    fn draw_quiz(&mut self, prompt: &QuizPrompt) {
        let width = self.fb.width().saturating_sub(4).min(60);
        if width < 12 {
            return;
        }
        let inner = (width - 4) as usize;
        let question = wrap(&prompt.question, inner);
        let height = (question.len() + prompt.choices.len() + 5) as u16;

        let x = (self.fb.width() - width) / 2;
        let y = self.fb.height().saturating_sub(height) / 2;
        let style = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(20, 20, 60));

        self.fb.fill_rect(x, y, width, height, ' ', style);
        self.fb.draw_box(x, y, width, height, style.bold());

        let mut row = y + 1;
        for line in &question {
            self.fb.put_str(x + 2, row, line, style.bold());
            row += 1;
        }
        row += 1;
        for (i, choice) in prompt.choices.iter().enumerate() {
            let end = self.fb.put_u32(x + 2, row, i as u32 + 1, style.bold());
            let end = self.fb.put_str(end, row, ") ", style);
            let room = (x + width - 2).saturating_sub(end) as usize;
            let label: String = choice.chars().take(room).collect();
            self.fb.put_str(end, row, &label, style);
            row += 1;
        }
        self.fb
            .put_str_centered(x, row + 1, width, "press a number to answer", style.dim());
    }
}

impl Renderer for GameView {
    fn clear(&mut self) {
        self.fb
            .clear(CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND).into_cell(' '));
    }

    fn draw_grid(&mut self, grid: &GridState, layout: &Layout) {
        let origin = layout.grid_origin();
        let extent = layout.grid_extent();
        let (ox, oy) = (origin.x as i32, origin.y as i32);

        let border = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
        if ox >= 1 && oy >= 1 {
            self.fb.draw_box(
                (ox - 1) as u16,
                (oy - 1) as u16,
                extent.width as u16 + 2,
                extent.height as u16 + 2,
                border,
            );
        }

        let filled = CellStyle::new(Rgb::new(120, 200, 240), BOARD_BG).bold();
        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        let cell = layout.cell();
        let n = grid.size() as i32;
        for row in 0..n {
            for col in 0..n {
                let x = ox + col * cell.width as i32;
                let y = oy + row * cell.height as i32;
                if grid.is_occupied(row, col) {
                    self.fill_block(x, y, layout, '█', filled);
                } else {
                    self.fill_block(x, y, layout, ' ', empty);
                    if x >= 0 && y >= 0 {
                        self.fb.put_char(x as u16, y as u16, '·', empty);
                    }
                }
            }
        }
    }

    fn draw_piece(&mut self, piece: &Piece, layout: &Layout, selected: bool) {
        let cell = layout.cell();
        let x0 = piece.position.x.round() as i32;
        let y0 = piece.position.y.round() as i32;
        let bg = if selected { SELECTED_BG } else { BACKGROUND };
        let mut style = CellStyle::new(family_color(piece.family), bg);
        if selected {
            style = style.bold();
        }
        for (r, c) in piece.shape.cells() {
            let x = x0 + c as i32 * cell.width as i32;
            let y = y0 + r as i32 * cell.height as i32;
            self.fill_block(x, y, layout, '█', style);
        }
    }

    fn draw_status(&mut self, status: &StatusView<'_>, layout: &Layout) {
        let origin = layout.grid_origin();
        let extent = layout.grid_extent();
        let label = CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);

        let y = (origin.y as u16).saturating_sub(2);
        let mut x = (origin.x - 1.0).max(0.0) as u16;
        x = self.fb.put_str(x, y, "SCORE ", label);
        x = self.fb.put_u32(x, y, status.score, value);
        x = self.fb.put_str(x, y, "  PLACED ", label);
        self.fb.put_u32(x, y, status.placements, value);

        if status.game_over {
            let mid = (origin.y + extent.height / 2.0) as u16;
            let style = CellStyle::new(Rgb::new(255, 255, 255), BACKGROUND).bold();
            let w = extent.width as u16 + 2;
            let gx = (origin.x - 1.0).max(0.0) as u16;
            self.fb.put_str_centered(gx, mid, w, " GAME OVER ", style);
            self.fb
                .put_str_centered(gx, mid + 1, w, " r: new game ", style.dim());
        }

        if let Some(prompt) = status.quiz {
            self.draw_quiz(prompt);
        }
    }
}

fn family_color(family: ShapeFamily) -> Rgb {
    match family {
        ShapeFamily::Monomino => Rgb::new(220, 220, 220),
        ShapeFamily::Domino => Rgb::new(180, 140, 100),
        ShapeFamily::TrominoI | ShapeFamily::TrominoL => Rgb::new(140, 200, 120),
        ShapeFamily::TetrominoI => Rgb::new(80, 220, 220),
        ShapeFamily::TetrominoO => Rgb::new(240, 220, 80),
        ShapeFamily::TetrominoT => Rgb::new(200, 120, 220),
        ShapeFamily::TetrominoS => Rgb::new(100, 220, 120),
        ShapeFamily::TetrominoZ => Rgb::new(220, 80, 80),
        ShapeFamily::TetrominoJ => Rgb::new(80, 120, 220),
        ShapeFamily::TetrominoL => Rgb::new(255, 165, 0),
        ShapeFamily::PentominoI => Rgb::new(60, 180, 255),
        ShapeFamily::Rect2x3 => Rgb::new(230, 120, 170),
        ShapeFamily::Square3 => Rgb::new(255, 120, 90),
        ShapeFamily::CornerL => Rgb::new(150, 110, 240),
    }
}

/// Greedy word wrap; words longer than `width` are cut.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let word: String = word.chars().take(width).collect();
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
