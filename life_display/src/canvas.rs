// canvas.rs - Pixel layout of the cell grid and pointer-to-cell mapping

use egui::{Pos2, Rect, Vec2, pos2};

/// 1px gutter between cells; grid lines live in it
const GRID_GAP: f32 = 1.0;

/// Fixed layout: each axis spans `(cell_size + 1) * dimension + 1` pixels,
/// one gutter ahead of every cell plus a closing border line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCanvas {
    pub cell_size: f32,
    pub width: u32,
    pub height: u32,
}

impl CellCanvas {
    pub fn new(cell_size: f32, width: u32, height: u32) -> Self {
        CellCanvas {
            cell_size,
            width,
            height,
        }
    }

    /// Distance between two grid lines: one cell plus its gutter.
    pub fn step(&self) -> f32 {
        self.cell_size + GRID_GAP
    }

    /// Full canvas extent in canvas pixels.
    pub fn size(&self) -> Vec2 {
        Vec2::new(
            self.step() * self.width as f32 + GRID_GAP,
            self.step() * self.height as f32 + GRID_GAP,
        )
    }

    /// Fill rect of cell (`row`;`col`), inset past its gutter.
    pub fn cell_rect(&self, origin: Pos2, row: u32, col: u32) -> Rect {
        Rect::from_min_size(
            pos2(
                origin.x + col as f32 * self.step() + GRID_GAP,
                origin.y + row as f32 * self.step() + GRID_GAP,
            ),
            Vec2::splat(self.cell_size),
        )
    }

    /// Maps a pointer position inside `painted` to a (row, col).
    ///
    /// Scales from on-screen extent to canvas extent first, then
    /// floor-divides by the cell step and clamps at the far edges.
    pub fn hit_test(&self, pos: Pos2, painted: Rect) -> (u32, u32) {
        let size = self.size();
        let scale_x = size.x / painted.width();
        let scale_y = size.y / painted.height();

        let canvas_left = (pos.x - painted.left()) * scale_x;
        let canvas_top = (pos.y - painted.top()) * scale_y;

        let row = ((canvas_top / self.step()).floor() as u32).min(self.height - 1);
        let col = ((canvas_left / self.step()).floor() as u32).min(self.width - 1);
        (row, col)
    }
}
