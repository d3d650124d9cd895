//! Layout module - surface geometry shared by input handling and rendering
//!
//! Everything here is in surface units. The grid sits horizontally centred
//! with its top edge at 20% of the surface height; offered pieces wait in a
//! staging strip one row below it, spread over the middle 60% of the width.

use crate::catalog::Shape;
use crate::types::{Point, Size};

/// Fraction of the surface height above the grid
const GRID_TOP_FRACTION: f32 = 0.2;

/// Fraction of the surface width shared by the staging slots
const STAGING_WIDTH_FRACTION: f32 = 0.6;

/// Surface geometry for one grid/offering configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    surface: Size,
    cell: Size,
    grid_size: u8,
    slots: u8,
    grid_origin: Point,
}

impl Layout {
    /// Compute the layout for a surface
    ///
    /// `cell` is the size of one grid cell in surface units.
    pub fn new(surface: Size, cell: Size, grid_size: u8, slots: u8) -> Self {
        let grid_w = grid_size as f32 * cell.width;
        let grid_origin = Point::new(
            ((surface.width - grid_w) / 2.0).max(0.0).floor(),
            (surface.height * GRID_TOP_FRACTION).floor(),
        );
        Self {
            surface,
            cell,
            grid_size,
            slots,
            grid_origin,
        }
    }

    /// Same cell size and counts, new surface
    pub fn resized(&self, surface: Size) -> Self {
        Self::new(surface, self.cell, self.grid_size, self.slots)
    }

    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn cell(&self) -> Size {
        self.cell
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    pub fn slots(&self) -> u8 {
        self.slots
    }

    /// Top-left corner of grid cell (0, 0)
    pub fn grid_origin(&self) -> Point {
        self.grid_origin
    }

    /// Grid extent in surface units
    pub fn grid_extent(&self) -> Size {
        Size::new(
            self.grid_size as f32 * self.cell.width,
            self.grid_size as f32 * self.cell.height,
        )
    }

    /// Bounding box of a shape in surface units
    pub fn shape_extent(&self, shape: &Shape) -> Size {
        Size::new(
            shape.cols() as f32 * self.cell.width,
            shape.rows() as f32 * self.cell.height,
        )
    }

    /// Top of the staging strip
    pub fn staging_top(&self) -> f32 {
        self.grid_origin.y + self.grid_extent().height + self.cell.height
    }

    /// Home position of a piece offered in `slot`
    ///
    /// The piece is centred in its slot and kept on the surface.
    pub fn home_position(&self, slot: usize, shape: &Shape) -> Point {
        let slots = self.slots.max(1) as f32;
        let spacing = self.cell.width;
        let area_w = self.surface.width * STAGING_WIDTH_FRACTION;
        let slot_w = ((area_w - (slots - 1.0) * spacing) / slots).max(0.0);
        let total_w = slots * slot_w + (slots - 1.0) * spacing;
        let start_x = (self.surface.width - total_w) / 2.0;

        let extent = self.shape_extent(shape);
        let x = start_x + slot as f32 * (slot_w + spacing) + (slot_w - extent.width) / 2.0;
        let home = Point::new(x.floor(), self.staging_top());
        self.clamp(home, shape)
    }

    /// Nearest grid anchor `(row, col)` for a free position
    ///
    /// Rounds to the nearest cell on each axis (`f32::round`), so the result
    /// does not depend on the direction the piece arrived from.
    pub fn snap(&self, position: Point) -> (i32, i32) {
        let col = ((position.x - self.grid_origin.x) / self.cell.width).round() as i32;
        let row = ((position.y - self.grid_origin.y) / self.cell.height).round() as i32;
        (row, col)
    }

    /// Surface position of a grid anchor
    pub fn anchor_position(&self, row: i32, col: i32) -> Point {
        Point::new(
            self.grid_origin.x + col as f32 * self.cell.width,
            self.grid_origin.y + row as f32 * self.cell.height,
        )
    }

    /// Keep a piece's bounding box inside the surface
    pub fn clamp(&self, position: Point, shape: &Shape) -> Point {
        let extent = self.shape_extent(shape);
        let max_x = (self.surface.width - extent.width).max(0.0);
        let max_y = (self.surface.height - extent.height).max(0.0);
        Point::new(position.x.min(max_x).max(0.0), position.y.min(max_y).max(0.0))
    }

    /// Whether `point` lies on a filled cell of a piece at `position`
    pub fn hit(&self, position: Point, shape: &Shape, point: Point) -> bool {
        let local = point - position;
        if local.x < 0.0 || local.y < 0.0 {
            return false;
        }
        let col = (local.x / self.cell.width).floor();
        let row = (local.y / self.cell.height).floor();
        if col >= shape.cols() as f32 || row >= shape.rows() as f32 {
            return false;
        }
        shape.is_filled(row as u8, col as u8)
    }
}
