//! Catalog module - polyomino shapes and family-balanced random selection
//!
//! Shapes are small immutable bitmasks (at most 8x8, origin top-left) built at
//! compile time from row patterns. The catalog groups them into families of
//! orientation variants and draws in two stages: a family first, uniformly,
//! then one of its variants, uniformly. A family with four orientations is
//! therefore offered exactly as often as a family with one.

use crate::rng::SimpleRng;
use crate::types::{ShapeFamily, MAX_SHAPE_DIM};

/// Bit stride of one shape row
const STRIDE: usize = MAX_SHAPE_DIM as usize;

/// Immutable 2-D boolean matrix describing which cells of a bounding box a
/// piece occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    /// Row-major bits, `row * STRIDE + col`
    bits: u64,
}

impl Shape {
    /// Build a shape from row patterns, `#` filled and `.` empty
    ///
    /// Panics (at compile time when used in a const) on ragged, empty,
    /// oversized or all-empty patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_core::Shape;
    ///
    /// const CORNER: Shape = Shape::parse(&["#.", "##"]);
    /// assert_eq!(CORNER.rows(), 2);
    /// assert_eq!(CORNER.cols(), 2);
    /// assert_eq!(CORNER.cell_count(), 3);
    /// assert!(!CORNER.is_filled(0, 1));
    /// ```
    pub const fn parse(pattern: &[&str]) -> Shape {
        let rows = pattern.len();
        assert!(rows > 0 && rows <= STRIDE, "shape row count out of range");
        let cols = pattern[0].len();
        assert!(cols > 0 && cols <= STRIDE, "shape column count out of range");

        let mut bits = 0u64;
        let mut r = 0;
        while r < rows {
            let row = pattern[r].as_bytes();
            assert!(row.len() == cols, "ragged shape pattern");
            let mut c = 0;
            while c < cols {
                match row[c] {
                    b'#' => bits |= 1u64 << (r * STRIDE + c),
                    b'.' => {}
                    _ => panic!("shape patterns use only '#' and '.'"),
                }
                c += 1;
            }
            r += 1;
        }
        assert!(bits != 0, "shape must fill at least one cell");

        Shape {
            rows: rows as u8,
            cols: cols as u8,
            bits,
        }
    }

    /// Build a shape from boolean rows
    ///
    /// Returns `None` for empty, ragged or oversized input, or when no cell is
    /// filled.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Shape> {
        if rows.is_empty() || rows.len() > STRIDE {
            return None;
        }
        let cols = rows[0].as_ref().len();
        if cols == 0 || cols > STRIDE {
            return None;
        }

        let mut bits = 0u64;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return None;
            }
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    bits |= 1u64 << (r * STRIDE + c);
                }
            }
        }
        if bits == 0 {
            return None;
        }

        Some(Shape {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) of the bounding box is filled
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.rows
            && col < self.cols
            && self.bits & (1u64 << (row as usize * STRIDE + col as usize)) != 0
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Filled cells as `(row, col)` offsets from the shape origin, row-major
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).filter_map(move |c| self.is_filled(r, c).then_some((r, c)))
        })
    }
}

const MONOMINO: [Shape; 1] = [Shape::parse(&["#"])];

const DOMINO: [Shape; 2] = [Shape::parse(&["##"]), Shape::parse(&["#", "#"])];

const TROMINO_I: [Shape; 2] = [Shape::parse(&["###"]), Shape::parse(&["#", "#", "#"])];

const TROMINO_L: [Shape; 4] = [
    Shape::parse(&["#.", "##"]),
    Shape::parse(&["##", "#."]),
    Shape::parse(&["##", ".#"]),
    Shape::parse(&[".#", "##"]),
];

const TETROMINO_I: [Shape; 2] = [
    Shape::parse(&["####"]),
    Shape::parse(&["#", "#", "#", "#"]),
];

const TETROMINO_O: [Shape; 1] = [Shape::parse(&["##", "##"])];

const TETROMINO_T: [Shape; 4] = [
    Shape::parse(&["###", ".#."]),
    Shape::parse(&[".#", "##", ".#"]),
    Shape::parse(&[".#.", "###"]),
    Shape::parse(&["#.", "##", "#."]),
];

const TETROMINO_S: [Shape; 2] = [
    Shape::parse(&[".##", "##."]),
    Shape::parse(&["#.", "##", ".#"]),
];

const TETROMINO_Z: [Shape; 2] = [
    Shape::parse(&["##.", ".##"]),
    Shape::parse(&[".#", "##", "#."]),
];

const TETROMINO_J: [Shape; 4] = [
    Shape::parse(&["#..", "###"]),
    Shape::parse(&["##", "#.", "#."]),
    Shape::parse(&["###", "..#"]),
    Shape::parse(&[".#", ".#", "##"]),
];

const TETROMINO_L: [Shape; 4] = [
    Shape::parse(&["..#", "###"]),
    Shape::parse(&["#.", "#.", "##"]),
    Shape::parse(&["###", "#.."]),
    Shape::parse(&["##", ".#", ".#"]),
];

const PENTOMINO_I: [Shape; 2] = [
    Shape::parse(&["#####"]),
    Shape::parse(&["#", "#", "#", "#", "#"]),
];

const RECT_2X3: [Shape; 2] = [
    Shape::parse(&["###", "###"]),
    Shape::parse(&["##", "##", "##"]),
];

const SQUARE_3: [Shape; 1] = [Shape::parse(&["###", "###", "###"])];

const CORNER_L: [Shape; 4] = [
    Shape::parse(&["#..", "#..", "###"]),
    Shape::parse(&["###", "#..", "#.."]),
    Shape::parse(&["###", "..#", "..#"]),
    Shape::parse(&["..#", "..#", "###"]),
];

/// Orientation variants of a family, in a fixed order
pub fn variants(family: ShapeFamily) -> &'static [Shape] {
    match family {
        ShapeFamily::Monomino => &MONOMINO,
        ShapeFamily::Domino => &DOMINO,
        ShapeFamily::TrominoI => &TROMINO_I,
        ShapeFamily::TrominoL => &TROMINO_L,
        ShapeFamily::TetrominoI => &TETROMINO_I,
        ShapeFamily::TetrominoO => &TETROMINO_O,
        ShapeFamily::TetrominoT => &TETROMINO_T,
        ShapeFamily::TetrominoS => &TETROMINO_S,
        ShapeFamily::TetrominoZ => &TETROMINO_Z,
        ShapeFamily::TetrominoJ => &TETROMINO_J,
        ShapeFamily::TetrominoL => &TETROMINO_L,
        ShapeFamily::PentominoI => &PENTOMINO_I,
        ShapeFamily::Rect2x3 => &RECT_2X3,
        ShapeFamily::Square3 => &SQUARE_3,
        ShapeFamily::CornerL => &CORNER_L,
    }
}

/// Fixed set of shape families the offering is drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    families: Vec<ShapeFamily>,
}

impl PieceCatalog {
    /// Catalog over the given families; `None` when the list is empty
    pub fn new(families: &[ShapeFamily]) -> Option<Self> {
        if families.is_empty() {
            return None;
        }
        Some(Self {
            families: families.to_vec(),
        })
    }

    /// Catalog over every family
    pub fn standard() -> Self {
        Self {
            families: ShapeFamily::ALL.to_vec(),
        }
    }

    pub fn families(&self) -> &[ShapeFamily] {
        &self.families
    }

    /// Draw a family uniformly, then one of its variants uniformly
    pub fn draw(&self, rng: &mut SimpleRng) -> (ShapeFamily, Shape) {
        let family = *rng.pick(&self.families);
        let shape = *rng.pick(variants(family));
        (family, shape)
    }

    /// Two-stage random shape
    pub fn random_shape(&self, rng: &mut SimpleRng) -> Shape {
        self.draw(rng).1
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
