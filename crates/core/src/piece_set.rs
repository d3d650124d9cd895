//! Piece set module - the current offering of unplaced pieces
//!
//! A fixed number of ordered slots, each holding a piece or empty after that
//! piece was committed. Slot positions never shift within one offering, so
//! "slot 2" keeps meaning the same piece for keyboard selection.

use arrayvec::ArrayVec;

use crate::catalog::{PieceCatalog, Shape};
use crate::grid::GridState;
use crate::layout::Layout;
use crate::rng::SimpleRng;
use crate::types::{Point, ShapeFamily, MAX_OFFER_SLOTS};

/// Stable identity of an offered piece, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

/// A piece on the staging area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub id: PieceId,
    pub family: ShapeFamily,
    pub shape: Shape,
    /// Current free position of the shape's top-left corner
    pub position: Point,
    /// Staging position the piece returns to when a placement is refused
    pub home: Point,
}

impl Piece {
    /// Put the piece back on its staging position
    pub fn reset_position(&mut self) {
        self.position = self.home;
    }
}

type Slots = ArrayVec<Option<Piece>, { MAX_OFFER_SLOTS as usize }>;

/// Ordered, fixed-capacity offering
#[derive(Debug, Clone, PartialEq)]
pub struct PieceSet {
    slots: Slots,
    next_id: u32,
}

impl PieceSet {
    /// An exhausted set with `capacity` empty slots
    ///
    /// Panics when `capacity` is zero or above [`MAX_OFFER_SLOTS`].
    pub fn new(capacity: u8) -> Self {
        assert!(
            capacity > 0 && capacity <= MAX_OFFER_SLOTS,
            "offer capacity must be in 1..={MAX_OFFER_SLOTS}, got {capacity}"
        );
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            next_id: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Fill every slot with a fresh catalog piece at its home position
    ///
    /// Panics if any slot still holds a piece: refilling would silently drop
    /// it. Check [`PieceSet::is_exhausted`] first.
    pub fn regenerate_all(&mut self, catalog: &PieceCatalog, rng: &mut SimpleRng, layout: &Layout) {
        assert!(
            self.is_exhausted(),
            "regenerate_all called while {} piece(s) are still offered",
            self.remaining()
        );
        for slot in 0..self.slots.len() {
            let (family, shape) = catalog.draw(rng);
            let piece = self.make_piece(slot, family, shape, layout);
            self.slots[slot] = Some(piece);
        }
    }

    /// Replace the whole offering with the given shapes
    ///
    /// `None` leaves a slot empty; missing trailing entries are empty too.
    /// Shapes that belong to no catalog family are tagged `Monomino`.
    pub fn replace(&mut self, shapes: &[Option<Shape>], layout: &Layout) {
        for slot in 0..self.slots.len() {
            let piece = match shapes.get(slot).copied().flatten() {
                Some(shape) => {
                    let family = family_of(&shape).unwrap_or(ShapeFamily::Monomino);
                    Some(self.make_piece(slot, family, shape, layout))
                }
                None => None,
            };
            self.slots[slot] = piece;
        }
    }

    fn make_piece(
        &mut self,
        slot: usize,
        family: ShapeFamily,
        shape: Shape,
        layout: &Layout,
    ) -> Piece {
        let id = PieceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let home = layout.home_position(slot, &shape);
        Piece {
            id,
            family,
            shape,
            position: home,
            home,
        }
    }

    /// Empty the slot holding `id`; no-op if no slot does
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        self.slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|p| p.id == id))
            .and_then(Option::take)
    }

    /// True iff every slot is empty
    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of occupied slots
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether any offered piece fits somewhere on the grid
    pub fn any_has_legal_move(&self, grid: &GridState) -> bool {
        self.pieces().any(|p| grid.has_room_for(&p.shape))
    }

    pub fn get(&self, slot: usize) -> Option<&Piece> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Piece> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// First slot whose piece has a filled cell under `point`
    pub fn slot_at(&self, point: Point, layout: &Layout) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|p| layout.hit(p.position, &p.shape, point))
        })
    }

    /// All slots, empty ones included
    pub fn slots(&self) -> &[Option<Piece>] {
        &self.slots
    }

    /// Offered pieces in slot order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots.iter().flatten()
    }

    /// Move every piece back to the home position of its slot under `layout`
    pub fn rehome(&mut self, layout: &Layout) {
        for (slot, piece) in self.slots.iter_mut().enumerate() {
            if let Some(piece) = piece {
                piece.home = layout.home_position(slot, &piece.shape);
                piece.position = piece.home;
            }
        }
    }
}

/// The catalog family a shape belongs to, if any
fn family_of(shape: &Shape) -> Option<ShapeFamily> {
    ShapeFamily::ALL
        .into_iter()
        .find(|&f| crate::catalog::variants(f).contains(shape))
}
