use rand::Rng;

/// Which margin beside the content column a slot sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Identity of a placement slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    pub side: Side,
    pub row: usize,
}

impl SlotId {
    pub const fn new(side: Side, row: usize) -> Self {
        Self { side, row }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub occupied: bool,
}

/// Left/right slots for every row of the canvas.
///
/// At most one live plant holds a slot at a time.
#[derive(Debug, Clone, Default)]
pub struct SlotGrid {
    slots: Vec<Slot>,
}

impl SlotGrid {
    /// One left and one right slot per `slot_height` of canvas, minimum one row
    pub fn build(canvas_height: f32, slot_height: f32) -> Self {
        let rows = ((canvas_height / slot_height).floor() as usize).max(1);
        let slots = (0..rows)
            .flat_map(|row| {
                [Side::Left, Side::Right].map(|side| Slot {
                    id: SlotId::new(side, row),
                    occupied: false,
                })
            })
            .collect();
        Self { slots }
    }

    /// Rebuild for a new canvas height, keeping slots held by `held` occupied
    pub fn rebuild(&mut self, canvas_height: f32, slot_height: f32, held: impl IntoIterator<Item = SlotId>) {
        *self = Self::build(canvas_height, slot_height);
        for id in held {
            self.mark_occupied(id);
        }
    }

    pub fn rows(&self) -> usize {
        self.slots.len() / 2
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.occupied).count()
    }

    pub fn is_occupied(&self, id: SlotId) -> bool {
        self.slots.iter().any(|s| s.id == id && s.occupied)
    }

    /// Claim a uniformly random free slot
    pub fn acquire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SlotId> {
        let free = self.free_count();
        if free == 0 {
            return None;
        }
        let pick = rng.gen_range(0..free);
        let slot = self.slots.iter_mut().filter(|s| !s.occupied).nth(pick)?;
        slot.occupied = true;
        Some(slot.id)
    }

    /// Mark a slot free; unknown slots (e.g. rows lost to a shrink) are ignored
    pub fn release(&mut self, id: SlotId) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) {
            slot.occupied = false;
        }
    }

    /// Returns false when the slot does not exist in this grid
    pub fn mark_occupied(&mut self, id: SlotId) -> bool {
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                slot.occupied = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_build_rows() {
        let grid = SlotGrid::build(1000.0, 250.0);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.slots().len(), 8);
        assert_eq!(grid.free_count(), 8);

        let tiny = SlotGrid::build(100.0, 250.0);
        assert_eq!(tiny.rows(), 1);
    }

    #[test]
    fn test_acquire_exhausts_without_duplicates() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut grid = SlotGrid::build(750.0, 250.0);
        let mut taken = HashSet::new();

        while let Some(id) = grid.acquire(&mut rng) {
            assert!(taken.insert(id), "slot {:?} handed out twice", id);
        }
        assert_eq!(taken.len(), 6);
        assert_eq!(grid.free_count(), 0);
    }

    #[test]
    fn test_release_frees_slot() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut grid = SlotGrid::build(250.0, 250.0);
        let a = grid.acquire(&mut rng).unwrap();
        let _b = grid.acquire(&mut rng).unwrap();
        assert!(grid.acquire(&mut rng).is_none());

        grid.release(a);
        assert!(!grid.is_occupied(a));
        assert_eq!(grid.acquire(&mut rng), Some(a));
    }

    #[test]
    fn test_rebuild_keeps_held_slots() {
        let mut grid = SlotGrid::build(500.0, 250.0);
        let held = [SlotId::new(Side::Right, 1), SlotId::new(Side::Left, 5)];
        grid.rebuild(1500.0, 250.0, held);

        assert_eq!(grid.rows(), 6);
        assert!(grid.is_occupied(held[0]));
        assert!(grid.is_occupied(held[1]));
        assert_eq!(grid.free_count(), 10);

        // Shrinking drops rows; releasing a vanished slot is a no-op
        grid.rebuild(250.0, 250.0, held);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.free_count(), 2);
        grid.release(held[1]);
        assert_eq!(grid.free_count(), 2);
    }
}
