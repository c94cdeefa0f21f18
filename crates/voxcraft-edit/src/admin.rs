//! Two-phase place/break orchestration.
//!
//! A request is opened with `try_set`/`try_break`, the frame loop writes the
//! grid, then `finished_set`/`finished_break` commits the side effects. At most
//! one set and one break may be pending at a time.
use thiserror::Error;
use voxcraft_blocks::{BlockCatalog, BlockTypeId};
use voxcraft_geom::IVec3;
use voxcraft_inventory::{ContainerView, SlotStore};
use voxcraft_world::{TargetBlock, Terrain};

use crate::behavior::Behavior;
use crate::effects::{Effect, ItemSpawn, sound_effect};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("a set request is already pending")]
    SetPending,
    #[error("a break request is already pending")]
    BreakPending,
    #[error("no request of that kind is pending")]
    NothingPending,
    #[error("slot {slot} of {view:?} is empty")]
    EmptySlot { view: ContainerView, slot: usize },
    #[error("{0:?} has no block behavior")]
    NoBehavior(BlockTypeId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingSet {
    /// Grid-space target cell.
    pub cell: IVec3,
    pub block: BlockTypeId,
    pub view: ContainerView,
    pub slot: usize,
    behavior: Behavior,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingBreak {
    pub cell: IVec3,
    pub block: BlockTypeId,
    behavior: Behavior,
}

#[derive(Default, Debug, Clone, Copy)]
pub struct BlockAdminStats {
    pub sets: u64,
    pub breaks: u64,
    pub rejected: u64,
}

#[derive(Debug)]
pub struct BlockAdmin {
    set: Option<PendingSet>,
    brk: Option<PendingBreak>,
    rng: fastrand::Rng,
    // bumped on every committed edit
    counter: u64,
    stats: BlockAdminStats,
}

impl Default for BlockAdmin {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockAdmin {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Deterministic item impulses.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            set: None,
            brk: None,
            rng,
            counter: 0,
            stats: BlockAdminStats::default(),
        }
    }

    #[inline]
    pub fn pending_set(&self) -> Option<PendingSet> {
        self.set
    }

    #[inline]
    pub fn pending_break(&self) -> Option<PendingBreak> {
        self.brk
    }

    /// Monotonic stamp of the last committed edit; 0 before any edit.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.counter
    }

    pub fn stats(&self) -> BlockAdminStats {
        self.stats
    }

    fn reject(&mut self, e: EditError) -> EditError {
        self.stats.rejected += 1;
        log::debug!(target: "edit", "rejected: {}", e);
        e
    }

    /// Opens a placement of the block held in `slot` at grid cell `cell`.
    /// Neither the grid nor the container is touched.
    pub fn try_set(
        &mut self,
        cell: IVec3,
        store: &SlotStore,
        view: ContainerView,
        slot: usize,
    ) -> Result<PendingSet, EditError> {
        if self.set.is_some() {
            return Err(self.reject(EditError::SetPending));
        }
        let block = store.contains(view, slot);
        if block.is_air() {
            return Err(self.reject(EditError::EmptySlot { view, slot }));
        }
        let Some(behavior) = Behavior::for_block(block) else {
            return Err(self.reject(EditError::NoBehavior(block)));
        };
        let p = PendingSet {
            cell,
            block,
            view,
            slot,
            behavior,
        };
        log::debug!(target: "edit", "set pending {:?} at {:?}", block, cell);
        self.set = Some(p);
        Ok(p)
    }

    /// Opens a break of the targeted block.
    pub fn try_break(&mut self, target: TargetBlock) -> Result<PendingBreak, EditError> {
        if self.brk.is_some() {
            return Err(self.reject(EditError::BreakPending));
        }
        let Some(behavior) = Behavior::for_block(target.block) else {
            return Err(self.reject(EditError::NoBehavior(target.block)));
        };
        let p = PendingBreak {
            cell: target.cell,
            block: target.block,
            behavior,
        };
        log::debug!(target: "edit", "break pending {:?} at {:?}", target.block, target.cell);
        self.brk = Some(p);
        Ok(p)
    }

    /// Drops a pending set whose grid write did not land.
    pub fn cancel_set(&mut self) -> Option<PendingSet> {
        self.set.take()
    }

    pub fn cancel_break(&mut self) -> Option<PendingBreak> {
        self.brk.take()
    }

    fn bump(&mut self) -> u64 {
        self.counter = self.counter.wrapping_add(1).max(1);
        self.counter
    }

    /// Commits the pending set after the grid write: consumes one unit from
    /// the source slot and plays the block's sound.
    pub fn finished_set(
        &mut self,
        store: &mut SlotStore,
        catalog: &BlockCatalog,
    ) -> Result<Vec<Effect>, EditError> {
        let Some(p) = self.set.take() else {
            return Err(EditError::NothingPending);
        };
        if p.behavior.consumes_item() {
            let taken = store.remove_content(p.view, 1, p.slot);
            if taken.is_empty() {
                log::warn!(target: "edit", "placed {:?} but slot {} was already empty", p.block, p.slot);
            }
        }
        self.stats.sets += 1;
        let rev = self.bump();
        log::debug!(target: "edit", "set {:?} at {:?} rev={}", p.block, p.cell, rev);
        Ok(sound_effect(catalog.sound(p.block)).into_iter().collect())
    }

    /// Commits the pending break after the grid write: drops the block as an
    /// item above the cell and plays its sound.
    pub fn finished_break(
        &mut self,
        terrain: &Terrain,
        catalog: &BlockCatalog,
    ) -> Result<Vec<Effect>, EditError> {
        let Some(p) = self.brk.take() else {
            return Err(EditError::NothingPending);
        };
        let mut effects = Vec::with_capacity(2);
        if p.behavior.drops_item() {
            let corner = terrain.cell_to_world(p.cell);
            effects.push(Effect::SpawnItem(ItemSpawn::at_cell(
                p.block,
                corner,
                &mut self.rng,
            )));
        }
        effects.extend(sound_effect(catalog.sound(p.block)));
        self.stats.breaks += 1;
        let rev = self.bump();
        log::debug!(target: "edit", "break {:?} at {:?} rev={}", p.block, p.cell, rev);
        Ok(effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(block: BlockTypeId) -> TargetBlock {
        TargetBlock {
            cell: IVec3::new(1, 2, 3),
            block,
        }
    }

    #[test]
    fn overlapping_requests_rejected() {
        let mut a = BlockAdmin::with_seed(1);
        assert!(a.try_break(target(BlockTypeId::DIRT)).is_ok());
        assert_eq!(
            a.try_break(target(BlockTypeId::STONE)),
            Err(EditError::BreakPending)
        );
        assert_eq!(a.pending_break().map(|p| p.block), Some(BlockTypeId::DIRT));
        assert_eq!(a.stats().rejected, 1);
    }

    #[test]
    fn bedrock_has_no_behavior() {
        let mut a = BlockAdmin::with_seed(1);
        assert_eq!(
            a.try_break(target(BlockTypeId::BEDROCK)),
            Err(EditError::NoBehavior(BlockTypeId::BEDROCK))
        );
        assert!(a.pending_break().is_none());
    }

    #[test]
    fn empty_slot_cannot_be_set() {
        let mut a = BlockAdmin::with_seed(1);
        let store = SlotStore::new();
        assert_eq!(
            a.try_set(IVec3::ZERO, &store, ContainerView::HotBar, 1),
            Err(EditError::EmptySlot {
                view: ContainerView::HotBar,
                slot: 1
            })
        );
    }

    #[test]
    fn cancel_clears_pending() {
        let mut a = BlockAdmin::with_seed(1);
        a.try_break(target(BlockTypeId::DIRT)).unwrap();
        assert!(a.cancel_break().is_some());
        assert!(a.try_break(target(BlockTypeId::DIRT)).is_ok());
        assert_eq!(a.revision(), 0);
    }
}
