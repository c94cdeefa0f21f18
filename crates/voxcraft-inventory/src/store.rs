use std::ops::RangeInclusive;

use voxcraft_blocks::BlockTypeId;
use voxcraft_blocks::types::STACK_MAX;

use crate::drag::DragState;
use crate::palette;
use crate::stack::{ItemStack, SlotFlags};

pub const HOTBAR_SLOTS: usize = 9;
pub const MAIN_SLOTS: usize = 27;
pub const PALETTE_SLOTS: usize = 36;

/// A container as seen by the UI: a numbered slot range over the shared store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerView {
    HotBar,
    Inventory,
    /// Terrain palette, creative tab 0.
    CreativeTerrain,
    /// Clay and wool palette, creative tab 1.
    CreativeColors,
}

impl ContainerView {
    pub const ALL: [ContainerView; 4] = [
        ContainerView::HotBar,
        ContainerView::Inventory,
        ContainerView::CreativeTerrain,
        ContainerView::CreativeColors,
    ];

    #[inline]
    pub fn len(self) -> usize {
        match self {
            ContainerView::HotBar => HOTBAR_SLOTS,
            ContainerView::Inventory => HOTBAR_SLOTS + MAIN_SLOTS,
            ContainerView::CreativeTerrain | ContainerView::CreativeColors => {
                HOTBAR_SLOTS + PALETTE_SLOTS
            }
        }
    }

    /// Creative palettes hand out items without being depleted.
    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(
            self,
            ContainerView::CreativeTerrain | ContainerView::CreativeColors
        )
    }

    #[inline]
    pub fn contains_slot(self, n: usize) -> bool {
        (1..=self.len()).contains(&n)
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// True for the nine slots every view shares.
#[inline]
pub fn is_hotbar_slot(n: usize) -> bool {
    (1..=HOTBAR_SLOTS).contains(&n)
}

/// Single backing store for every container view.
#[derive(Clone, Debug)]
pub struct SlotStore {
    hotbar: [ItemStack; HOTBAR_SLOTS],
    main: [ItemStack; MAIN_SLOTS],
    palettes: [[ItemStack; PALETTE_SLOTS]; 2],
    flags: [Vec<SlotFlags>; 4],
    selected: usize,
    pub(crate) drag: DragState,
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotStore {
    /// Empty hotbar and inventory with both creative palettes filled.
    pub fn new() -> Self {
        let flags = ContainerView::ALL.map(|v| vec![SlotFlags::default(); v.len()]);
        Self {
            hotbar: [ItemStack::EMPTY; HOTBAR_SLOTS],
            main: [ItemStack::EMPTY; MAIN_SLOTS],
            palettes: [
                palette::fill(palette::TERRAIN),
                palette::fill(palette::COLORS),
            ],
            flags,
            selected: 1,
            drag: DragState::Idle,
        }
    }

    fn slot_ref(&self, view: ContainerView, n: usize) -> Option<&ItemStack> {
        if !view.contains_slot(n) {
            return None;
        }
        if is_hotbar_slot(n) {
            return self.hotbar.get(n - 1);
        }
        let i = n - HOTBAR_SLOTS - 1;
        match view {
            ContainerView::HotBar => None,
            ContainerView::Inventory => self.main.get(i),
            ContainerView::CreativeTerrain => self.palettes[0].get(i),
            ContainerView::CreativeColors => self.palettes[1].get(i),
        }
    }

    fn slot_mut(&mut self, view: ContainerView, n: usize) -> Option<&mut ItemStack> {
        if !view.contains_slot(n) {
            return None;
        }
        if is_hotbar_slot(n) {
            return self.hotbar.get_mut(n - 1);
        }
        let i = n - HOTBAR_SLOTS - 1;
        match view {
            ContainerView::HotBar => None,
            ContainerView::Inventory => self.main.get_mut(i),
            ContainerView::CreativeTerrain => self.palettes[0].get_mut(i),
            ContainerView::CreativeColors => self.palettes[1].get_mut(i),
        }
    }

    /// Stack in slot `n` of `view`; `EMPTY` for invalid slots.
    #[inline]
    pub fn get(&self, view: ContainerView, n: usize) -> ItemStack {
        self.slot_ref(view, n).copied().unwrap_or(ItemStack::EMPTY)
    }

    /// Block id held by slot `n`, `AIR` when empty or invalid.
    #[inline]
    pub fn contains(&self, view: ContainerView, n: usize) -> BlockTypeId {
        self.get(view, n).id
    }

    /// Writes a slot. Infinite views only accept writes to the shared hotbar slots.
    pub fn set_slot(&mut self, view: ContainerView, n: usize, stack: ItemStack) -> bool {
        if view.is_infinite() && !is_hotbar_slot(n) {
            return false;
        }
        match self.slot_mut(view, n) {
            Some(s) => {
                *s = ItemStack::new(stack.id, stack.amount);
                true
            }
            None => false,
        }
    }

    pub fn flags(&self, view: ContainerView, n: usize) -> SlotFlags {
        if !view.contains_slot(n) {
            return SlotFlags {
                selectable: false,
                quick_movable: false,
            };
        }
        self.flags[view.index()][n - 1]
    }

    pub fn set_flags(&mut self, view: ContainerView, n: usize, flags: SlotFlags) {
        if view.contains_slot(n) {
            self.flags[view.index()][n - 1] = flags;
        }
    }

    fn add_range(view: ContainerView) -> RangeInclusive<usize> {
        match view {
            ContainerView::Inventory => 1..=view.len(),
            _ => 1..=HOTBAR_SLOTS,
        }
    }

    /// Stores one unit of `id`, topping up a matching stack before using an empty slot.
    /// Returns false when nothing could take it.
    pub fn add_content(&mut self, view: ContainerView, id: BlockTypeId) -> bool {
        if id.is_air() {
            return false;
        }
        let unit = ItemStack::new(id, 1);
        let range = Self::add_range(view);
        let target = range
            .clone()
            .find(|&n| {
                let s = self.get(view, n);
                s.can_merge(&unit) && !s.is_full()
            })
            .or_else(|| range.clone().find(|&n| self.get(view, n).is_empty()));
        let Some(n) = target else {
            log::debug!(target: "inventory", "{:?} full; cannot add {:?}", view, id);
            return false;
        };
        let cur = self.get(view, n);
        self.set_slot(view, n, ItemStack::new(id, cur.amount + 1))
    }

    /// Removes up to `amount` from slot `n` and returns what was taken.
    /// Empty or invalid slots and creative palette slots yield `EMPTY`.
    pub fn remove_content(&mut self, view: ContainerView, amount: u32, n: usize) -> ItemStack {
        if amount == 0 || (view.is_infinite() && !is_hotbar_slot(n)) {
            return ItemStack::EMPTY;
        }
        let have = self.get(view, n);
        if have.is_empty() {
            return ItemStack::EMPTY;
        }
        if !have.id.is_stackable() {
            self.set_slot(view, n, ItemStack::EMPTY);
            return ItemStack::new(have.id, 1);
        }
        if have.amount > amount {
            self.set_slot(view, n, ItemStack::new(have.id, have.amount - amount));
            ItemStack::new(have.id, amount)
        } else {
            self.set_slot(view, n, ItemStack::EMPTY);
            have
        }
    }

    /// Shift-click: sends slot `n` to the other region of `view`.
    /// Returns true when any slot changed.
    pub fn quick_move(&mut self, view: ContainerView, n: usize) -> bool {
        let src = self.get(view, n);
        if src.is_empty() {
            return false;
        }
        match view {
            ContainerView::HotBar => false,
            ContainerView::Inventory => self.quick_move_inventory(n, src),
            ContainerView::CreativeTerrain | ContainerView::CreativeColors => {
                self.quick_move_creative(view, n, src)
            }
        }
    }

    fn quick_move_inventory(&mut self, n: usize, src: ItemStack) -> bool {
        let view = ContainerView::Inventory;
        let region = if is_hotbar_slot(n) {
            HOTBAR_SLOTS + 1..=view.len()
        } else {
            1..=HOTBAR_SLOTS
        };
        let mut left = src.amount;
        for t in region.clone() {
            if left == 0 {
                break;
            }
            if !self.flags(view, t).quick_movable {
                continue;
            }
            let dst = self.get(view, t);
            if dst.can_merge(&src) && !dst.is_full() {
                let moved = left.min(STACK_MAX - dst.amount);
                self.set_slot(view, t, ItemStack::new(src.id, dst.amount + moved));
                left -= moved;
            }
        }
        if left > 0 {
            let empty = region
                .clone()
                .find(|&t| self.flags(view, t).quick_movable && self.get(view, t).is_empty());
            if let Some(t) = empty {
                self.set_slot(view, t, ItemStack::new(src.id, left));
                left = 0;
            }
        }
        self.set_slot(view, n, ItemStack::new(src.id, left));
        let moved = left != src.amount;
        log::debug!(target: "inventory", "quick-move slot {} ({:?}) moved={} left={}", n, src.id, moved, left);
        moved
    }

    fn quick_move_creative(&mut self, view: ContainerView, n: usize, src: ItemStack) -> bool {
        if is_hotbar_slot(n) {
            return self.set_slot(view, n, ItemStack::EMPTY);
        }
        let target = (1..=HOTBAR_SLOTS).find(|&t| {
            let dst = self.get(view, t);
            self.flags(view, t).quick_movable
                && (dst.is_empty() || (dst.can_merge(&src) && !dst.is_full()))
        });
        match target {
            Some(t) => self.set_slot(view, t, ItemStack::new(src.id, STACK_MAX)),
            None => false,
        }
    }

    /// Drop-key on slot `n`: one unit, or the whole stack with `all`.
    /// Only the hotbar view drops; other views ignore the key.
    pub fn drop_item(&mut self, view: ContainerView, n: usize, all: bool) -> ItemStack {
        if view != ContainerView::HotBar || !is_hotbar_slot(n) {
            return ItemStack::EMPTY;
        }
        let amount = if all { STACK_MAX } else { 1 };
        self.remove_content(view, amount, n)
    }

    /// Selected hotbar slot, 1..=9.
    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn selected_stack(&self) -> ItemStack {
        self.get(ContainerView::HotBar, self.selected)
    }

    /// Selects hotbar slot `n`; returns whether it holds anything.
    /// Out-of-range numbers change nothing and return false.
    pub fn select(&mut self, n: usize) -> bool {
        if !is_hotbar_slot(n) {
            return false;
        }
        self.selected = n;
        !self.selected_stack().is_empty()
    }

    /// Moves the selection by `delta`, wrapping between 1 and 9.
    pub fn scroll(&mut self, delta: i32) -> usize {
        let len = HOTBAR_SLOTS as i32;
        let zero_based = (self.selected as i32 - 1 + delta).rem_euclid(len);
        self.selected = zero_based as usize + 1;
        self.selected
    }

    /// Units held across hotbar and main inventory.
    pub fn total_units(&self) -> u32 {
        self.hotbar
            .iter()
            .chain(self.main.iter())
            .map(|s| s.amount)
            .sum()
    }

    /// Stacks visible in `view`, in slot order.
    pub fn stacks(&self, view: ContainerView) -> Vec<ItemStack> {
        (1..=view.len()).map(|n| self.get(view, n)).collect()
    }
}
