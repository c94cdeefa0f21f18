use voxcraft_blocks::BlockTypeId;
use voxcraft_blocks::types::STACK_MAX;

/// `(id, amount)` held by a slot. An empty stack is always `(AIR, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemStack {
    pub id: BlockTypeId,
    pub amount: u32,
}

impl ItemStack {
    pub const EMPTY: ItemStack = ItemStack {
        id: BlockTypeId::AIR,
        amount: 0,
    };

    /// Normalizes air or zero amounts to `EMPTY` and caps at `STACK_MAX`.
    #[inline]
    pub fn new(id: BlockTypeId, amount: u32) -> Self {
        if id.is_air() || amount == 0 {
            Self::EMPTY
        } else {
            Self {
                id,
                amount: amount.min(STACK_MAX),
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.amount >= STACK_MAX
    }

    /// True when `other` could be merged into this stack.
    #[inline]
    pub fn can_merge(&self, other: &ItemStack) -> bool {
        !self.is_empty() && self.id == other.id && self.id.is_stackable()
    }
}

/// Per-view slot behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotFlags {
    /// Hovering a non-selectable slot counts as hovering nothing.
    pub selectable: bool,
    /// Quick-move skips slots without this flag.
    pub quick_movable: bool,
}

impl Default for SlotFlags {
    fn default() -> Self {
        Self {
            selectable: true,
            quick_movable: true,
        }
    }
}
