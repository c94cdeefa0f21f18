//! Drag-and-drop between slots of one view.
use crate::stack::ItemStack;
use crate::store::{ContainerView, SlotStore, is_hotbar_slot};
use voxcraft_blocks::types::STACK_MAX;

/// Where a dragged stack is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// A 1-based slot of the view the drag started in.
    Slot(usize),
    /// The delete area; the stack is discarded.
    Delete,
    /// Anywhere else; the stack returns to its source.
    Nowhere,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        view: ContainerView,
        from: usize,
        stack: ItemStack,
        /// False when the source slot was left untouched (creative palettes).
        took: bool,
    },
}

impl SlotStore {
    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        !matches!(self.drag, DragState::Idle)
    }

    /// Lifts the stack in slot `n`. Palette slots hand out a copy.
    pub fn begin_drag(&mut self, view: ContainerView, n: usize) -> bool {
        if self.is_dragging() || !self.flags(view, n).selectable {
            return false;
        }
        let stack = self.get(view, n);
        if stack.is_empty() {
            return false;
        }
        let took = !view.is_infinite() || is_hotbar_slot(n);
        if took {
            self.set_slot(view, n, ItemStack::EMPTY);
        }
        self.drag = DragState::Dragging {
            view,
            from: n,
            stack,
            took,
        };
        log::debug!(target: "inventory", "drag {:?} from {:?} slot {}", stack, view, n);
        true
    }

    /// Releases the dragged stack. Returns true when a drag was in progress.
    pub fn drop_on(&mut self, target: DropTarget) -> bool {
        let DragState::Dragging {
            view,
            from,
            stack,
            took,
        } = std::mem::take(&mut self.drag)
        else {
            return false;
        };
        let target = match target {
            DropTarget::Slot(n) if !self.flags(view, n).selectable => DropTarget::Nowhere,
            t => t,
        };
        match target {
            DropTarget::Delete => {
                log::debug!(target: "inventory", "deleted {:?}", stack);
            }
            DropTarget::Nowhere => self.restore(view, from, stack, took),
            DropTarget::Slot(n) if n == from => self.restore(view, from, stack, took),
            DropTarget::Slot(n) => {
                let dst = self.get(view, n);
                if dst.is_empty() {
                    if !self.set_slot(view, n, stack) {
                        self.restore(view, from, stack, took);
                    }
                } else if dst.can_merge(&stack) {
                    let sum = dst.amount + stack.amount;
                    if sum <= STACK_MAX {
                        if !self.set_slot(view, n, ItemStack::new(stack.id, sum)) {
                            self.restore(view, from, stack, took);
                        }
                    } else if self.set_slot(view, n, ItemStack::new(stack.id, STACK_MAX)) {
                        self.restore(view, from, ItemStack::new(stack.id, sum - STACK_MAX), took);
                    } else {
                        self.restore(view, from, stack, took);
                    }
                } else if self.set_slot(view, n, stack) {
                    if took {
                        self.set_slot(view, from, dst);
                    }
                } else {
                    self.restore(view, from, stack, took);
                }
            }
        }
        true
    }

    fn restore(&mut self, view: ContainerView, from: usize, stack: ItemStack, took: bool) {
        if took {
            self.set_slot(view, from, stack);
        }
    }
}
