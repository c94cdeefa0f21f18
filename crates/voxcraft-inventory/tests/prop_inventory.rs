use proptest::prelude::*;
use voxcraft_blocks::BlockTypeId;
use voxcraft_inventory::{ContainerView, DropTarget, ItemStack, STACK_MAX, SlotStore};

#[derive(Clone, Debug)]
enum Op {
    Add(usize, u8),
    Remove(usize, u32, usize),
    QuickMove(usize, usize),
    Drop(usize, bool),
    Drag(usize, usize, usize),
}

fn view(i: usize) -> ContainerView {
    ContainerView::ALL[i % ContainerView::ALL.len()]
}

#[derive(Clone, Debug)]
enum Move {
    Drag(usize, usize),
    DragAway(usize),
    QuickMove(usize),
}

fn inventory_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        (0usize..38, 0usize..38).prop_map(|(a, b)| Move::Drag(a, b)),
        (0usize..38).prop_map(Move::DragAway),
        (0usize..38).prop_map(Move::QuickMove),
    ]
}

// A few ids so merges happen often.
fn slot_contents() -> impl Strategy<Value = Vec<(u8, u32)>> {
    prop::collection::vec((prop::sample::select(vec![1u8, 2, 3]), 0u32..=64), 36)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..4, 1u8..62).prop_map(|(v, id)| Op::Add(v, id)),
        (0usize..4, 0u32..80, 0usize..47).prop_map(|(v, a, n)| Op::Remove(v, a, n)),
        (0usize..4, 0usize..47).prop_map(|(v, n)| Op::QuickMove(v, n)),
        (0usize..10, any::<bool>()).prop_map(|(n, all)| Op::Drop(n, all)),
        (0usize..4, 0usize..47, 0usize..47).prop_map(|(v, a, b)| Op::Drag(v, a, b)),
    ]
}

proptest! {
    #[test]
    fn slots_stay_well_formed(ops in prop::collection::vec(op(), 0..200)) {
        let mut s = SlotStore::new();
        for op in ops {
            match op {
                Op::Add(v, id) => {
                    if let Some(id) = BlockTypeId::from_id(id) {
                        s.add_content(view(v), id);
                    }
                }
                Op::Remove(v, a, n) => { s.remove_content(view(v), a, n); }
                Op::QuickMove(v, n) => { s.quick_move(view(v), n); }
                Op::Drop(n, all) => { s.drop_item(ContainerView::HotBar, n, all); }
                Op::Drag(v, a, b) => {
                    if s.begin_drag(view(v), a) {
                        s.drop_on(DropTarget::Slot(b));
                    }
                }
            }
            for v in ContainerView::ALL {
                for st in s.stacks(v) {
                    prop_assert!(st.amount <= STACK_MAX);
                    prop_assert_eq!(st.is_empty(), st.id == BlockTypeId::AIR);
                }
            }
        }
    }

    #[test]
    fn remove_never_returns_more_than_held(amount in 1u32..=64, take in 0u32..100) {
        let mut s = SlotStore::new();
        s.set_slot(ContainerView::Inventory, 20, ItemStack::new(BlockTypeId::STONE, amount));
        let got = s.remove_content(ContainerView::Inventory, take, 20);
        prop_assert_eq!(got.amount, take.min(amount));
        prop_assert_eq!(s.get(ContainerView::Inventory, 20).amount, amount - take.min(amount));
    }

    #[test]
    fn inventory_moves_conserve_units(
        contents in slot_contents(),
        moves in prop::collection::vec(inventory_move(), 0..60),
    ) {
        let view = ContainerView::Inventory;
        let mut s = SlotStore::new();
        for (i, (id, amount)) in contents.into_iter().enumerate() {
            if let Some(id) = BlockTypeId::from_id(id) {
                s.set_slot(view, i + 1, ItemStack::new(id, amount));
            }
        }
        let total = s.total_units();
        for m in moves {
            match m {
                Move::Drag(a, b) => {
                    if s.begin_drag(view, a) {
                        prop_assert!(s.drop_on(DropTarget::Slot(b)));
                    }
                }
                Move::DragAway(a) => {
                    if s.begin_drag(view, a) {
                        prop_assert!(s.drop_on(DropTarget::Nowhere));
                    }
                }
                Move::QuickMove(a) => { s.quick_move(view, a); }
            }
            prop_assert!(!s.is_dragging());
            prop_assert_eq!(s.total_units(), total);
        }
    }

    #[test]
    fn added_units_come_back_out_of_one_slot(id in 1u8..62, added in 1u32..=64, extra in 0u32..40) {
        let Some(id) = BlockTypeId::from_id(id) else { return Ok(()); };
        let view = ContainerView::Inventory;
        let mut s = SlotStore::new();
        for _ in 0..added {
            prop_assert!(s.add_content(view, id));
        }
        prop_assert_eq!(s.total_units(), added);
        let got = s.remove_content(view, added + extra, 1);
        prop_assert_eq!(got, ItemStack::new(id, added));
        prop_assert!(s.get(view, 1).is_empty());
        prop_assert_eq!(s.total_units(), 0);
    }
}
