use voxcraft_blocks::BlockTypeId;

/// What happens when a block of a given category is placed or broken.
///
/// Every block that can exist in the world currently shares [`Behavior::Plain`].
/// New categories get a variant here and an arm in [`Behavior::for_block`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Consumes one item on placement; drops itself and plays its dig sound when broken.
    Plain,
}

impl Behavior {
    /// `None` for ids that have no world behavior (air, bedrock, grass face sprites).
    pub fn for_block(id: BlockTypeId) -> Option<Behavior> {
        if id.is_placeable() {
            Some(Behavior::Plain)
        } else {
            None
        }
    }

    #[inline]
    pub fn consumes_item(self) -> bool {
        match self {
            Behavior::Plain => true,
        }
    }

    #[inline]
    pub fn drops_item(self) -> bool {
        match self {
            Behavior::Plain => true,
        }
    }
}
