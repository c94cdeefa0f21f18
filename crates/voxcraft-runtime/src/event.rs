use hashbrown::HashMap;
use voxcraft_blocks::{BlockTypeId, DigSound};
use voxcraft_edit::{EditError, ItemId};
use voxcraft_geom::IVec3;
use voxcraft_inventory::ItemStack;
use voxcraft_mesh_cpu::MeshCounts;
use voxcraft_world::{TargetBlock, ViewWindow};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // Player
    TargetChanged { target: Option<TargetBlock> },
    HotbarSelected { slot: usize, holding: BlockTypeId },
    StackDropped { stack: ItemStack },
    FluidContact { block: BlockTypeId },

    // Edits
    SetRequested { cell: IVec3, block: BlockTypeId },
    BreakRequested { cell: IVec3, block: BlockTypeId },
    EditRejected { reason: EditError },
    BlockPlaced { cell: IVec3, block: BlockTypeId },
    BlockRemoved { cell: IVec3, block: BlockTypeId },
    SoundPlayed { sound: DigSound },

    // Meshing
    MeshRebuilt { window: ViewWindow, solid: MeshCounts, through: MeshCounts },
    MeshSkipped { window: ViewWindow },

    // Items
    ItemSpawned { id: ItemId, block: BlockTypeId },
    ItemExpired { id: ItemId },
    ItemPickedUp { block: BlockTypeId },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::TargetChanged { .. } => "TargetChanged",
            Event::HotbarSelected { .. } => "HotbarSelected",
            Event::StackDropped { .. } => "StackDropped",
            Event::FluidContact { .. } => "FluidContact",
            Event::SetRequested { .. } => "SetRequested",
            Event::BreakRequested { .. } => "BreakRequested",
            Event::EditRejected { .. } => "EditRejected",
            Event::BlockPlaced { .. } => "BlockPlaced",
            Event::BlockRemoved { .. } => "BlockRemoved",
            Event::SoundPlayed { .. } => "SoundPlayed",
            Event::MeshRebuilt { .. } => "MeshRebuilt",
            Event::MeshSkipped { .. } => "MeshSkipped",
            Event::ItemSpawned { .. } => "ItemSpawned",
            Event::ItemExpired { .. } => "ItemExpired",
            Event::ItemPickedUp { .. } => "ItemPickedUp",
        }
    }
}

#[derive(Clone, Debug)]
pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

/// Pending events kept when the caller never drains.
pub const DEFAULT_EVENT_LIMIT: usize = 4096;

/// Events recorded during frames, drained by the caller. Past `limit`
/// undrained events the oldest are dropped.
#[derive(Debug)]
pub struct EventLog {
    pending: Vec<EventEnvelope>,
    limit: usize,
    dropped: u64,
    next_id: u64,
    // lifetime totals by event name
    totals: HashMap<&'static str, u64>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            limit: DEFAULT_EVENT_LIMIT,
            dropped: 0,
            next_id: 1,
            totals: HashMap::new(),
        }
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::default()
        }
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit(&mut self, tick: u64, kind: Event) -> u64 {
        log_event(tick, &kind);
        *self.totals.entry(kind.name()).or_insert(0) += 1;
        let id = self.alloc_id();
        self.pending.push(EventEnvelope { id, tick, kind });
        if self.pending.len() > self.limit {
            let over = self.pending.len() - self.limit;
            self.pending.drain(..over);
            if self.dropped == 0 {
                log::warn!(target: "events", "event log over {} undrained events; dropping oldest", self.limit);
            }
            self.dropped += over as u64;
        }
        id
    }

    /// Events discarded because the log was full.
    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn drain(&mut self) -> Vec<EventEnvelope> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[EventEnvelope] {
        &self.pending
    }

    /// Number of events named `name` emitted so far, drained or not.
    pub fn total(&self, name: &str) -> u64 {
        self.totals.get(name).copied().unwrap_or(0)
    }

    /// `(name, count)` pairs sorted by name.
    pub fn totals(&self) -> Vec<(&'static str, u64)> {
        let mut v: Vec<_> = self.totals.iter().map(|(k, v)| (*k, *v)).collect();
        v.sort_unstable();
        v
    }
}

fn log_event(tick: u64, ev: &Event) {
    use Event as E;
    match ev {
        E::TargetChanged { target } => match target {
            Some(t) => log::debug!(target: "events", "[tick {}] TargetChanged ({},{},{}) block={:?}",
                tick, t.cell.x, t.cell.y, t.cell.z, t.block),
            None => log::debug!(target: "events", "[tick {}] TargetChanged none", tick),
        },
        E::HotbarSelected { slot, holding } => {
            log::info!(target: "events", "[tick {}] HotbarSelected slot={} holding={:?}", tick, slot, holding);
        }
        E::StackDropped { stack } => {
            log::info!(target: "events", "[tick {}] StackDropped {:?} x{}", tick, stack.id, stack.amount);
        }
        E::FluidContact { block } => {
            log::debug!(target: "events", "[tick {}] FluidContact block={:?}", tick, block);
        }
        E::SetRequested { cell, block } => {
            log::info!(target: "events", "[tick {}] SetRequested ({},{},{}) block={:?}",
                tick, cell.x, cell.y, cell.z, block);
        }
        E::BreakRequested { cell, block } => {
            log::info!(target: "events", "[tick {}] BreakRequested ({},{},{}) block={:?}",
                tick, cell.x, cell.y, cell.z, block);
        }
        E::EditRejected { reason } => {
            log::info!(target: "events", "[tick {}] EditRejected {}", tick, reason);
        }
        E::BlockPlaced { cell, block } => {
            log::info!(target: "events", "[tick {}] BlockPlaced ({},{},{}) block={:?}",
                tick, cell.x, cell.y, cell.z, block);
        }
        E::BlockRemoved { cell, block } => {
            log::info!(target: "events", "[tick {}] BlockRemoved ({},{},{}) block={:?}",
                tick, cell.x, cell.y, cell.z, block);
        }
        E::SoundPlayed { sound } => {
            log::debug!(target: "events", "[tick {}] SoundPlayed {}", tick, sound.clip());
        }
        E::MeshRebuilt { window, solid, through } => {
            log::debug!(target: "events",
                "[tick {}] MeshRebuilt origin=({},{},{}) solid_faces={} through_faces={} verts={}",
                tick, window.origin.x, window.origin.y, window.origin.z,
                solid.faces, through.faces, solid.vertices + through.vertices);
        }
        E::MeshSkipped { window } => {
            log::debug!(target: "events", "[tick {}] MeshSkipped window={:?}", tick, window);
        }
        E::ItemSpawned { id, block } => {
            log::info!(target: "events", "[tick {}] ItemSpawned id={} block={:?}", tick, id.0, block);
        }
        E::ItemExpired { id } => {
            log::info!(target: "events", "[tick {}] ItemExpired id={}", tick, id.0);
        }
        E::ItemPickedUp { block } => {
            log::info!(target: "events", "[tick {}] ItemPickedUp block={:?}", tick, block);
        }
    }
}
