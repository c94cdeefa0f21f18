//! Per-frame coordinator. Order within a frame is fixed: raycast, input
//! resolution, block update, mesh (solid then through), hitbox pass, then
//! edit commits and item pickup.
use rayon::{ThreadPool, ThreadPoolBuilder};
use voxcraft_blocks::{BlockCatalog, BlockTypeId};
use voxcraft_edit::{BlockAdmin, Effect, ItemEntities};
use voxcraft_geom::{IVec3, Vec3};
use voxcraft_inventory::{ContainerView, SlotStore};
use voxcraft_mesh_cpu::{MeshBuffer, MeshCounts, RayonExecutor, SlabExecutor, WorldMesh};
use voxcraft_world::{
    HitboxRegistry, RaycastResult, Raycaster, TargetBlock, Terrain, ViewWindow, WorldConfig,
    flat_surface_y, generate_flat,
};

use crate::event::{Event, EventLog};
use crate::input::FrameInput;
use crate::player::Player;

#[derive(Clone, Debug)]
pub struct RuntimeOptions {
    /// Dedicated mesh/raycast threads; 0 uses rayon's global pool.
    pub workers: usize,
    /// Seed for item impulses; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Generate the flat world on creation.
    pub flat: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            workers: 0,
            seed: None,
            flat: true,
        }
    }
}

/// What happened in one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    pub tick: u64,
    pub raycast: Option<RaycastResult>,
    pub placed: Option<IVec3>,
    pub broken: Option<TargetBlock>,
    pub remeshed: Option<(MeshCounts, MeshCounts)>,
    pub picked: Vec<BlockTypeId>,
}

pub struct World {
    cfg: WorldConfig,
    catalog: BlockCatalog,
    terrain: Terrain,
    raycaster: Raycaster,
    mesh: WorldMesh,
    hitboxes: HitboxRegistry,
    admin: BlockAdmin,
    items: ItemEntities,
    store: SlotStore,
    player: Player,
    events: EventLog,
    pool: Option<ThreadPool>,
    tick: u64,
    mesh_dirty: bool,
    last_target: Option<TargetBlock>,
    last_fluid: BlockTypeId,
}

impl World {
    pub fn new(cfg: WorldConfig, catalog: BlockCatalog, opts: RuntimeOptions) -> Self {
        let mut terrain = Terrain::new(&cfg);
        if opts.flat {
            generate_flat(&mut terrain);
        }
        let mut hitboxes = HitboxRegistry::new();
        let spawn = Vec3::new(0.5, flat_surface_y() as f32, 0.5);
        let player = Player::new(&cfg, spawn, &mut hitboxes);
        let pool = if opts.workers > 0 {
            match ThreadPoolBuilder::new()
                .num_threads(opts.workers)
                .thread_name(|i| format!("voxcraft-mesh-{i}"))
                .build()
            {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("mesh pool unavailable ({}); using global pool", e);
                    None
                }
            }
        } else {
            None
        };
        let admin = match opts.seed {
            Some(s) => BlockAdmin::with_seed(s),
            None => BlockAdmin::new(),
        };
        log::info!(
            "world {}x{}x{} render_distance={} workers={}",
            cfg.world.size,
            cfg.world.height,
            cfg.world.size,
            cfg.video.render_distance,
            pool.as_ref().map_or(rayon::current_num_threads(), |p| p.current_num_threads())
        );
        Self {
            raycaster: Raycaster::from_config(&cfg),
            mesh: WorldMesh::new(&cfg),
            items: ItemEntities::from_config(&cfg),
            catalog,
            terrain,
            hitboxes,
            admin,
            store: SlotStore::new(),
            player,
            events: EventLog::new(),
            pool,
            tick: 0,
            mesh_dirty: true,
            last_target: None,
            last_fluid: BlockTypeId::AIR,
            cfg,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.cfg
    }

    pub fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Direct grid access for setup; marks the mesh for rebuild.
    pub fn terrain_mut(&mut self) -> &mut Terrain {
        self.mesh_dirty = true;
        &mut self.terrain
    }

    pub fn mesh(&self) -> &WorldMesh {
        &self.mesh
    }

    pub fn store(&self) -> &SlotStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SlotStore {
        &mut self.store
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn items(&self) -> &ItemEntities {
        &self.items
    }

    pub fn hitboxes(&self) -> &HitboxRegistry {
        &self.hitboxes
    }

    pub fn admin(&self) -> &BlockAdmin {
        &self.admin
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventLog {
        &mut self.events
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Window of grid cells kept meshed around the player.
    pub fn view_window(&self) -> ViewWindow {
        ViewWindow::around(self.terrain.world_to_cell(self.player.pos), &self.cfg)
    }

    /// Runs one frame. Parallel work uses the dedicated pool when configured.
    pub fn step(&mut self, input: &FrameInput) -> FrameReport {
        let pool = self.pool.take();
        let report = match &pool {
            Some(p) => p.install(|| self.step_inner(input)),
            None => self.step_inner(input),
        };
        self.pool = pool;
        report
    }

    fn emit(&mut self, kind: Event) {
        self.events.emit(self.tick, kind);
    }

    fn step_inner(&mut self, input: &FrameInput) -> FrameReport {
        self.tick += 1;
        let tick = self.tick;
        let mut report = FrameReport {
            tick,
            ..FrameReport::default()
        };

        self.apply_player_input(input);

        // raycast
        let hit = self.raycaster.cast(&self.terrain, &self.player.ray_query());
        if hit.selected != self.last_target {
            self.last_target = hit.selected;
            self.emit(Event::TargetChanged {
                target: hit.selected,
            });
        }
        report.raycast = Some(hit);

        // input resolution
        if let Some(t) = self.player.attack(input.attack, hit.selected) {
            match self.admin.try_break(t) {
                Ok(p) => self.emit(Event::BreakRequested {
                    cell: p.cell,
                    block: p.block,
                }),
                Err(reason) => self.emit(Event::EditRejected { reason }),
            }
        }
        let slot = self.store.selected();
        let holding = self.store.selected_stack().id;
        if let Some(cell) =
            self.player
                .use_target(input.use_key, tick, &hit, &self.terrain, holding)
        {
            match self.admin.try_set(cell, &self.store, ContainerView::HotBar, slot) {
                Ok(p) => {
                    self.player.set_accepted(tick);
                    self.emit(Event::SetRequested {
                        cell: p.cell,
                        block: p.block,
                    });
                }
                Err(reason) => self.emit(Event::EditRejected { reason }),
            }
        }

        // block update
        if let Some(p) = self.admin.pending_set() {
            if self.terrain.solid.get(p.cell).is_air()
                && self.terrain.update_cell(p.cell, p.block) != p.block
            {
                self.mesh_dirty = true;
                report.placed = Some(p.cell);
                self.emit(Event::BlockPlaced {
                    cell: p.cell,
                    block: p.block,
                });
            } else {
                self.admin.cancel_set();
            }
        }
        if let Some(p) = self.admin.pending_break() {
            let prev = self.terrain.update_cell(p.cell, BlockTypeId::AIR);
            self.mesh_dirty = true;
            report.broken = Some(TargetBlock {
                cell: p.cell,
                block: prev,
            });
            self.emit(Event::BlockRemoved {
                cell: p.cell,
                block: prev,
            });
        }

        // mesh
        report.remeshed = self.update_mesh(&RayonExecutor);

        // hitboxes and items
        self.hitboxes.update_pos(self.player.hitbox, self.player.pos);
        for id in self.items.tick(input.dt, &self.terrain, &mut self.hitboxes) {
            self.emit(Event::ItemExpired { id });
        }
        self.hitboxes.run_pass(&self.terrain);
        let fluid = self
            .hitboxes
            .hit_block(self.player.hitbox)
            .unwrap_or(BlockTypeId::AIR);
        if fluid != self.last_fluid {
            self.last_fluid = fluid;
            self.emit(Event::FluidContact { block: fluid });
        }

        // commit edits
        self.commit_edits();

        let player_box = self.player.aabb();
        report.picked = self.items.pickup(
            &player_box,
            &mut self.store,
            ContainerView::Inventory,
            &mut self.hitboxes,
        );
        for block in report.picked.clone() {
            self.emit(Event::ItemPickedUp { block });
        }
        report
    }

    fn apply_player_input(&mut self, input: &FrameInput) {
        if let Some(p) = input.move_to {
            self.player.pos = p;
        }
        if let Some(d) = input.look {
            if d.length() > 0.0 {
                self.player.look = d.normalized();
            }
        }
        if let Some(n) = input.select {
            if (1..=voxcraft_inventory::HOTBAR_SLOTS).contains(&n) {
                self.store.select(n);
                let holding = self.store.selected_stack().id;
                self.emit(Event::HotbarSelected { slot: n, holding });
            }
        }
        if input.scroll != 0 {
            let slot = self.store.scroll(input.scroll);
            let holding = self.store.selected_stack().id;
            self.emit(Event::HotbarSelected { slot, holding });
        }
        if let Some(all) = input.drop {
            let slot = self.store.selected();
            let stack = self.store.drop_item(ContainerView::HotBar, slot, all);
            if !stack.is_empty() {
                self.emit(Event::StackDropped { stack });
            }
        }
    }

    /// Rebuilds both meshes when the window moved or the grid changed.
    pub fn update_mesh(&mut self, exec: &dyn SlabExecutor) -> Option<(MeshCounts, MeshCounts)> {
        let window = self.view_window();
        if !self.mesh_dirty && self.mesh.window == Some(window) {
            return None;
        }
        if !self.mesh.rebuild(&self.terrain, &self.catalog, window, exec) {
            self.emit(Event::MeshSkipped { window });
            return None;
        }
        self.mesh_dirty = false;
        let (solid, through) = self.mesh.counts();
        self.emit(Event::MeshRebuilt {
            window,
            solid,
            through,
        });
        Some((solid, through))
    }

    fn commit_edits(&mut self) {
        let mut effects = Vec::new();
        if self.admin.pending_set().is_some() {
            match self.admin.finished_set(&mut self.store, &self.catalog) {
                Ok(fx) => effects.extend(fx),
                Err(reason) => self.emit(Event::EditRejected { reason }),
            }
        }
        if self.admin.pending_break().is_some() {
            match self.admin.finished_break(&self.terrain, &self.catalog) {
                Ok(fx) => effects.extend(fx),
                Err(reason) => self.emit(Event::EditRejected { reason }),
            }
        }
        for fx in effects {
            match fx {
                Effect::PlaySound(sound) => self.emit(Event::SoundPlayed { sound }),
                Effect::SpawnItem(spawn) => {
                    let id = self.items.spawn(&spawn, &mut self.hitboxes);
                    self.emit(Event::ItemSpawned {
                        id,
                        block: spawn.block,
                    });
                }
            }
        }
    }

    /// Current solid and through buffers.
    pub fn mesh_buffers(&self) -> (&MeshBuffer, &MeshBuffer) {
        (&self.mesh.solid, &self.mesh.through)
    }
}
