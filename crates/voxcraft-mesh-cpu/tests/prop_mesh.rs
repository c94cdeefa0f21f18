use proptest::prelude::*;
use voxcraft_blocks::{BlockCatalog, BlockTypeId};
use voxcraft_geom::IVec3;
use voxcraft_mesh_cpu::{MeshCapacity, MeshPass, Mesher, RayonExecutor, SourceMeshTable};
use voxcraft_world::{Terrain, ViewWindow, WorldConfig};

const S: i32 = 8;

fn arb_cells() -> impl Strategy<Value = Vec<(IVec3, BlockTypeId)>> {
    let cell = (0..S, 0..S, 0..S).prop_map(|(x, y, z)| IVec3::new(x, y, z));
    let block = (1usize..BlockTypeId::ALL.len()).prop_map(|i| BlockTypeId::ALL[i]);
    proptest::collection::vec((cell, block), 0..60)
}

proptest! {
    // Output is well formed, within capacity, and at most 6 faces per occupied cell
    #[test]
    fn mesh_invariants(cells in arb_cells()) {
        let cfg = WorldConfig::small(S, S);
        let mut t = Terrain::new(&cfg);
        for (c, id) in &cells {
            t.update_cell(*c, *id);
        }
        let table = SourceMeshTable::build();
        let catalog = BlockCatalog::new();
        let m = Mesher::new(&table, &catalog, cfg.atlas());
        let w = ViewWindow { origin: IVec3::ZERO, opposite: t.solid.dims() };
        let solid = m.mesh_window(&t, &w, MeshPass::Solid, &RayonExecutor).unwrap();
        let through = m.mesh_window(&t, &w, MeshPass::Through, &RayonExecutor).unwrap();
        let cap = MeshCapacity::for_window(&w, &table);
        for out in [&solid, &through] {
            prop_assert!(out.is_well_formed());
            prop_assert!(cap.fits(out.counts()));
            prop_assert_eq!(out.idx.len() % 3, 0);
        }
        prop_assert!(solid.counts().faces <= 6 * t.solid.count_non_air());
        prop_assert!(through.counts().faces <= 6 * t.through.count_non_air());
    }
}
