use voxcraft_blocks::{BlockCatalog, BlockTypeId, DigSound, Shape};

#[test]
fn defaults_without_overrides() {
    let c = BlockCatalog::new();
    assert_eq!(c.shape(BlockTypeId::STONE), Shape::Cube);
    assert_eq!(c.shape(BlockTypeId::GRASS_TOP), Shape::Grass);
    assert_eq!(c.sound(BlockTypeId::PLANKS_OAK), DigSound::Wood);
    assert_eq!(c.sprite_path(BlockTypeId::GRAVEL), "Textures/blocks/gravel");
}

#[test]
fn toml_overrides_apply() {
    let src = r#"
sprite_root = "packs/classic"

[shapes]
planks_oak = "stairs"
stone = "cube"

[sounds]
gravel = "dig_sand"
"#;
    let c = BlockCatalog::from_toml_str(src).unwrap();
    assert_eq!(c.shape(BlockTypeId::PLANKS_OAK), Shape::Stairs);
    assert_eq!(c.sound(BlockTypeId::GRAVEL), DigSound::Sand);
    assert_eq!(c.sprite_path(BlockTypeId::STONE), "packs/classic/stone");
    assert_eq!(c.sprite_path(BlockTypeId::AIR), "Textures/null_content");
}

#[test]
fn unknown_names_are_ignored() {
    let src = r#"
[shapes]
marble = "stairs"

[sounds]
dirt = "dig_metal"
"#;
    let c = BlockCatalog::from_toml_str(src).unwrap();
    assert_eq!(c.shape(BlockTypeId::DIRT), Shape::Cube);
    assert_eq!(c.sound(BlockTypeId::DIRT), DigSound::None);
}

#[test]
fn bad_shape_is_an_error() {
    let src = r#"
[shapes]
dirt = "sphere"
"#;
    assert!(BlockCatalog::from_toml_str(src).is_err());
}
