use std::error::Error;
use std::fs;
use std::path::Path;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::sound::DigSound;
use crate::types::{BlockTypeId, SPRITE_ROOT, Shape};

/// Read-only per-block lookups with optional overrides loaded from TOML.
#[derive(Clone, Debug)]
pub struct BlockCatalog {
    pub sprite_root: String,
    shapes: HashMap<BlockTypeId, Shape>,
    sounds: HashMap<BlockTypeId, DigSound>,
}

impl Default for BlockCatalog {
    fn default() -> Self {
        Self {
            sprite_root: SPRITE_ROOT.to_string(),
            shapes: HashMap::new(),
            sounds: HashMap::new(),
        }
    }
}

impl BlockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: CatalogConfig = toml::from_str(toml_str)?;
        let mut catalog = BlockCatalog::new();
        if let Some(root) = cfg.sprite_root {
            catalog.sprite_root = root;
        }
        let mut shapes: Vec<(String, Shape)> = cfg.shapes.into_iter().collect();
        shapes.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, shape) in shapes {
            match BlockTypeId::from_name(&name) {
                Some(id) => {
                    catalog.shapes.insert(id, shape);
                }
                None => log::warn!(target: "blocks", "unknown block '{}' in [shapes]; ignored", name),
            }
        }
        let mut sounds: Vec<(String, String)> = cfg.sounds.into_iter().collect();
        sounds.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, clip) in sounds {
            let Some(id) = BlockTypeId::from_name(&name) else {
                log::warn!(target: "blocks", "unknown block '{}' in [sounds]; ignored", name);
                continue;
            };
            let sound = DigSound::from_clip(&clip).unwrap_or_else(|| {
                log::warn!(target: "blocks", "unknown sound '{}' for {}; muted", clip, name);
                DigSound::None
            });
            catalog.sounds.insert(id, sound);
        }
        Ok(catalog)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    #[inline]
    pub fn shape(&self, id: BlockTypeId) -> Shape {
        self.shapes
            .get(&id)
            .copied()
            .unwrap_or_else(|| id.default_shape())
    }

    #[inline]
    pub fn sound(&self, id: BlockTypeId) -> DigSound {
        self.sounds
            .get(&id)
            .copied()
            .unwrap_or_else(|| DigSound::for_block(id))
    }

    pub fn sprite_path(&self, id: BlockTypeId) -> String {
        id.sprite_path_in(&self.sprite_root)
    }

    pub fn set_shape(&mut self, id: BlockTypeId, shape: Shape) {
        self.shapes.insert(id, shape);
    }
}

#[derive(Deserialize, Default)]
struct CatalogConfig {
    #[serde(default)]
    sprite_root: Option<String>,
    #[serde(default)]
    shapes: std::collections::HashMap<String, Shape>,
    #[serde(default)]
    sounds: std::collections::HashMap<String, String>,
}
