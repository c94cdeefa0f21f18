use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use voxcraft_blocks::{BlockTypeId, TextureAtlas};
use voxcraft_geom::Vec3;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("world.{field} must be at least 1 (got {value})")]
    NonPositiveDimension { field: &'static str, value: i64 },
    #[error("video.render_distance must be at least 1 (got {0})")]
    RenderDistance(i32),
    #[error("player.{field} must be positive (got {value})")]
    NonPositivePlayer { field: &'static str, value: f32 },
    #[error("atlas tile {tile} does not divide {width}x{height}")]
    Atlas { width: u32, height: u32, tile: u32 },
    #[error("atlas holds {tiles} tiles but {blocks} block ids need one each")]
    AtlasTooSmall { tiles: u32, blocks: usize },
}

/// Render and world settings threaded through the grid, mesher and raycaster.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WorldConfig {
    #[serde(default)]
    pub world: WorldSection,
    #[serde(default)]
    pub video: VideoSection,
    #[serde(default)]
    pub player: PlayerSection,
    #[serde(default)]
    pub atlas: AtlasSection,
    #[serde(default)]
    pub items: ItemSection,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorldSection {
    #[serde(default = "default_size")]
    pub size: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i32,
}
fn default_size() -> i32 {
    1025
}
fn default_height() -> i32 {
    320
}
fn default_chunk_size() -> i32 {
    16
}
impl Default for WorldSection {
    fn default() -> Self {
        Self {
            size: default_size(),
            height: default_height(),
            chunk_size: default_chunk_size(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct VideoSection {
    /// Radius of the view window in chunks.
    #[serde(default = "default_render_distance")]
    pub render_distance: i32,
}
fn default_render_distance() -> i32 {
    2
}
impl Default for VideoSection {
    fn default() -> Self {
        Self {
            render_distance: default_render_distance(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerSection {
    #[serde(default = "default_reach")]
    pub reach: f32,
    #[serde(default = "default_ray_accuracy")]
    pub ray_accuracy: u32,
    #[serde(default = "default_break_speed")]
    pub break_speed: u32,
    #[serde(default = "default_durability")]
    pub durability: u32,
    #[serde(default = "default_place_repeat_frames")]
    pub place_repeat_frames: u32,
    #[serde(default = "default_hitbox")]
    pub hitbox: [f32; 3],
    #[serde(default = "default_eye_height")]
    pub eye_height: f32,
}
fn default_reach() -> f32 {
    5.0
}
fn default_ray_accuracy() -> u32 {
    100
}
fn default_break_speed() -> u32 {
    20
}
fn default_durability() -> u32 {
    100
}
fn default_place_repeat_frames() -> u32 {
    10
}
fn default_hitbox() -> [f32; 3] {
    [0.6, 1.8, 0.6]
}
fn default_eye_height() -> f32 {
    1.6
}
impl Default for PlayerSection {
    fn default() -> Self {
        Self {
            reach: default_reach(),
            ray_accuracy: default_ray_accuracy(),
            break_speed: default_break_speed(),
            durability: default_durability(),
            place_repeat_frames: default_place_repeat_frames(),
            hitbox: default_hitbox(),
            eye_height: default_eye_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AtlasSection {
    #[serde(default = "default_atlas_width")]
    pub width: u32,
    #[serde(default = "default_atlas_height")]
    pub height: u32,
    #[serde(default = "default_atlas_tile")]
    pub tile: u32,
}
fn default_atlas_width() -> u32 {
    80
}
fn default_atlas_height() -> u32 {
    208
}
fn default_atlas_tile() -> u32 {
    16
}
impl Default for AtlasSection {
    fn default() -> Self {
        Self {
            width: default_atlas_width(),
            height: default_atlas_height(),
            tile: default_atlas_tile(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemSection {
    #[serde(default = "default_lifetime_secs")]
    pub lifetime_secs: f32,
    #[serde(default = "default_pickup_size")]
    pub pickup_size: [f32; 3],
}
fn default_lifetime_secs() -> f32 {
    30.0
}
fn default_pickup_size() -> [f32; 3] {
    [0.25, 0.25, 0.25]
}
impl Default for ItemSection {
    fn default() -> Self {
        Self {
            lifetime_secs: default_lifetime_secs(),
            pickup_size: default_pickup_size(),
        }
    }
}

impl WorldConfig {
    /// Small world for tests and quick sessions.
    pub fn small(size: i32, height: i32) -> Self {
        let mut cfg = Self::default();
        cfg.world.size = size;
        cfg.world.height = height;
        cfg
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: WorldConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("size", self.world.size),
            ("height", self.world.height),
            ("chunk_size", self.world.chunk_size),
        ] {
            if value < 1 {
                return Err(ConfigError::NonPositiveDimension {
                    field,
                    value: value as i64,
                });
            }
        }
        if self.video.render_distance < 1 {
            return Err(ConfigError::RenderDistance(self.video.render_distance));
        }
        if !(self.player.reach > 0.0) {
            return Err(ConfigError::NonPositivePlayer {
                field: "reach",
                value: self.player.reach,
            });
        }
        if self.player.ray_accuracy == 0 {
            return Err(ConfigError::NonPositivePlayer {
                field: "ray_accuracy",
                value: 0.0,
            });
        }
        let a = &self.atlas;
        if a.tile == 0 || a.width % a.tile != 0 || a.height % a.tile != 0 {
            return Err(ConfigError::Atlas {
                width: a.width,
                height: a.height,
                tile: a.tile,
            });
        }
        let atlas = self.atlas();
        if !atlas.covers_all_blocks() {
            return Err(ConfigError::AtlasTooSmall {
                tiles: atlas.capacity(),
                blocks: BlockTypeId::ALL.len(),
            });
        }
        Ok(())
    }

    /// Offset applied to world X/Z to reach grid space.
    #[inline]
    pub fn half_size(&self) -> i32 {
        self.world.size / 2
    }

    /// View window radius in cells.
    #[inline]
    pub fn view_radius(&self) -> i32 {
        self.video.render_distance * self.world.chunk_size
    }

    #[inline]
    pub fn ray_samples(&self) -> usize {
        (self.player.reach * self.player.ray_accuracy as f32).round() as usize
    }

    pub fn atlas(&self) -> TextureAtlas {
        TextureAtlas {
            width: self.atlas.width,
            height: self.atlas.height,
            tile: self.atlas.tile,
        }
    }

    pub fn player_size(&self) -> Vec3 {
        let [x, y, z] = self.player.hitbox;
        Vec3::new(x, y, z)
    }

    pub fn pickup_size(&self) -> Vec3 {
        let [x, y, z] = self.items.pickup_size;
        Vec3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_world() {
        let c = WorldConfig::default();
        assert_eq!(c.world.size, 1025);
        assert_eq!(c.half_size(), 512);
        assert_eq!(c.world.height, 320);
        assert_eq!(c.view_radius(), 32);
        assert_eq!(c.ray_samples(), 500);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = WorldConfig::from_toml_str(
            r#"
[world]
size = 65
height = 32

[video]
render_distance = 1
"#,
        )
        .unwrap();
        assert_eq!(c.world.size, 65);
        assert_eq!(c.half_size(), 32);
        assert_eq!(c.world.chunk_size, 16);
        assert_eq!(c.view_radius(), 16);
        assert_eq!(c.player.reach, 5.0);
    }

    #[test]
    fn rejects_zero_render_distance() {
        let mut c = WorldConfig::default();
        c.video.render_distance = 0;
        assert_eq!(c.validate(), Err(ConfigError::RenderDistance(0)));
        assert!(WorldConfig::from_toml_str("[video]\nrender_distance = 0\n").is_err());
    }

    #[test]
    fn rejects_uneven_atlas() {
        let mut c = WorldConfig::default();
        c.atlas.width = 81;
        assert!(matches!(c.validate(), Err(ConfigError::Atlas { .. })));
    }

    #[test]
    fn rejects_atlas_without_a_tile_per_block() {
        let mut c = WorldConfig::default();
        c.atlas.width = 32;
        c.atlas.height = 32;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::AtlasTooSmall { tiles: 4, .. })
        ));
    }
}
