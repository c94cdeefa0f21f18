//! Scripted input for headless sessions.
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxcraft_geom::Vec3;
use voxcraft_runtime::{FrameInput, KeyState, World};

/// One scripted action held for `frames` frames.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScriptStep {
    pub frames: u32,
    pub look: Option<[f32; 3]>,
    pub move_to: Option<[f32; 3]>,
    pub attack: bool,
    #[serde(rename = "use")]
    pub use_key: bool,
    pub select: Option<usize>,
    pub scroll: i32,
    /// Drop-key on the first frame; `true` drops the whole stack.
    pub drop: Option<bool>,
    /// Teleport onto the oldest dropped item, if any.
    pub collect: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Script {
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(rename = "step", default)]
    pub steps: Vec<ScriptStep>,
}

fn default_dt() -> f32 {
    1.0 / 60.0
}

impl Script {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Look down-forward, dig the block there, collect the drop, then fill the
    /// hole with the held block.
    pub fn dig_and_place() -> Self {
        let forward_down = Some([1.0, -1.0, 0.0]);
        Self {
            dt: default_dt(),
            steps: vec![
                ScriptStep {
                    frames: 2,
                    look: forward_down,
                    select: Some(1),
                    ..ScriptStep::default()
                },
                ScriptStep {
                    frames: 8,
                    attack: true,
                    ..ScriptStep::default()
                },
                ScriptStep {
                    frames: 60,
                    ..ScriptStep::default()
                },
                ScriptStep {
                    frames: 2,
                    collect: true,
                    ..ScriptStep::default()
                },
                ScriptStep {
                    frames: 2,
                    move_to: Some([0.5, 4.0, 0.5]),
                    look: forward_down,
                    ..ScriptStep::default()
                },
                ScriptStep {
                    frames: 1,
                    use_key: true,
                    ..ScriptStep::default()
                },
                ScriptStep {
                    frames: 2,
                    ..ScriptStep::default()
                },
            ],
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.frames)).sum()
    }
}

fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

fn key(down: bool, was_down: bool) -> KeyState {
    match (down, was_down) {
        (true, false) => KeyState::Pressed,
        (true, true) => KeyState::Held,
        (false, true) => KeyState::Released,
        (false, false) => KeyState::Idle,
    }
}

/// Feeds scripted frames into a world.
pub struct ScriptRunner {
    script: Script,
    step: usize,
    frame_in_step: u32,
    attack_down: bool,
    use_down: bool,
}

impl ScriptRunner {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            step: 0,
            frame_in_step: 0,
            attack_down: false,
            use_down: false,
        }
    }

    /// True once every scripted frame has been handed out.
    pub fn is_done(&self) -> bool {
        self.script
            .steps
            .iter()
            .skip(self.step)
            .enumerate()
            .all(|(i, s)| {
                if i == 0 {
                    self.frame_in_step >= s.frames
                } else {
                    s.frames == 0
                }
            })
    }

    /// Input for the next frame; idle once the script is exhausted.
    pub fn next_input(&mut self, world: &World) -> FrameInput {
        while let Some(s) = self.script.steps.get(self.step) {
            if self.frame_in_step < s.frames {
                break;
            }
            self.step += 1;
            self.frame_in_step = 0;
        }
        let Some(s) = self.script.steps.get(self.step) else {
            let input = FrameInput {
                attack: key(false, self.attack_down),
                use_key: key(false, self.use_down),
                dt: self.script.dt,
                ..FrameInput::default()
            };
            self.attack_down = false;
            self.use_down = false;
            return input;
        };
        let first = self.frame_in_step == 0;
        let collect = if s.collect {
            world.items().iter().next().map(|i| i.pos)
        } else {
            None
        };
        let input = FrameInput {
            attack: key(s.attack, self.attack_down),
            use_key: key(s.use_key, self.use_down),
            look: s.look.map(vec3),
            move_to: collect.or(s.move_to.map(vec3)),
            select: if first { s.select } else { None },
            scroll: if first { s.scroll } else { 0 },
            drop: if first { s.drop } else { None },
            dt: self.script.dt,
        };
        self.attack_down = s.attack;
        self.use_down = s.use_key;
        self.frame_in_step += 1;
        input
    }
}
