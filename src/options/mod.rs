//! Runtime options with TOML file support.
//!
//! Scene layout, camera controls, lighting, interaction timing and key
//! bindings are consolidated here. Every section uses `#[serde(default)]`,
//! so a file that only overrides `[camera]` is valid.

mod camera;
mod interaction;
mod keybindings;
mod lighting;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use interaction::{InteractionMode, InteractionOptions};
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::TumbleError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Layout, seed and spin.
    pub scene: SceneOptions,
    /// Camera projection and orbit controls.
    pub camera: CameraOptions,
    /// Shading parameters.
    pub lighting: LightingOptions,
    /// Pointer interaction and tween timing.
    pub interaction: InteractionOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TumbleError::OptionsParse`] if the TOML is malformed or
    /// a field has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, TumbleError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| TumbleError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TumbleError::Io`] if the file cannot be read, or
    /// [`TumbleError::OptionsParse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, TumbleError> {
        let content =
            std::fs::read_to_string(path).map_err(TumbleError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`TumbleError::OptionsParse`] if serialization fails, or
    /// [`TumbleError::Io`] if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), TumbleError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TumbleError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TumbleError::Io)?;
        }
        std::fs::write(path, content).map_err(TumbleError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::scene::{LayoutPreset, ShapeKind, ShapeSpec};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[scene]
layout = "extended"
seed = 42

[interaction]
mode = "cursor_tracking"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.scene.layout, LayoutPreset::Extended);
        assert_eq!(opts.scene.seed, Some(42));
        assert_eq!(opts.interaction.mode, InteractionMode::CursorTracking);
        // Everything else should be default
        assert_eq!(opts.interaction.color_tween_secs, 1.0);
        assert_eq!(opts.camera, CameraOptions::default());
        assert_eq!(opts.lighting.roughness, 0.5);
    }

    #[test]
    fn custom_shapes_replace_the_preset() {
        let toml_str = r#"
[scene]
max_rotation_speed = 0.01

[[scene.shapes]]
position = [1.0, 2.0, 3.0]
shape = { kind = "octahedron", radius = 2.0 }
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        let layout = opts.scene.layout(opts.lighting.roughness);
        assert_eq!(layout.shapes.len(), 1);
        assert_eq!(layout.shapes[0].shape, ShapeKind::Octahedron { radius: 2.0 });
        assert_eq!(layout.max_rotation_speed, 0.01);
        assert_eq!(layout.lights.len(), 4);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, TumbleError::OptionsParse(_)));
    }

    #[test]
    fn saved_file_loads_back_unchanged() {
        let mut opts = Options::default();
        opts.scene.layout = LayoutPreset::Extended;
        opts.scene.seed = Some(i64::MAX);
        opts.scene.shapes = Some(vec![ShapeSpec {
            shape: ShapeKind::Octahedron { radius: 2.0 },
            position: [1.0, -2.0, 0.5],
        }]);
        opts.interaction.mode = InteractionMode::CursorTracking;
        let _ = opts
            .keybindings
            .bindings
            .insert(KeyAction::TogglePause, "KeyX".into());
        opts.keybindings.rebuild_reverse_map();

        let dir = std::env::temp_dir()
            .join(format!("tumble-options-{}", std::process::id()));
        let path = dir.join("nested").join("options.toml");
        opts.save(&path).unwrap();
        let loaded = Options::load(&path);
        std::fs::remove_dir_all(&dir).unwrap();

        let loaded = loaded.unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            loaded.keybindings.lookup("KeyX"),
            Some(KeyAction::TogglePause)
        );
    }

    #[test]
    fn negative_seed_parses() {
        let opts = Options::from_toml_str("[scene]\nseed = -5\n").unwrap();
        assert_eq!(opts.scene.seed, Some(-5));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err =
            Options::load(Path::new("/nonexistent/tumble/options.toml"))
                .unwrap_err();
        assert!(matches!(err, TumbleError::Io(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(KeyAction::ResetCamera)
        );
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::ToggleAutoRotate)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebound_keys_are_looked_up_after_load() {
        let toml_str = r#"
[keybindings.bindings]
toggle_pause = "KeyX"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyX"),
            Some(KeyAction::TogglePause)
        );
        assert_eq!(opts.keybindings.lookup("KeyP"), None);
    }
}
