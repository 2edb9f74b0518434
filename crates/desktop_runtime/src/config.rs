//! Build-time shell configuration decoded from the generated app catalog.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::model::{StaggerLayout, WindowPosition};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
/// Shell-level settings from the `[shell]` table of `app_catalog.toml`.
pub struct ShellConfig {
    stagger_origin_x: i32,
    stagger_origin_y: i32,
    stagger_step: i32,
    stagger_cycle: u32,
    /// Log actions the window manager ignored (unknown app or untracked window).
    #[serde(default)]
    pub report_ignored_actions: bool,
}

impl ShellConfig {
    /// Placement rule for newly opened windows.
    pub fn stagger_layout(&self) -> StaggerLayout {
        StaggerLayout {
            origin: WindowPosition {
                x: self.stagger_origin_x,
                y: self.stagger_origin_y,
            },
            step: self.stagger_step,
            cycle: self.stagger_cycle,
        }
    }
}

/// Returns the shell configuration embedded at build time.
pub fn shell_config() -> &'static ShellConfig {
    static CONFIG: OnceLock<ShellConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        serde_json::from_str(SHELL_CONFIG_JSON).expect("generated shell config should parse")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shell_config_parses() {
        let config = shell_config();
        let layout = config.stagger_layout();
        assert!(layout.cycle >= 1);
        assert!(layout.step >= 0);
        assert!(!config.report_ignored_actions);
    }
}
