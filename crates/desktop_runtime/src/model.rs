use std::collections::HashMap;

use desktop_app_contract::ApplicationId;

/// Default x/y origin of the first staggered window.
pub const DEFAULT_STAGGER_ORIGIN: i32 = 48;
/// Default per-window stagger offset in px.
pub const DEFAULT_STAGGER_STEP: i32 = 28;
/// Default number of windows before the stagger wraps back to the origin.
pub const DEFAULT_STAGGER_CYCLE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

/// Placement rule for newly created windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerLayout {
    pub origin: WindowPosition,
    pub step: i32,
    pub cycle: u32,
}

impl StaggerLayout {
    /// Position for a new window when `tracked` windows already exist. Saturates instead of
    /// overflowing for extreme catalog values.
    pub fn position_for(self, tracked: usize) -> WindowPosition {
        let cycle = self.cycle.max(1) as usize;
        let slot = i32::try_from(tracked % cycle).unwrap_or(i32::MAX);
        let offset = slot.saturating_mul(self.step);
        WindowPosition {
            x: self.origin.x.saturating_add(offset),
            y: self.origin.y.saturating_add(offset),
        }
    }
}

impl Default for StaggerLayout {
    fn default() -> Self {
        Self {
            origin: WindowPosition {
                x: DEFAULT_STAGGER_ORIGIN,
                y: DEFAULT_STAGGER_ORIGIN,
            },
            step: DEFAULT_STAGGER_STEP,
            cycle: DEFAULT_STAGGER_CYCLE,
        }
    }
}

/// Presentation state of one tracked window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenWindowState {
    pub app_id: ApplicationId,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub z_index: u64,
    /// Only meaningful while `is_maximized` is false.
    pub position: WindowPosition,
    /// Creation order, used to keep dock indicators stable.
    pub opened_seq: u64,
}

/// Window manager state: every tracked window keyed by app id plus the global stacking counter.
///
/// Fields are crate-private so the only writer is [`crate::window_manager::reduce_window_manager`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowManagerState {
    pub(crate) windows: HashMap<ApplicationId, OpenWindowState>,
    pub(crate) highest_z_index: u64,
    pub(crate) next_opened_seq: u64,
    pub(crate) layout: StaggerLayout,
}

impl WindowManagerState {
    pub fn new(layout: StaggerLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn window(&self, app_id: &ApplicationId) -> Option<&OpenWindowState> {
        self.windows.get(app_id)
    }

    /// Tracked windows (minimized included) in the order they were opened.
    pub fn open_windows(&self) -> Vec<&OpenWindowState> {
        let mut windows: Vec<_> = self.windows.values().collect();
        windows.sort_by_key(|w| w.opened_seq);
        windows
    }

    /// Non-minimized windows from bottom to top of the stack.
    pub fn visible_windows(&self) -> Vec<&OpenWindowState> {
        let mut windows: Vec<_> = self.windows.values().filter(|w| !w.is_minimized).collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    pub fn topmost_window(&self) -> Option<&OpenWindowState> {
        self.windows
            .values()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_index)
    }

    pub fn is_focused(&self, app_id: &ApplicationId) -> bool {
        self.topmost_window().map(|w| &w.app_id) == Some(app_id)
    }

    pub fn highest_z_index(&self) -> u64 {
        self.highest_z_index
    }

    pub fn layout(&self) -> StaggerLayout {
        self.layout
    }

    /// The launcher is shown only while nothing is tracked.
    pub fn launcher_visible(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeepLinkState {
    pub open: Vec<ApplicationId>,
}

impl DeepLinkState {
    /// Parses a comma-separated `open` query value, dropping blanks, malformed ids, and repeats.
    pub fn from_open_param(raw: &str) -> Self {
        let mut open: Vec<ApplicationId> = Vec::new();
        for segment in raw.split(',') {
            let Ok(app_id) = ApplicationId::new(segment.trim()) else {
                continue;
            };
            if !open.contains(&app_id) {
                open.push(app_id);
            }
        }
        Self { open }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stagger_wraps_after_cycle() {
        let layout = StaggerLayout::default();
        assert_eq!(layout.position_for(0), WindowPosition { x: 48, y: 48 });
        assert_eq!(layout.position_for(2), WindowPosition { x: 104, y: 104 });
        assert_eq!(layout.position_for(8), layout.position_for(0));
    }

    #[test]
    fn zero_cycle_is_treated_as_one() {
        let layout = StaggerLayout {
            cycle: 0,
            ..StaggerLayout::default()
        };
        assert_eq!(layout.position_for(5), layout.origin);
    }

    #[test]
    fn extreme_steps_saturate_instead_of_overflowing() {
        let layout = StaggerLayout {
            step: 1_100_000_000,
            ..StaggerLayout::default()
        };
        assert_eq!(layout.position_for(2), WindowPosition { x: i32::MAX, y: i32::MAX });

        let layout = StaggerLayout {
            origin: WindowPosition { x: i32::MIN, y: 0 },
            step: i32::MIN,
            cycle: u32::MAX,
        };
        assert_eq!(layout.position_for(3), WindowPosition { x: i32::MIN, y: i32::MIN });
    }

    #[test]
    fn deep_link_parsing_drops_invalid_and_repeated_ids() {
        let parsed = DeepLinkState::from_open_param(" chat.community,,Bad,market.nft,chat.community ");
        assert_eq!(
            parsed.open,
            vec![
                ApplicationId::trusted("chat.community"),
                ApplicationId::trusted("market.nft"),
            ]
        );
        assert!(DeepLinkState::from_open_param("").open.is_empty());
    }

    #[test]
    fn empty_state_shows_launcher_and_has_no_topmost() {
        let state = WindowManagerState::default();
        assert!(state.launcher_visible());
        assert!(state.topmost_window().is_none());
        assert_eq!(state.highest_z_index(), 0);
    }
}
