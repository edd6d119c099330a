use std::fmt;

use crate::state::PanelState;

/// User-facing message raised by a switch 1 press.
///
/// What the press means depends on the image shown on switch 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Switch 2 shows its second image (water).
    WaterRequested,
    /// Any other switch 2 image.
    Dissatisfied,
}

impl Notification {
    /// Notification for a switch 1 press given the current panel.
    pub fn for_press(state: &PanelState) -> Self {
        if state.wants_water() {
            Notification::WaterRequested
        } else {
            Notification::Dissatisfied
        }
    }

    /// Stable machine-readable name.
    pub fn kind(self) -> &'static str {
        match self {
            Notification::WaterRequested => "water_requested",
            Notification::Dissatisfied => "dissatisfied",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::WaterRequested => f.write_str("A table would like water."),
            Notification::Dissatisfied => f.write_str("A table is dissatisfied with the burger."),
        }
    }
}
