use nkkpanel_codec::{Button, CodecError, MemorySlot};

/// Image currently shown on each switch.
///
/// Switch 2 only ever cycles between images 1 and 2. Switch 1 may also be
/// blank (3), which is only set during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    switch1: u8,
    switch2: u8,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            switch1: 1,
            switch2: 1,
        }
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image index recorded for `button`.
    pub fn image_index(&self, button: Button) -> u8 {
        match button {
            Button::One => self.switch1,
            Button::Two => self.switch2,
        }
    }

    /// Record that `button` now shows image `index`.
    pub fn set(&mut self, button: Button, index: u8) -> Result<(), CodecError> {
        MemorySlot::for_image(button, index)?;
        match button {
            Button::One => self.switch1 = index,
            Button::Two => self.switch2 = index,
        }
        Ok(())
    }

    /// The index switch 2 cycles to next: 1 → 2 → 1.
    pub fn next_switch2_index(&self) -> u8 {
        if self.switch2 >= 2 {
            1
        } else {
            self.switch2 + 1
        }
    }

    /// Switch 2 is showing the water image.
    pub fn wants_water(&self) -> bool {
        self.switch2 == 2
    }
}
