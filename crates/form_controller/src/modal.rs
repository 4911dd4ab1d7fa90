/// Where a click landed relative to the result modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay element itself, outside the dialog content.
    Backdrop,
    CloseControl,
    Content,
    Elsewhere,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    visible: bool,
}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Closes on the close control or a backdrop click; returns whether it closed.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseControl if self.visible => {
                self.close();
                true
            }
            _ => false,
        }
    }
}
