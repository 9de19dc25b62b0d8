use crate::controller::{DisplaySnapshot, View};

/// Latest snapshot pushed by the controller; everything on screen is drawn
/// from this.
#[derive(Debug, Default)]
pub(crate) struct Dashboard {
    pub(crate) snapshot: DisplaySnapshot,
}

impl View for Dashboard {
    fn show(&mut self, snapshot: DisplaySnapshot) {
        self.snapshot = snapshot;
    }
}
