/// Welcome overlay gate. `Granted` is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryGate {
    #[default]
    Gated,
    Granted,
}

/// The page's only mutable state, owned by the top-level component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    gate: EntryGate,
}

impl ViewState {
    pub fn gate(&self) -> EntryGate {
        self.gate
    }

    pub fn overlay_visible(&self) -> bool {
        self.gate == EntryGate::Gated
    }

    /// Returns `true` only for the transition out of `Gated`.
    pub(crate) fn grant_entry(&mut self) -> bool {
        match self.gate {
            EntryGate::Gated => {
                self.gate = EntryGate::Granted;
                true
            }
            EntryGate::Granted => false,
        }
    }
}
