use std::collections::HashMap;

/// The cycle guard: tracks which left-hand references are currently being
/// compared, and which right-hand reference each was paired with.
///
/// A pair is recorded before its children are visited and removed after,
/// so the map holds exactly the ancestor chain of the current descent.
/// Re-encountering a left reference mid-descent reports the recorded
/// pairing instead of recursing again.
#[derive(Debug, Default)]
pub struct VisitSet {
    active: HashMap<usize, usize>,
}

impl VisitSet {
    pub fn new() -> Self {
        VisitSet {
            active: HashMap::new(),
        }
    }

    /// The right-hand identity `left` is currently paired with, if any.
    pub fn active(&self, left: usize) -> Option<usize> {
        self.active.get(&left).copied()
    }

    pub fn enter(&mut self, left: usize, right: usize) {
        self.active.insert(left, right);
    }

    pub fn leave(&mut self, left: usize) {
        self.active.remove(&left);
    }
}
