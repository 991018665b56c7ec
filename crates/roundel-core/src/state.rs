//! Dirty tracking for derived geometry, shader and paint state.
//!
//! Mutations mark flags; the paint path consumes them in the order
//! geometry, shader, draw. Until construction finishes, mutations only
//! queue a pending setup so nothing is computed from half-initialised state.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Dirty: u8 {
        const GEOMETRY = 1 << 0;
        const SHADER = 1 << 1;
        const DRAW = 1 << 2;
    }
}

/// What kind of input changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// Size, padding or border.
    Layout,
    /// New image, or circular mode toggled.
    Content,
    /// Colors, alpha, filters, visual state.
    Appearance,
}

impl Change {
    pub fn dirties(self) -> Dirty {
        match self {
            Change::Layout | Change::Content => Dirty::all(),
            Change::Appearance => Dirty::DRAW,
        }
    }
}

#[derive(Debug)]
pub struct StateManager {
    dirty: Dirty,
    ready: bool,
    setup_pending: bool,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManager {
    pub fn new() -> Self {
        Self {
            dirty: Dirty::all(),
            ready: false,
            setup_pending: false,
        }
    }

    /// Records `change`. Returns `true` when the host should be asked to
    /// redraw; before [`finish_construction`](Self::finish_construction) the
    /// work is only queued.
    pub fn mark(&mut self, change: Change) -> bool {
        self.dirty |= change.dirties();
        if !self.ready {
            self.setup_pending = true;
            return false;
        }
        true
    }

    /// Ends construction. Returns `true` if a setup was queued meanwhile.
    pub fn finish_construction(&mut self) -> bool {
        self.ready = true;
        std::mem::take(&mut self.setup_pending)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_setup_pending(&self) -> bool {
        self.setup_pending
    }

    pub fn dirty(&self) -> Dirty {
        self.dirty
    }

    pub fn is_dirty(&self, flag: Dirty) -> bool {
        self.dirty.intersects(flag)
    }

    /// Clears `flag` after its value has been recomputed.
    pub fn clear(&mut self, flag: Dirty) {
        self.dirty.remove(flag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> StateManager {
        let mut s = StateManager::new();
        s.finish_construction();
        s.clear(Dirty::all());
        s
    }

    #[test]
    fn starts_fully_dirty_and_not_ready() {
        let s = StateManager::new();
        assert!(!s.is_ready());
        assert_eq!(s.dirty(), Dirty::all());
    }

    #[test]
    fn mutations_before_ready_are_queued() {
        let mut s = StateManager::new();
        assert!(!s.mark(Change::Appearance));
        assert!(s.is_setup_pending());
        assert!(s.finish_construction());
        assert!(!s.is_setup_pending());
        assert!(!s.finish_construction());
    }

    #[test]
    fn appearance_only_dirties_draw() {
        let mut s = ready();
        assert!(s.mark(Change::Appearance));
        assert_eq!(s.dirty(), Dirty::DRAW);
    }

    #[test]
    fn layout_and_content_cascade() {
        let mut s = ready();
        s.mark(Change::Layout);
        assert_eq!(s.dirty(), Dirty::all());
        s.clear(Dirty::all());
        s.mark(Change::Content);
        assert_eq!(s.dirty(), Dirty::all());
    }

    #[test]
    fn clear_is_per_flag() {
        let mut s = ready();
        s.mark(Change::Layout);
        s.clear(Dirty::GEOMETRY);
        assert!(!s.is_dirty(Dirty::GEOMETRY));
        assert!(s.is_dirty(Dirty::SHADER | Dirty::DRAW));
    }
}
