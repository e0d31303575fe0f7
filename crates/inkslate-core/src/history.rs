//! Generic past/present/future history store.
//!
//! Used once for the diagram element sequence and, independently, by the
//! plain-text editor for its string value; both share this contract but
//! have disjoint state.

/// Linear undo history over any cloneable value.
///
/// No operation ever fails: `undo`/`redo` silently no-op at the stack
/// boundaries and report whether the present value changed.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: Vec<T>,
    present: T,
    future: Vec<T>,
}

impl<T: Clone> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: Vec::new(),
        }
    }

    /// Current committed value.
    pub fn state(&self) -> &T {
        &self.present
    }

    /// Commit a new present: the old present moves into the past and any
    /// redo branch is discarded.
    pub fn set(&mut self, next: T) {
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();
    }

    /// Step back one state. Returns whether the present changed.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push(current);
                true
            }
            None => false,
        }
    }

    /// Step forward one undone state. Returns whether the present changed.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.present, next);
                self.past.push(current);
                true
            }
            None => false,
        }
    }

    /// Drop all history and seed a fresh present. Used when the engine is
    /// handed a brand-new snapshot from outside, e.g. a document switch.
    pub fn reset(&mut self, value: T) {
        self.past.clear();
        self.future.clear();
        self.present = value;
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_redo_round_trip_restores_state() {
        let mut history = History::new(0);
        for value in 1..=5 {
            history.set(value);
        }
        let before = *history.state();

        let mut undone = 0;
        while history.undo() {
            undone += 1;
        }
        assert_eq!(undone, 5);
        assert_eq!(*history.state(), 0);

        for _ in 0..undone {
            assert!(history.redo());
        }
        assert_eq!(*history.state(), before);
        assert!(!history.can_redo());
    }

    #[test]
    fn set_clears_the_redo_branch() {
        let mut history = History::new("a".to_string());
        history.set("b".into());
        assert!(history.undo());
        assert!(history.can_redo());

        history.set("c".into());
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.state(), "c");
    }

    #[test]
    fn boundary_operations_are_silent_no_ops() {
        let mut history = History::new(1);
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(*history.state(), 1);
    }

    #[test]
    fn reset_discards_all_history() {
        let mut history = History::new(1);
        history.set(2);
        history.set(3);
        history.undo();

        history.reset(99);
        assert_eq!(*history.state(), 99);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn works_for_the_text_editor_string_value() {
        let mut history = History::new(String::new());
        history.set("draft".into());
        history.set("draft two".into());
        assert!(history.undo());
        assert_eq!(history.state(), "draft");
    }
}
