/// Keyboard selection over the prompt list.
///
/// `None` is the "no selection yet" state (`-1`). Movement against an empty
/// list is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor(Option<usize>);

impl Cursor {
    pub const NONE: Self = Self(None);

    pub fn at(index: usize) -> Self {
        Self(Some(index))
    }

    pub fn index(self) -> Option<usize> {
        self.0
    }

    /// Signed form, `-1` when nothing is selected.
    pub fn raw(self) -> isize {
        match self.0 {
            Some(index) => index as isize,
            None => -1,
        }
    }

    /// Move forward, wrapping from the last index to 0.
    pub fn next(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let next = match self.0 {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.set(next)
    }

    /// Move backward, wrapping from 0 to the last index.
    ///
    /// Without a selection this lands on the last index, the same as moving
    /// back from 0.
    pub fn previous(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let prev = match self.0 {
            Some(index) if index > 0 && index < len => index - 1,
            _ => len - 1,
        };
        self.set(prev)
    }

    fn set(&mut self, index: usize) -> bool {
        let changed = self.0 != Some(index);
        self.0 = Some(index);
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/cursor.rs"]
mod tests;
