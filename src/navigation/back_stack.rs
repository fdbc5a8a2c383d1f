/// Stack of navigation entries. The root entry is never popped.
#[derive(Debug)]
pub struct BackStack<E> {
    entries: Vec<E>,
}

impl<E> BackStack<E> {
    pub fn new(root: E) -> Self {
        Self {
            entries: vec![root],
        }
    }

    pub fn push(&mut self, entry: E) {
        self.entries.push(entry);
    }

    /// Remove and return the top entry. `None` at the root.
    pub fn pop(&mut self) -> Option<E> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> &E {
        // Non-empty: the root is never popped.
        &self.entries[self.entries.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut E {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.entries.len() == 1
    }
}
