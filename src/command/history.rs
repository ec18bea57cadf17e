use log::trace;

use super::Mutation;

/// Linear undo/redo log.
///
/// Entries at or after `cursor` are the mutations that were undone and not yet
/// redone. Adding a mutation while such entries exist discards them.
#[derive(Debug)]
pub struct HistoryBuffer {
    entries: Vec<Mutation>,
    cursor: usize,
    // Handed out when there is nothing in the requested direction
    start: Mutation,
    blank: Mutation,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            start: Mutation::SentinelStart,
            blank: Mutation::SentinelBlank,
        }
    }

    /// Drops the undone entries, then appends `mutation` after the cursor.
    pub fn add(&mut self, mutation: Mutation) {
        if self.cursor < self.entries.len() {
            trace!(
                "Discarding {} undone entries",
                self.entries.len() - self.cursor
            );
            self.entries.truncate(self.cursor);
        }
        self.entries.push(mutation);
        self.cursor = self.entries.len();
    }

    /// Steps back and returns the mutation to undo.
    pub fn get_previous(&mut self) -> &Mutation {
        if self.cursor == 0 {
            return &self.start;
        }
        self.cursor -= 1;
        &self.entries[self.cursor]
    }

    /// Returns the mutation to redo and steps past it.
    pub fn get_next(&mut self) -> &Mutation {
        match self.entries.get(self.cursor) {
            Some(mutation) => {
                self.cursor += 1;
                mutation
            }
            None => &self.blank,
        }
    }

    pub fn peek_previous(&self) -> &Mutation {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .unwrap_or(&self.start)
    }

    /// Mutable access to the entry just before the cursor, used to keep a
    /// move up to date while its drag is still going on.
    pub fn peek_previous_mut(&mut self) -> &mut Mutation {
        match self.cursor.checked_sub(1) {
            Some(index) => &mut self.entries[index],
            None => {
                self.start = Mutation::SentinelStart;
                &mut self.start
            }
        }
    }

    pub fn peek_next(&self) -> &Mutation {
        self.entries.get(self.cursor).unwrap_or(&self.blank)
    }

    /// Forget every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if there are mutations that can be undone
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns true if there are mutations that can be redone
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn entries(&self) -> &[Mutation] {
        &self.entries
    }
}
