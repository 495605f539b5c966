use crate::domain::{CatalogEntry, MAX_COMPARE};

/// Result of a toggle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Seventh add attempt; the selection is unchanged.
    Rejected,
}

/// The ordered, capacity-bounded set of creatures under comparison. Entries
/// are unique by id and keep insertion order, which also fixes their chart
/// color.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    entries: Vec<CatalogEntry>,
}

impl Selection {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Removes the entry if present (keeping relative order of the rest),
    /// appends it if there is room, and rejects the toggle at capacity.
    pub fn toggle(&mut self, entry: &CatalogEntry) -> ToggleOutcome {
        if let Some(position) = self.entries.iter().position(|held| held.id == entry.id) {
            self.entries.remove(position);
            return ToggleOutcome::Removed;
        }

        if self.entries.len() >= MAX_COMPARE {
            return ToggleOutcome::Rejected;
        }

        self.entries.push(entry.clone());
        ToggleOutcome::Added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, name: &str) -> CatalogEntry {
        CatalogEntry::new(id, name, format!("https://pokeapi.co/api/v2/pokemon/{id}/"))
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new();
        let bulbasaur = entry(1, "bulbasaur");

        assert_eq!(selection.toggle(&bulbasaur), ToggleOutcome::Added);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.toggle(&bulbasaur), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn double_toggle_restores_prior_order() {
        let mut selection = Selection::new();
        for id in 1..=3 {
            selection.toggle(&entry(id, "x"));
        }
        let before: Vec<u32> = selection.entries().iter().map(|e| e.id).collect();

        let squirtle = entry(7, "squirtle");
        selection.toggle(&squirtle);
        selection.toggle(&squirtle);

        let after: Vec<u32> = selection.entries().iter().map(|e| e.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn removal_preserves_relative_order() {
        let mut selection = Selection::new();
        let bulbasaur = entry(1, "bulbasaur");
        let charmander = entry(2, "charmander");

        selection.toggle(&bulbasaur);
        selection.toggle(&charmander);
        selection.toggle(&bulbasaur);

        let names: Vec<&str> = selection
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["charmander"]);
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let mut selection = Selection::new();
        for id in 1..=20 {
            selection.toggle(&entry(id, "x"));
            assert!(selection.len() <= MAX_COMPARE);
        }
    }

    #[test]
    fn seventh_add_is_rejected_without_change() {
        let mut selection = Selection::new();
        for id in 1..=6 {
            assert_eq!(selection.toggle(&entry(id, "x")), ToggleOutcome::Added);
        }
        let before: Vec<u32> = selection.entries().iter().map(|e| e.id).collect();

        assert_eq!(selection.toggle(&entry(7, "y")), ToggleOutcome::Rejected);

        let after: Vec<u32> = selection.entries().iter().map(|e| e.id).collect();
        assert_eq!(before, after);
        assert_eq!(selection.len(), 6);
    }
}
