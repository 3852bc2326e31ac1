use crate::domain_models::{OperationKey, ReviewUnit};

/// The visible list of review units and the cursor into it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewListState {
    pub units: Vec<ReviewUnit>,
    pub selected: usize,
}

impl ReviewListState {
    pub fn new(units: Vec<ReviewUnit>) -> Self {
        Self { units, selected: 0 }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn selected_unit(&self) -> Option<&ReviewUnit> {
        self.units.get(self.selected)
    }

    pub fn contains(&self, key: &OperationKey) -> bool {
        self.units.iter().any(|unit| &unit.key() == key)
    }

    /// Remove the unit with the given key, keeping the cursor in bounds
    pub fn remove(&mut self, key: &OperationKey) -> Option<ReviewUnit> {
        let index = self.units.iter().position(|unit| &unit.key() == key)?;
        let removed = self.units.remove(index);
        if index < self.selected {
            self.selected -= 1;
        }
        self.clamp_cursor();
        Some(removed)
    }

    pub fn next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.units.len().saturating_sub(1);
    }

    pub fn page_down(&mut self, page_size: usize) {
        self.select(self.selected.saturating_add(page_size.max(1)));
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.select(self.selected.saturating_sub(page_size.max(1)));
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        self.selected = self.selected.min(self.units.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(count: u64) -> ReviewListState {
        ReviewListState::new(
            (1..=count)
                .map(|n| ReviewUnit::new("org/app", n, format!("Bump dep{}", n)))
                .collect(),
        )
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut list = list(3);
        list.previous();
        assert_eq!(list.selected, 0);
        list.next();
        list.next();
        list.next();
        assert_eq!(list.selected, 2);
        list.first();
        assert_eq!(list.selected, 0);
        list.page_down(10);
        assert_eq!(list.selected, 2);
        list.page_up(1);
        assert_eq!(list.selected, 1);
    }

    #[test]
    fn test_remove_last_moves_cursor_up() {
        let mut list = list(3);
        list.last();
        let removed = list.remove(&OperationKey::new("org/app", 3)).unwrap();
        assert_eq!(removed.number, 3);
        assert_eq!(list.selected, 1);
        assert_eq!(list.selected_unit().unwrap().number, 2);
    }

    #[test]
    fn test_remove_before_cursor_keeps_selection() {
        let mut list = list(3);
        list.last();
        list.remove(&OperationKey::new("org/app", 1));
        assert_eq!(list.selected_unit().unwrap().number, 3);
    }

    #[test]
    fn test_remove_unknown_key() {
        let mut list = list(1);
        assert!(list.remove(&OperationKey::new("org/app", 9)).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let mut list = list(0);
        list.next();
        list.last();
        assert_eq!(list.selected, 0);
        assert!(list.selected_unit().is_none());
    }
}
