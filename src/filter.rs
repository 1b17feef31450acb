//! Search and sort over the task list.
//!
//! Sorting is a projection: the store keeps insertion order and this engine
//! hands back an index permutation, so cycling back to `Default` always
//! restores the original order.

use crate::domain::{SortMode, Task};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default)]
pub struct FilterSort {
    search_term: String,
    sort_mode: SortMode,
}

impl FilterSort {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Store the lowercased search term
    pub fn set_search_term(&mut self, text: &str) {
        self.search_term = text.to_lowercase();
    }

    /// Advance default -> priority -> alphabetical -> default
    pub fn cycle_sort_mode(&mut self) -> SortMode {
        self.sort_mode = self.sort_mode.next();
        self.sort_mode
    }

    /// Case-insensitive substring match; an empty term matches everything
    pub fn is_visible(&self, task: &Task) -> bool {
        self.search_term.is_empty() || task.search_text().contains(&self.search_term)
    }

    /// Visibility flag per task, in insertion order
    pub fn visibility(&self, tasks: &[Task]) -> Vec<bool> {
        tasks.iter().map(|t| self.is_visible(t)).collect()
    }

    /// Indexes of all tasks in the current sort order, hidden ones included
    pub fn sorted_order(&self, tasks: &[Task]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..tasks.len()).collect();
        match self.sort_mode {
            SortMode::Default => {}
            // stable sort, ties keep insertion order
            SortMode::Priority => {
                order.sort_by_key(|&i| tasks[i].priority.rank());
            }
            SortMode::Alphabetical => {
                let keys: Vec<String> = tasks.iter().map(|t| t.search_text()).collect();
                let compare = text_comparator();
                order.sort_by(|&a, &b| compare(&keys[a], &keys[b]));
            }
        }
        order
    }

    /// Indexes of the visible tasks in the current sort order
    pub fn display_order(&self, tasks: &[Task]) -> Vec<usize> {
        let visible = self.visibility(tasks);
        self.sorted_order(tasks)
            .into_iter()
            .filter(|&i| visible[i])
            .collect()
    }
}

/// Locale-aware comparison using root collation. Falls back to codepoint
/// order if collation data can't be loaded.
fn text_comparator() -> Box<dyn Fn(&str, &str) -> Ordering> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Box::new(move |a: &str, b: &str| collator.compare(a, b)),
        Err(e) => {
            log::warn!("Collation unavailable, sorting by codepoint: {}", e);
            Box::new(|a: &str, b: &str| a.cmp(b))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use pretty_assertions::assert_eq;

    fn task(text: &str, priority: Priority) -> Task {
        let mut t = Task::new(text.to_string());
        t.priority = priority;
        t
    }

    fn scenario() -> Vec<Task> {
        vec![
            task("Buy milk", Priority::Medium),
            task("Call Alice", Priority::High),
            task("Pay rent", Priority::Low),
        ]
    }

    fn texts(tasks: &[Task], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| tasks[i].text.clone()).collect()
    }

    #[test]
    fn test_priority_sort_scenario() {
        let tasks = scenario();
        let mut engine = FilterSort::new();

        assert_eq!(engine.cycle_sort_mode(), SortMode::Priority);
        assert_eq!(
            texts(&tasks, &engine.display_order(&tasks)),
            vec!["Call Alice", "Buy milk", "Pay rent"]
        );
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let tasks = vec![
            task("first", Priority::Low),
            task("second", Priority::High),
            task("third", Priority::Low),
            task("fourth", Priority::High),
        ];
        let mut engine = FilterSort::new();
        engine.cycle_sort_mode();

        assert_eq!(
            texts(&tasks, &engine.display_order(&tasks)),
            vec!["second", "fourth", "first", "third"]
        );
    }

    #[test]
    fn test_alphabetical_sort_ignores_case() {
        let tasks = vec![
            task("banana", Priority::Medium),
            task("Apple", Priority::Medium),
            task("cherry", Priority::Medium),
        ];
        let mut engine = FilterSort::new();
        engine.cycle_sort_mode();
        assert_eq!(engine.cycle_sort_mode(), SortMode::Alphabetical);

        assert_eq!(
            texts(&tasks, &engine.display_order(&tasks)),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_alphabetical_sort_collates_accents_and_punctuation() {
        let tasks = vec![
            task("zebra", Priority::Medium),
            task("Éclair", Priority::Medium),
            task("apple", Priority::Medium),
            task("_notes", Priority::Medium),
        ];
        let mut engine = FilterSort::new();
        engine.cycle_sort_mode();
        engine.cycle_sort_mode();

        assert_eq!(
            texts(&tasks, &engine.display_order(&tasks)),
            vec!["_notes", "apple", "Éclair", "zebra"]
        );
    }

    #[test]
    fn test_alphabetical_ties_keep_insertion_order() {
        let tasks = vec![
            task("Report", Priority::Low),
            task("report", Priority::High),
            task("Alpha", Priority::Medium),
        ];
        let mut engine = FilterSort::new();
        engine.cycle_sort_mode();
        engine.cycle_sort_mode();

        assert_eq!(engine.display_order(&tasks), vec![2, 0, 1]);
    }

    #[test]
    fn test_three_cycles_restore_insertion_order() {
        let tasks = scenario();
        let mut engine = FilterSort::new();
        let original = engine.display_order(&tasks);

        engine.cycle_sort_mode();
        engine.cycle_sort_mode();
        assert_eq!(engine.cycle_sort_mode(), SortMode::Default);
        assert_eq!(engine.display_order(&tasks), original);
        assert_eq!(original, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_search_shows_all() {
        let tasks = scenario();
        let mut engine = FilterSort::new();
        engine.set_search_term("");
        assert_eq!(engine.visibility(&tasks), vec![true, true, true]);
    }

    #[test]
    fn test_search_full_text_matches_superstrings() {
        let mut tasks = scenario();
        tasks.push(task("Buy milk and eggs", Priority::Low));
        let mut engine = FilterSort::new();

        engine.set_search_term("BUY MILK");
        assert_eq!(engine.search_term(), "buy milk");
        assert_eq!(
            texts(&tasks, &engine.display_order(&tasks)),
            vec!["Buy milk", "Buy milk and eggs"]
        );
    }

    #[test]
    fn test_search_is_substring_not_token() {
        let tasks = scenario();
        let mut engine = FilterSort::new();
        engine.set_search_term("ll a");
        assert_eq!(engine.visibility(&tasks), vec![false, true, false]);
    }

    #[test]
    fn test_search_and_sort_combine() {
        let tasks = scenario();
        let mut engine = FilterSort::new();
        engine.cycle_sort_mode();
        engine.set_search_term("a");

        // "Buy milk" has no 'a'
        assert_eq!(
            texts(&tasks, &engine.display_order(&tasks)),
            vec!["Call Alice", "Pay rent"]
        );
        assert_eq!(engine.sorted_order(&tasks).len(), 3);
    }
}
