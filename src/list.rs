//! Shopping List Controller
//!
//! Owns the ordered list of entries and mirrors it to storage on every
//! mutation. Knows nothing about the DOM; components read from it through
//! [`ListController::display_entries`] and [`ListController::stats`].

use log::{debug, error, info, warn};

use crate::models::{DisplayEntry, FilterMode, Item, ItemId, ListEntry, Stats};
use crate::storage::{self, KeyValueStore};

/// Placeholder rows shown while nothing has been saved yet
const DEMO_ITEMS: [(&str, bool); 2] = [("Milk", false), ("Eggs", true)];

const DEMO_SUFFIX: &str = " (example)";

/// Demo placeholders vs. the real list. `Real` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Demo,
    Real,
}

#[derive(Debug, Clone)]
pub struct ListController<S: KeyValueStore> {
    store: S,
    key: String,
    mode: ListMode,
    entries: Vec<ListEntry>,
    next_id: ItemId,
}

impl<S: KeyValueStore> ListController<S> {
    /// Load the persisted list, falling back to demo mode when it is empty,
    /// absent or malformed. Nothing is written here.
    pub fn initialize(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let saved = match storage::load_json::<Vec<Item>>(&store, &key) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                warn!("Ignoring stored list under {:?}: {}", key, e);
                Vec::new()
            }
        };

        let mut controller = Self {
            store,
            key,
            mode: ListMode::Demo,
            entries: Vec::new(),
            next_id: 1,
        };

        for item in saved {
            let text = item.text.trim();
            if text.is_empty() {
                continue;
            }
            controller.push(Item { text: text.to_string(), got: item.got });
        }

        if !controller.entries.is_empty() {
            controller.mode = ListMode::Real;
        }
        info!(
            "List initialized: mode={:?}, {} entries",
            controller.mode,
            controller.entries.len()
        );
        controller
    }

    pub fn is_demo(&self) -> bool {
        self.mode == ListMode::Demo
    }

    /// Real entries in display order
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Append a new unchecked item. Whitespace-only text is ignored.
    /// The first real addition clears the demo placeholders.
    pub fn add_item(&mut self, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if self.mode == ListMode::Demo {
            debug!("Leaving demo mode");
            self.mode = ListMode::Real;
        }

        let id = self.push(Item::new(text));
        debug!("Added item #{} {:?}", id, text);
        self.persist();
        Some(id)
    }

    /// Flip `got` on the entry with this id. Returns the new value.
    pub fn toggle(&mut self, id: ItemId) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.item.got = !entry.item.got;
        let got = entry.item.got;
        debug!("Toggled item #{} -> got={}", id, got);
        self.persist();
        Some(got)
    }

    /// Delete the entry with this id. Returns the removed item.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(index).item;
        debug!("Removed item #{} {:?}", id, removed.text);
        self.persist();
        Some(removed)
    }

    /// Counts over real entries; demo rows never count
    pub fn stats(&self) -> Stats {
        Stats::from_items(self.entries().iter().map(|e| &e.item))
    }

    /// Rows to render under `filter`. Demo rows ignore the filter.
    pub fn display_entries(&self, filter: FilterMode) -> Vec<DisplayEntry> {
        match self.mode {
            ListMode::Demo => DEMO_ITEMS
                .iter()
                .map(|(text, got)| DisplayEntry {
                    id: None,
                    text: format!("{}{}", text, DEMO_SUFFIX),
                    got: *got,
                    demo: true,
                })
                .collect(),
            ListMode::Real => self
                .entries
                .iter()
                .filter(|e| filter.shows(e.item.got))
                .map(|e| DisplayEntry {
                    id: Some(e.id),
                    text: e.item.text.clone(),
                    got: e.item.got,
                    demo: false,
                })
                .collect(),
        }
    }

    fn push(&mut self, item: Item) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ListEntry { id, item });
        id
    }

    /// Write the whole list; failures are logged and otherwise ignored
    fn persist(&self) {
        let items: Vec<&Item> = self.entries().iter().map(|e| &e.item).collect();
        if let Err(e) = storage::save_json(&self.store, &self.key, &items) {
            error!("Failed to save list under {:?}: {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ITEMS_KEY;
    use crate::error::{StoreError, StoreResult};
    use crate::storage::MemoryStorage;
    use proptest::prelude::*;

    fn empty_list() -> (MemoryStorage, ListController<MemoryStorage>) {
        let store = MemoryStorage::new();
        let list = ListController::initialize(store.clone(), ITEMS_KEY);
        (store, list)
    }

    fn saved_items(store: &MemoryStorage) -> Vec<Item> {
        storage::load_json(store, ITEMS_KEY).unwrap().unwrap_or_default()
    }

    fn assert_stats_consistent(list: &ListController<MemoryStorage>) {
        let stats = list.stats();
        assert_eq!(stats.remaining, stats.total - stats.got);
        assert_eq!(stats.total, list.entries().len());
    }

    #[test]
    fn test_empty_storage_shows_demo() {
        let (store, list) = empty_list();

        assert!(list.is_demo());
        let rows = list.display_entries(FilterMode::All);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "Milk (example)");
        assert!(!rows[0].got);
        assert_eq!(rows[1].text, "Eggs (example)");
        assert!(rows[1].got);
        assert!(rows.iter().all(|r| r.demo && r.id.is_none()));

        assert_eq!(list.stats(), Stats::default());
        assert!(!store.contains(ITEMS_KEY));
    }

    #[test]
    fn test_empty_array_shows_demo() {
        let store = MemoryStorage::new().with_item(ITEMS_KEY, "[]");
        let list = ListController::initialize(store, ITEMS_KEY);
        assert!(list.is_demo());
    }

    #[test]
    fn test_malformed_storage_falls_back_to_demo() {
        for raw in ["not json", r#"{"text":"Milk"}"#, r#"[{"name":"Milk"}]"#, "42"] {
            let store = MemoryStorage::new().with_item(ITEMS_KEY, raw);
            let list = ListController::initialize(store, ITEMS_KEY);
            assert!(list.is_demo(), "expected demo for {:?}", raw);
            assert_eq!(list.stats().total, 0);
        }
    }

    #[test]
    fn test_loads_saved_items_in_order() {
        let store = MemoryStorage::new().with_item(
            ITEMS_KEY,
            r#"[{"text":"Milk","got":true},{"text":"Bread","got":false}]"#,
        );
        let list = ListController::initialize(store, ITEMS_KEY);

        assert!(!list.is_demo());
        let texts: Vec<_> = list.entries().iter().map(|e| e.item.text.as_str()).collect();
        assert_eq!(texts, vec!["Milk", "Bread"]);
        assert_eq!(list.stats(), Stats { total: 2, got: 1, remaining: 1 });
    }

    #[test]
    fn test_blank_stored_entries_dropped() {
        let store = MemoryStorage::new().with_item(
            ITEMS_KEY,
            r#"[{"text":"  ","got":true},{"text":" B ","got":false}]"#,
        );
        let list = ListController::initialize(store, ITEMS_KEY);

        assert!(!list.is_demo());
        assert_eq!(list.entries().len(), 1);
        assert_eq!(list.entries()[0].item, Item::new("B"));
        assert_eq!(list.stats(), Stats { total: 1, got: 0, remaining: 1 });
    }

    #[test]
    fn test_all_blank_stored_entries_show_demo() {
        let store = MemoryStorage::new().with_item(
            ITEMS_KEY,
            r#"[{"text":"","got":false},{"text":"   ","got":true}]"#,
        );
        let list = ListController::initialize(store, ITEMS_KEY);

        assert!(list.is_demo());
        assert_eq!(list.display_entries(FilterMode::All).len(), 2);
        assert_eq!(list.stats(), Stats::default());
    }

    /// Store whose writes always fail
    struct FailingWrites;

    impl KeyValueStore for FailingWrites {
        fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Write("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_failed_writes_keep_memory_state() {
        let mut list = ListController::initialize(FailingWrites, ITEMS_KEY);
        let milk = list.add_item("Milk").unwrap();
        let eggs = list.add_item("Eggs").unwrap();

        assert_eq!(list.toggle(milk), Some(true));
        assert_eq!(list.stats(), Stats { total: 2, got: 1, remaining: 1 });

        assert_eq!(list.remove(eggs), Some(Item::new("Eggs")));
        assert!(!list.is_demo());
        assert_eq!(list.stats(), Stats { total: 1, got: 1, remaining: 0 });
    }

    #[test]
    fn test_whitespace_add_is_noop() {
        let (store, mut list) = empty_list();
        assert_eq!(list.add_item("   "), None);
        assert_eq!(list.add_item(""), None);
        assert_eq!(list.stats().total, 0);
        assert!(list.is_demo());
        assert!(!store.contains(ITEMS_KEY));
    }

    #[test]
    fn test_first_add_clears_demo() {
        let (_store, mut list) = empty_list();
        list.add_item("Bread").unwrap();

        assert!(!list.is_demo());
        let rows = list.display_entries(FilterMode::All);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "Bread");
        assert!(!rows[0].demo);
    }

    #[test]
    fn test_add_trims_and_reloads() {
        let (store, mut list) = empty_list();
        list.add_item("  Bread ").unwrap();

        assert_eq!(saved_items(&store), vec![Item::new("Bread")]);
        let reloaded = ListController::initialize(store.clone(), ITEMS_KEY);
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.entries()[0].item, Item::new("Bread"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (store, mut list) = empty_list();
        let id = list.add_item("Eggs").unwrap();
        let before = list.stats();

        assert_eq!(list.toggle(id), Some(true));
        assert_eq!(list.stats().got, before.got + 1);
        assert!(saved_items(&store)[0].got);

        assert_eq!(list.toggle(id), Some(false));
        assert_eq!(list.stats(), before);
        assert!(!saved_items(&store)[0].got);
    }

    #[test]
    fn test_remove_persists_and_updates_counts() {
        let (store, mut list) = empty_list();
        let milk = list.add_item("Milk").unwrap();
        let eggs = list.add_item("Eggs").unwrap();
        list.toggle(milk);

        assert_eq!(list.remove(milk), Some(Item { text: "Milk".into(), got: true }));
        assert_eq!(list.stats(), Stats { total: 1, got: 0, remaining: 1 });
        assert_eq!(saved_items(&store), vec![Item::new("Eggs")]);

        assert_eq!(list.remove(milk), None);
        assert!(list.remove(eggs).is_some());
        assert_eq!(saved_items(&store), Vec::<Item>::new());
    }

    #[test]
    fn test_removing_everything_stays_real() {
        let (_store, mut list) = empty_list();
        let id = list.add_item("Milk").unwrap();
        list.remove(id);

        assert!(!list.is_demo());
        assert!(list.display_entries(FilterMode::All).is_empty());
    }

    #[test]
    fn test_duplicates_are_distinct() {
        let (store, mut list) = empty_list();
        let first = list.add_item("Milk").unwrap();
        let second = list.add_item("Milk").unwrap();
        assert_ne!(first, second);

        list.toggle(second);
        list.remove(first);

        assert_eq!(list.entries().len(), 1);
        assert_eq!(list.entries()[0].id, second);
        assert_eq!(saved_items(&store), vec![Item { text: "Milk".into(), got: true }]);
    }

    #[test]
    fn test_demo_rows_not_interactive() {
        let (store, mut list) = empty_list();
        // Demo rows have no id, so no id can reach them
        assert_eq!(list.toggle(1), None);
        assert_eq!(list.remove(1), None);
        assert!(list.is_demo());
        assert!(!store.contains(ITEMS_KEY));
    }

    #[test]
    fn test_filter_got_and_need() {
        let (_store, mut list) = empty_list();
        let milk = list.add_item("Milk").unwrap();
        list.add_item("Bread").unwrap();
        list.toggle(milk);

        let got: Vec<_> = list.display_entries(FilterMode::Got).into_iter().map(|r| r.text).collect();
        assert_eq!(got, vec!["Milk"]);
        let need: Vec<_> = list.display_entries(FilterMode::Need).into_iter().map(|r| r.text).collect();
        assert_eq!(need, vec!["Bread"]);
        assert_eq!(list.display_entries(FilterMode::All).len(), 2);
        assert_eq!(list.stats().total, 2);
    }

    #[test]
    fn test_filter_keeps_demo_visible() {
        let (_store, list) = empty_list();
        for filter in FilterMode::ALL {
            assert_eq!(list.display_entries(filter).len(), 2);
        }
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Toggle(usize),
        Remove(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[ a-z]{0,6}".prop_map(Op::Add),
            (0usize..8).prop_map(Op::Toggle),
            (0usize..8).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn prop_stats_invariant(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let (store, mut list) = empty_list();
            for op in ops {
                match op {
                    Op::Add(text) => { list.add_item(&text); }
                    Op::Toggle(i) => {
                        if let Some(id) = list.entries().get(i).map(|e| e.id) {
                            list.toggle(id);
                        }
                    }
                    Op::Remove(i) => {
                        if let Some(id) = list.entries().get(i).map(|e| e.id) {
                            list.remove(id);
                        }
                    }
                }
                assert_stats_consistent(&list);
                if !list.is_demo() {
                    let saved = saved_items(&store);
                    prop_assert_eq!(saved.len(), list.stats().total);
                }
            }
        }
    }
}
