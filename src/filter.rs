use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::catalog::Catalog;
use crate::model::{CoffeeRecipe, Temperature};

/// Which recipes are visible for the currently selected temperature
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub selected: Option<Temperature>,
    pub visible: Vec<Arc<CoffeeRecipe>>,
}

impl FilterState {
    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible.iter().map(|recipe| recipe.id.as_str()).collect()
    }
}

/// Handle returned by [`RecipeFilter::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&FilterState)>;

/// Temperature filter over a shared catalog.
///
/// `visible` is always recomputed from the catalog and the selected
/// temperature; nothing else mutates it.
pub struct RecipeFilter {
    catalog: Arc<Catalog>,
    state: FilterState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl RecipeFilter {
    /// Start unfiltered, showing the whole catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let state = compute_state(&catalog, None);
        RecipeFilter {
            catalog,
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Select a temperature, or `None` to show everything.
    ///
    /// Subscribers are notified only when the selection changes.
    pub fn set_filter(&mut self, temperature: Option<Temperature>) {
        let changed = self.state.selected != temperature;
        self.state = compute_state(&self.catalog, temperature);
        debug!(
            "Filter set to {:?}: {} recipes visible",
            temperature,
            self.state.visible.len()
        );

        if changed {
            for (_, listener) in &self.listeners {
                listener(&self.state);
            }
        }
    }

    /// Filter from free-form input; unrecognized values clear the filter
    pub fn set_filter_str(&mut self, value: &str) {
        self.set_filter(Temperature::parse_filter(value));
    }

    pub fn current(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Register a callback invoked after every change of the selection
    pub fn subscribe(&mut self, listener: impl Fn(&FilterState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback; returns false when the id was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl fmt::Debug for RecipeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeFilter")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn compute_state(catalog: &Catalog, selected: Option<Temperature>) -> FilterState {
    let visible = catalog
        .iter()
        .filter(|recipe| selected.map_or(true, |t| recipe.temperature == t))
        .cloned()
        .collect();
    FilterState { selected, visible }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn filter() -> RecipeFilter {
        RecipeFilter::new(Arc::new(Catalog::embedded().unwrap()))
    }

    #[test]
    fn test_starts_unfiltered() {
        let filter = filter();
        assert_eq!(filter.current().selected, None);
        assert_eq!(filter.current().visible.len(), filter.catalog().len());
    }

    #[test]
    fn test_only_matching_temperature_is_visible() {
        let mut filter = filter();
        filter.set_filter(Some(Temperature::Cold));
        assert!(!filter.current().visible.is_empty());
        assert!(filter
            .current()
            .visible
            .iter()
            .all(|r| r.temperature == Temperature::Cold));
    }

    #[test]
    fn test_subscribers_notified_on_change_only() {
        let mut filter = filter();
        let seen: Rc<RefCell<Vec<Option<Temperature>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        filter.subscribe(move |state| sink.borrow_mut().push(state.selected));

        filter.set_filter(Some(Temperature::Hot));
        filter.set_filter(Some(Temperature::Hot));
        filter.set_filter(None);

        assert_eq!(*seen.borrow(), vec![Some(Temperature::Hot), None]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut filter = filter();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = filter.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(filter.unsubscribe(id));
        assert!(!filter.unsubscribe(id));
        filter.set_filter(Some(Temperature::Cold));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_unrecognized_string_clears_filter() {
        let mut filter = filter();
        filter.set_filter_str("cold");
        assert_eq!(filter.current().selected, Some(Temperature::Cold));
        filter.set_filter_str("lukewarm");
        assert_eq!(filter.current().selected, None);
        assert_eq!(filter.current().visible.len(), filter.catalog().len());
    }
}
