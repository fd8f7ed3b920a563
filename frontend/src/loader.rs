use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::supabase::FetchError;

/// Turns a section fetch into displayable content. Failures never reach
/// the page; they are logged and replaced by the section's fallback.
pub fn settle<T>(result: Result<T, FetchError>, fallback: impl FnOnce() -> T, section: &str) -> T {
    match result {
        Ok(content) => content,
        Err(e) => {
            error!("Error fetching {} data: {}", section, e);
            fallback()
        }
    }
}

/// Rows that carry an explicit display position.
pub trait Ordered {
    fn order_index(&self) -> i32;

    fn is_active(&self) -> bool {
        true
    }
}

/// Serde default for rows whose table has no `active` column.
pub fn default_active() -> bool {
    true
}

/// Active items in ascending `order_index`. The sort is stable, so equal
/// keys keep the order the backend returned them in.
pub fn in_display_order<T: Ordered>(mut items: Vec<T>) -> Vec<T> {
    items.retain(|item| item.is_active());
    items.sort_by_key(|item| item.order_index());
    items
}

#[derive(Debug, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(Rc<T>),
}

impl<T> Clone for Load<T> {
    fn clone(&self) -> Self {
        match self {
            Load::Loading => Load::Loading,
            Load::Ready(content) => Load::Ready(content.clone()),
        }
    }
}

/// Runs `load` once on mount. A result that arrives after the component
/// is gone is dropped.
#[hook]
pub fn use_loader<T, F, Fut>(load: F) -> Load<T>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = T> + 'static,
{
    let state = use_state(|| Load::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let still_mounted = alive.clone();
                spawn_local(async move {
                    let content = load().await;
                    if still_mounted.get() {
                        state.set(Load::Ready(Rc::new(content)));
                    }
                });
                move || alive.set(false)
            },
            (),
        );
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: &'static str,
        order_index: i32,
        active: bool,
    }

    impl Ordered for Row {
        fn order_index(&self) -> i32 {
            self.order_index
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }

    fn row(id: &'static str, order_index: i32, active: bool) -> Row {
        Row {
            id,
            order_index,
            active,
        }
    }

    #[test]
    fn settle_keeps_fetched_content() {
        let content = settle(Ok(vec![1, 2]), Vec::new, "test");
        assert_eq!(content, vec![1, 2]);
    }

    #[test]
    fn settle_substitutes_fallback_on_failure() {
        let content = settle(Err(FetchError::NotConfigured), || vec![7], "test");
        assert_eq!(content, vec![7]);
    }

    #[test]
    fn display_order_sorts_ascending_and_drops_inactive() {
        let rows = vec![
            row("c", 30, true),
            row("hidden", 1, false),
            row("a", 10, true),
            row("b", 20, true),
        ];
        let ids: Vec<_> = in_display_order(rows).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn display_order_keeps_backend_order_on_ties() {
        let rows = vec![row("second", 5, true), row("first", 2, true), row("third", 5, true)];
        let ids: Vec<_> = in_display_order(rows).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn gaps_in_order_keys_are_fine() {
        let rows = vec![row("late", 100, true), row("early", -3, true)];
        let ids: Vec<_> = in_display_order(rows).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["early", "late"]);
    }
}
