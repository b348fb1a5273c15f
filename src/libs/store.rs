//! Store ordering.
//!
//! Stores named `Tienda <N>` come first, by `N` ascending. Every other
//! store follows in alphabetical order. The `Tienda <N>` part may appear
//! anywhere in the name. `N` is compared as a number, so
//! "Tienda 2" sorts before "Tienda 10".

use crate::libs::shift::Store;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

static STORE_NUMBER: OnceLock<Option<Regex>> = OnceLock::new();

/// Number of a `Tienda <N>` store name, if it has one.
pub fn store_number(name: &str) -> Option<u64> {
    let pattern = STORE_NUMBER.get_or_init(|| Regex::new(r"Tienda (\d+)").ok()).as_ref()?;
    pattern.captures(name)?.get(1)?.as_str().parse().ok()
}

/// Comparison between two store names.
pub fn name_order(a: &str, b: &str) -> Ordering {
    match (store_number(a), store_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
    }
}

pub fn store_order(a: &Store, b: &Store) -> Ordering {
    name_order(&a.name, &b.name)
}

/// Sorts in place; the sort is stable for equal keys.
pub fn sort_stores(stores: &mut [Store]) {
    stores.sort_by(store_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_number_only_from_tienda_names() {
        assert_eq!(store_number("Tienda 12"), Some(12));
        assert_eq!(store_number("Centro"), None);
        assert_eq!(store_number("Tienda Norte"), None);
    }
}
