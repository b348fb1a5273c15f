#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use turnos::libs::shift::Store;
    use turnos::libs::store::{name_order, sort_stores, store_number};

    fn names(stores: &[Store]) -> Vec<&str> {
        stores.iter().map(|store| store.name.as_str()).collect()
    }

    #[test]
    fn test_numbered_stores_first_by_number() {
        let mut stores: Vec<Store> = ["Tienda 10", "Tienda 2", "Centro", "Tienda 1"]
            .iter()
            .map(|name| Store::new(name, ""))
            .collect();
        sort_stores(&mut stores);
        assert_eq!(names(&stores), vec!["Tienda 1", "Tienda 2", "Tienda 10", "Centro"]);
    }

    #[test]
    fn test_unnumbered_stores_alphabetical() {
        let mut stores: Vec<Store> = ["Plaza Norte", "Almacén", "Tienda 3", "centro"]
            .iter()
            .map(|name| Store::new(name, ""))
            .collect();
        sort_stores(&mut stores);
        assert_eq!(names(&stores), vec!["Tienda 3", "Almacén", "centro", "Plaza Norte"]);
    }

    #[test]
    fn test_name_order() {
        assert_eq!(name_order("Tienda 2", "Tienda 10"), Ordering::Less);
        assert_eq!(name_order("Tienda 10", "Centro"), Ordering::Less);
        assert_eq!(name_order("Centro", "Tienda 1"), Ordering::Greater);
        assert_eq!(name_order("Tienda 4", "Tienda 4"), Ordering::Equal);
    }

    #[test]
    fn test_store_number() {
        assert_eq!(store_number("Tienda 1"), Some(1));
        assert_eq!(store_number("Tienda 007"), Some(7));
        assert_eq!(store_number("Centro"), None);
    }

    #[test]
    fn test_store_number_anywhere_in_name() {
        // The number is picked up wherever "Tienda <N>" appears in the name.
        assert_eq!(store_number("Outlet Tienda 3"), Some(3));
        assert_eq!(store_number("Tienda 12 Miraflores"), Some(12));
        assert_eq!(store_number("tienda 5"), None);

        let mut stores: Vec<Store> = ["Centro", "Outlet Tienda 3", "Tienda 1", "Almacén"]
            .iter()
            .map(|name| Store::new(name, ""))
            .collect();
        sort_stores(&mut stores);
        assert_eq!(names(&stores), vec!["Tienda 1", "Outlet Tienda 3", "Almacén", "Centro"]);
    }
}
