/// Text fields a list can be searched by.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Items whose searchable fields contain `query`, ignoring case.
///
/// An empty query keeps every item. Order always follows `items`; the input is never touched.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::EntityId;
    use crate::domain::vendor::model::Vendor;
    use proptest::prelude::*;

    fn product(id: &str, name: &str, category: Option<&str>) -> Product {
        Product {
            id: EntityId::new(id),
            name: name.to_string(),
            category: category.map(str::to_string),
            cost_price: None,
            selling_price: 1.0,
            vendor: None,
            image_url: None,
        }
    }

    #[test]
    fn should_match_vendor_name_ignoring_case() {
        let vendors = vec![Vendor::new("v1", "Acme"), Vendor::new("v2", "Globex")];

        let found = filter(&vendors, "aCM");

        assert_eq!(found, vec![&vendors[0]]);
    }

    #[test]
    fn should_match_product_by_name_or_category() {
        let products = vec![
            product("p1", "Shampoo", Some("Bath")),
            product("p2", "Bath towel", None),
            product("p3", "Rice", Some("Grocery")),
        ];

        let found: Vec<&str> = filter(&products, "bath")
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(found, vec!["p1", "p2"]);
    }

    #[test]
    fn should_return_nothing_when_no_field_matches() {
        let vendors = vec![Vendor::new("v1", "Acme")];

        assert!(filter(&vendors, "initech").is_empty());
    }

    fn vendor_list() -> impl Strategy<Value = Vec<Vendor>> {
        prop::collection::vec("[a-zA-Z ]{0,12}", 0..20).prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| Vendor::new(format!("v{}", i), name))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn should_keep_all_items_in_order_for_empty_query(vendors in vendor_list()) {
            let found: Vec<Vendor> = filter(&vendors, "").into_iter().cloned().collect();
            prop_assert_eq!(found, vendors);
        }

        #[test]
        fn should_only_return_matching_items(vendors in vendor_list(), query in "[a-zA-Z]{1,3}") {
            let needle = query.to_lowercase();
            for vendor in filter(&vendors, &query) {
                prop_assert!(vendor.name.to_lowercase().contains(&needle));
            }
        }

        #[test]
        fn should_preserve_relative_order(vendors in vendor_list(), query in "[a-z]{0,2}") {
            let positions: Vec<usize> = filter(&vendors, &query)
                .into_iter()
                .map(|v| vendors.iter().position(|x| x.id == v.id).unwrap_or(usize::MAX))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
