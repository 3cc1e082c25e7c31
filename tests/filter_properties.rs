//! Property tests for the recipe filter.
//!
//! These run against generated catalogs rather than the bundled one, so they
//! exercise names and alcohol types the shipped data never contains.

use emerald_shaker::catalog::{filter, normalize_query, Catalog, FilterMode, QueryState};
use emerald_shaker::domain::{Recipe, RecipeId};
use proptest::prelude::*;

fn recipe(id: usize, name: &str, alcohol_type: &str) -> Recipe {
    Recipe {
        id: RecipeId::new(id.to_string()),
        name: name.to_string(),
        alcohol_type: alcohol_type.to_string(),
        glass: "Coupe".to_string(),
        ingredients: vec!["2 oz spirit".to_string(), "1 oz citrus".to_string()],
        food_pairings: vec![],
        instructions: "Shake with ice.".to_string(),
    }
}

fn ids(hits: &[&Recipe]) -> Vec<String> {
    hits.iter().map(|r| r.id.as_str().to_string()).collect()
}

fn name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-zñÅ' ]{1,14}")
        .unwrap_or_else(|e| panic!("regex failed: {e}"))
}

fn alcohol_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Gin".to_string()),
        Just("Rum".to_string()),
        Just("Vodka".to_string()),
        Just("Whiskey".to_string()),
        Just("Sparkling Wine".to_string()),
    ]
}

fn records_strategy() -> impl Strategy<Value = Vec<Recipe>> {
    prop::collection::vec((name_strategy(), alcohol_strategy()), 0..24).prop_map(|entries| {
        entries
            .iter()
            .enumerate()
            .map(|(i, (name, kind))| recipe(i, name, kind))
            .collect()
    })
}

fn query_text_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex(" {0,2}[A-Za-zñ]{0,3} {0,2}")
        .unwrap_or_else(|e| panic!("regex failed: {e}"))
}

fn mode_strategy() -> impl Strategy<Value = FilterMode> {
    prop_oneof![Just(FilterMode::ByName), Just(FilterMode::ByAlcoholType)]
}

proptest! {
    #[test]
    fn name_matches_contain_the_normalized_query(
        records in records_strategy(),
        text in query_text_strategy(),
    ) {
        let query = QueryState { mode: FilterMode::ByName, text: text.clone() };
        let hits = filter(&records, &query);
        let needle = normalize_query(&text);

        for hit in &hits {
            prop_assert!(hit.name.to_lowercase().contains(&needle));
        }

        // Exactly the matching records, in catalog order.
        let expected: Vec<String> = records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .map(|r| r.id.as_str().to_string())
            .collect();
        prop_assert_eq!(ids(&hits), expected);
    }

    #[test]
    fn blank_query_returns_everything_in_order(
        records in records_strategy(),
        mode in mode_strategy(),
        blank in "[ \t]{0,4}",
    ) {
        let hits = filter(&records, &QueryState { mode, text: blank });
        let all: Vec<&Recipe> = records.iter().collect();
        prop_assert_eq!(hits, all);
    }

    #[test]
    fn switching_mode_always_clears_the_text(
        text in ".{0,20}",
        from in mode_strategy(),
        to in mode_strategy(),
    ) {
        let mut query = QueryState { mode: from, text };
        query.set_mode(to);
        prop_assert_eq!(query.mode, to);
        prop_assert_eq!(query.text, "");
    }

    #[test]
    fn alcohol_type_search_returns_exactly_its_recipes(
        mut records in records_strategy(),
        first in 0usize..25,
        second in 0usize..25,
    ) {
        // None of the generated types contain "mezcal", so only the two
        // inserted records can match.
        let first = first.min(records.len());
        records.insert(first, recipe(100, "Oaxaca Old Fashioned", "Mezcal"));
        let second = second.min(records.len());
        records.insert(second, recipe(101, "Naked and Famous", "Mezcal"));

        let query = QueryState { mode: FilterMode::ByAlcoholType, text: "MEZCAL".to_string() };
        let hits = filter(&records, &query);

        let expected: Vec<String> = records
            .iter()
            .filter(|r| r.alcohol_type == "Mezcal")
            .map(|r| r.id.as_str().to_string())
            .collect();
        prop_assert_eq!(expected.len(), 2);
        prop_assert_eq!(ids(&hits), expected);
    }
}

#[test]
fn margarita_and_daiquiri() {
    let catalog = Catalog::from_recipes(vec![
        Recipe {
            id: RecipeId::new("1"),
            ..recipe(1, "Margarita", "Tequila")
        },
        Recipe {
            id: RecipeId::new("2"),
            ..recipe(2, "Daiquiri", "Rum")
        },
    ])
    .unwrap();

    let by_name = QueryState {
        mode: FilterMode::ByName,
        text: "mar".to_string(),
    };
    assert_eq!(ids(&filter(catalog.all(), &by_name)), ["1"]);

    let by_type = QueryState {
        mode: FilterMode::ByAlcoholType,
        text: "rum".to_string(),
    };
    assert_eq!(ids(&filter(catalog.all(), &by_type)), ["2"]);

    for mode in [FilterMode::ByName, FilterMode::ByAlcoholType] {
        let empty = QueryState {
            mode,
            text: String::new(),
        };
        assert_eq!(ids(&filter(catalog.all(), &empty)), ["1", "2"]);
    }
}

#[test]
fn bundled_catalog_filters_by_type_in_catalog_order() {
    let catalog = Catalog::bundled().unwrap();
    let query = QueryState {
        mode: FilterMode::ByAlcoholType,
        text: "  tequila ".to_string(),
    };

    let hits = filter(catalog.all(), &query);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|r| r.alcohol_type == "Tequila"));

    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| catalog.all().iter().position(|r| r.id == hit.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
