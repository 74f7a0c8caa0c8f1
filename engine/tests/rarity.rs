use dolphin_engine::{
    display_rarity, select_rare_items, select_tune_targets, Catalog, RarityRule, RewardItem,
};
use proptest::prelude::*;

fn catalog_of(chances: &[f64]) -> Catalog {
    let items = chances
        .iter()
        .enumerate()
        .map(|(i, c)| RewardItem::new(format!("item{}", i), "*", *c))
        .collect();
    Catalog::new(items).unwrap()
}

fn names(items: &[&RewardItem]) -> Vec<String> {
    items.iter().map(|i| i.name.clone()).collect()
}

fn index_of(catalog: &Catalog, name: &str) -> usize {
    catalog.iter().position(|i| i.name == name).unwrap()
}

#[test]
fn rare_items_are_filtered_and_sorted() {
    let catalog = Catalog::new(vec![
        RewardItem::new("Shiny Shell", "🐚", 0.35),
        RewardItem::new("Atlantis Crystal", "✨", 0.01),
        RewardItem::new("Golden Anchor", "⚓", 0.10),
    ])
    .unwrap();

    let rare = select_rare_items(&catalog);
    assert_eq!(names(&rare), vec!["Atlantis Crystal", "Golden Anchor"]);
    let targets = select_tune_targets(&catalog);
    assert_eq!(names(&targets), vec!["Atlantis Crystal", "Golden Anchor"]);
}

#[test]
fn common_catalog_falls_back_to_three_rarest() {
    let catalog = catalog_of(&[0.35, 0.30, 0.25, 0.20, 0.22]);
    let rare = select_rare_items(&catalog);
    assert_eq!(names(&rare), vec!["item3", "item4", "item2"]);
}

#[test]
fn threshold_is_inclusive() {
    let catalog = catalog_of(&[0.5, 0.15, 0.16]);
    assert_eq!(names(&select_rare_items(&catalog)), vec!["item1"]);
}

#[test]
fn many_rare_items_are_all_listed_but_tune_caps_at_three() {
    let catalog = catalog_of(&[0.12, 0.10, 0.08, 0.06, 0.05, 0.03, 0.01, 0.5]);
    let rare = select_rare_items(&catalog);
    assert_eq!(rare.len(), 7);
    let targets = select_tune_targets(&catalog);
    assert_eq!(names(&targets), vec!["item6", "item5", "item4"]);
}

#[test]
fn zero_chance_counts_as_rarest() {
    let catalog = catalog_of(&[0.4, 0.0, 0.1]);
    assert_eq!(names(&select_rare_items(&catalog)), vec!["item1", "item2"]);
}

#[test]
fn empty_catalog_selects_nothing() {
    let catalog = Catalog::default();
    assert!(select_rare_items(&catalog).is_empty());
    assert!(select_tune_targets(&catalog).is_empty());
}

#[test]
fn custom_rule_changes_threshold_and_cap() {
    let rule = RarityRule {
        threshold: 0.3,
        max_tuned: 2,
    };
    let catalog = catalog_of(&[0.5, 0.3, 0.2, 0.1]);
    assert_eq!(names(&rule.select_rare(&catalog)), vec!["item3", "item2", "item1"]);
    assert_eq!(names(&rule.select_targets(&catalog)), vec!["item3", "item2"]);
}

#[test]
fn display_rarity_examples() {
    assert_eq!(display_rarity(&RewardItem::new("a", "", 0.01)), 99);
    assert_eq!(display_rarity(&RewardItem::new("b", "", 0.15)), 85);
    assert_eq!(display_rarity(&RewardItem::new("c", "", 1.0)), 0);
    assert_eq!(display_rarity(&RewardItem::new("d", "", 0.0)), 100);
}

fn chance() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop::sample::select(vec![0.01, 0.05, 0.1, 0.15, 0.2, 0.3, 0.5, 1.0]),
        0.001f64..=1.0,
    ]
}

proptest! {
    #[test]
    fn non_empty_catalog_yields_rare_items(chances in prop::collection::vec(chance(), 1..25)) {
        let catalog = catalog_of(&chances);
        prop_assert!(!select_rare_items(&catalog).is_empty());
    }

    #[test]
    fn rare_items_sorted_and_stable(chances in prop::collection::vec(chance(), 0..25)) {
        let catalog = catalog_of(&chances);
        let rare = select_rare_items(&catalog);
        for pair in rare.windows(2) {
            prop_assert!(pair[0].drop_chance <= pair[1].drop_chance);
            if pair[0].drop_chance == pair[1].drop_chance {
                prop_assert!(index_of(&catalog, &pair[0].name) < index_of(&catalog, &pair[1].name));
            }
        }
    }

    #[test]
    fn filter_or_fallback(chances in prop::collection::vec(chance(), 0..25)) {
        let catalog = catalog_of(&chances);
        let rare = select_rare_items(&catalog);
        let under: Vec<&RewardItem> = catalog.iter().filter(|i| i.drop_chance <= 0.15).collect();
        if under.is_empty() {
            prop_assert_eq!(rare.len(), chances.len().min(3));
        } else {
            prop_assert_eq!(rare.len(), under.len());
            prop_assert!(rare.iter().all(|i| i.drop_chance <= 0.15));
        }
    }

    #[test]
    fn tune_targets_capped(chances in prop::collection::vec(chance(), 0..25)) {
        let catalog = catalog_of(&chances);
        let targets = select_tune_targets(&catalog);
        prop_assert!(targets.len() <= 3);
        let rare = select_rare_items(&catalog);
        prop_assert_eq!(names(&targets), names(&rare[..rare.len().min(3)]));
    }

    #[test]
    fn display_rarity_bounded_and_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let r_lo = display_rarity(&RewardItem::new("lo", "", lo));
        let r_hi = display_rarity(&RewardItem::new("hi", "", hi));
        prop_assert!(r_lo <= 100 && r_hi <= 100);
        prop_assert!(r_lo >= r_hi);
    }
}
