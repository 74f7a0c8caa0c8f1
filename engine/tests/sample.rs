use dolphin_engine::sample::roll_many;
use dolphin_engine::{Catalog, Dice, RewardItem};

fn catalog() -> Catalog {
    Catalog::new(vec![
        RewardItem::new("Always", "", 1.0).with_prices(5.0, 5.0),
        RewardItem::new("Never", "", 0.0).with_prices(100.0, 200.0),
        RewardItem::new("Coin", "", 0.5).with_prices(1.0, 3.0),
    ])
    .unwrap()
}

#[test]
fn certain_and_impossible_items() {
    let catalog = catalog();
    let mut dice = Dice::from_seed(7);
    for _ in 0..50 {
        let drops = dice.roll_catalog(&catalog);
        assert!(drops.iter().any(|d| d.item.name == "Always" && d.value == 5.0));
        assert!(drops.iter().all(|d| d.item.name != "Never"));
        for d in &drops {
            assert!(d.value >= d.item.price_low && d.value <= d.item.price_high);
        }
    }
}

#[test]
fn same_seed_same_summary() {
    let catalog = catalog();
    assert_eq!(roll_many(&catalog, 200, 9), roll_many(&catalog, 200, 9));
}

#[test]
fn summary_totals_add_up() {
    let catalog = catalog();
    let summary = roll_many(&catalog, 1_000, 3);
    assert_eq!(summary.rounds, 1_000);
    assert_eq!(summary.items[0].drops, 1_000);
    assert_eq!(summary.items[1].drops, 0);
    let coin = &summary.items[2];
    assert_eq!(coin.expected, 500.0);
    assert!(coin.drops > 400 && coin.drops < 600);
    assert_eq!(
        summary.total_drops,
        summary.items.iter().map(|t| t.drops).sum::<u32>()
    );
}
