use florist_common::FloristError;
use florist_core::{Accessory, Bouquet, Flower, FlowerKind, catalog};

fn kinds(flowers: &[&Flower]) -> Vec<FlowerKind> {
    flowers.iter().map(|flower| flower.kind()).collect()
}

/// The stock bouquet costs the plain sum of its six prices.
#[test]
fn sample_bouquet_total_cost() -> anyhow::Result<()> {
    let bouquet = catalog::sample_bouquet()?;
    assert_eq!(bouquet.total_cost(), 10.5 + 7.0 + 12.0 + 2.0 + 3.0 + 1.5);
    assert_eq!(bouquet.total_cost(), 36.0);
    Ok(())
}

#[test]
fn sample_bouquet_sorted_by_freshness() -> anyhow::Result<()> {
    let mut bouquet = catalog::sample_bouquet()?;
    bouquet.sort_by_freshness();

    let order: Vec<(FlowerKind, u8)> = bouquet
        .flowers()
        .iter()
        .map(|flower| (flower.kind(), flower.freshness()))
        .collect();
    assert_eq!(
        order,
        vec![
            (FlowerKind::Rose, 2),
            (FlowerKind::Lily, 3),
            (FlowerKind::Tulip, 5)
        ]
    );

    // cost does not depend on order
    assert_eq!(bouquet.total_cost(), 36.0);
    Ok(())
}

#[test]
fn sample_bouquet_stem_range_before_and_after_sort() -> anyhow::Result<()> {
    let mut bouquet = catalog::sample_bouquet()?;

    let before = kinds(&bouquet.find_flowers_by_stem_length(35.0, 55.0));
    assert_eq!(before, vec![FlowerKind::Rose, FlowerKind::Lily]);

    bouquet.sort_by_freshness();
    let found = bouquet.find_flowers_by_stem_length(35.0, 55.0);
    assert_eq!(kinds(&found), vec![FlowerKind::Rose, FlowerKind::Lily]);

    let stems: Vec<f64> = found.iter().map(|flower| flower.stem_length()).collect();
    assert_eq!(stems, vec![50.0, 40.0]);
    Ok(())
}

#[test]
fn every_valid_flower_keeps_its_values() -> anyhow::Result<()> {
    for freshness in 1..=10u8 {
        for &(price, stem) in &[(0.01, 0.5), (10.5, 50.0), (999.99, 120.25)] {
            let flower = Flower::new(FlowerKind::Lily, price, freshness, stem)?;
            assert_eq!(flower.price(), price);
            assert_eq!(flower.freshness(), freshness);
            assert_eq!(flower.stem_length(), stem);
        }
    }
    Ok(())
}

#[test]
fn accessory_price_sign_decides_validity() {
    for price in [0.0, 0.5, 2.0, 1000.0] {
        assert!(Accessory::card(price).is_ok(), "price {price} should be accepted");
    }
    for price in [-0.01, -1.0, -1000.0] {
        assert!(
            matches!(Accessory::card(price), Err(FloristError::InvalidArgument(_))),
            "price {price} should be rejected"
        );
    }
}

#[test]
fn invalid_rose_is_never_built() {
    let err = Flower::rose(-1.0, 2, 50.0).unwrap_err();
    let FloristError::InvalidArgument(msg) = &err;
    assert!(!msg.is_empty());
    assert_eq!(msg, "Invalid flower parameters.");
}

#[test]
fn empty_bouquet_queries() {
    let mut bouquet = Bouquet::default();
    bouquet.sort_by_freshness();
    assert_eq!(bouquet.total_cost(), 0.0);
    assert!(bouquet.find_flowers_by_stem_length(0.0, f64::MAX).is_empty());
    assert!(bouquet.flowers().is_empty());
    assert!(bouquet.accessories().is_empty());
}
