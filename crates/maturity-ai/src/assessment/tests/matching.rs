use super::common::*;
use crate::assessment::domain::{CompanySize, IndustryId, MaturityLevel};
use crate::assessment::matching::select_matches;
use crate::assessment::products::{recommend_products, reference_products, AIProduct};

fn product(
    id: &str,
    levels: &[MaturityLevel],
    industries: &[&str],
    sizes: &[CompanySize],
) -> AIProduct {
    AIProduct {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        target_maturity_levels: levels.to_vec(),
        target_industries: industries.iter().map(|i| IndustryId::new(*i)).collect(),
        target_company_sizes: sizes.to_vec(),
    }
}

#[test]
fn two_of_three_criteria_qualify_a_product() {
    // Player / banking-finance / Medium.
    let result = scored_result(
        40,
        MaturityLevel::Player,
        "banking-finance",
        CompanySize::Medium,
    );

    let catalog = vec![
        // level + industry match, size does not
        product(
            "level-industry",
            &[MaturityLevel::Player],
            &["banking-finance"],
            &[CompanySize::Enterprise],
        ),
        // industry + size match, level does not
        product(
            "industry-size",
            &[MaturityLevel::Disrupter],
            &["banking-finance"],
            &[CompanySize::Medium],
        ),
        // only the industry matches
        product(
            "industry-only",
            &[MaturityLevel::Disrupter],
            &["banking-finance"],
            &[CompanySize::Micro],
        ),
    ];

    let recommended = recommend_products(&catalog, &result);
    let ids: Vec<&str> = recommended.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["level-industry", "industry-size"]);
}

#[test]
fn maturity_matches_rank_before_other_matches() {
    let result = scored_result(40, MaturityLevel::Player, "retail", CompanySize::Small);

    let catalog = vec![
        product(
            "no-level-a",
            &[MaturityLevel::Disrupter],
            &["retail"],
            &[CompanySize::Small],
        ),
        product(
            "level-match",
            &[MaturityLevel::Player],
            &["retail"],
            &[CompanySize::Enterprise],
        ),
        product(
            "no-level-b",
            &[MaturityLevel::Resister],
            &["retail"],
            &[CompanySize::Small],
        ),
    ];

    let recommended = recommend_products(&catalog, &result);
    let ids: Vec<&str> = recommended.iter().map(|p| p.id.as_str()).collect();
    // Stable sort: the level match moves first, the rest keep catalog order.
    assert_eq!(ids, vec!["level-match", "no-level-a", "no-level-b"]);
}

#[test]
fn empty_catalog_yields_no_recommendations() {
    let result = scored_result(40, MaturityLevel::Player, "retail", CompanySize::Small);
    assert!(recommend_products(&[], &result).is_empty());
}

#[test]
fn adding_a_matching_criterion_never_removes_a_product() {
    // Same company, one result matching more criteria of the same product.
    let catalog = vec![product(
        "target",
        &[MaturityLevel::Player],
        &["retail"],
        &[CompanySize::Small],
    )];

    let two_matches = scored_result(40, MaturityLevel::Player, "retail", CompanySize::Large);
    let three_matches = scored_result(40, MaturityLevel::Player, "retail", CompanySize::Small);

    assert_eq!(recommend_products(&catalog, &two_matches).len(), 1);
    assert_eq!(recommend_products(&catalog, &three_matches).len(), 1);
}

#[test]
fn raising_the_match_threshold_never_grows_the_selection() {
    // Query: Player / retail / Small. Entries match 1, 2, and 3 dimensions.
    let catalog = vec![
        product(
            "one-dimension",
            &[MaturityLevel::Disrupter],
            &["retail"],
            &[CompanySize::Enterprise],
        ),
        product(
            "two-dimensions",
            &[MaturityLevel::Player],
            &["retail"],
            &[CompanySize::Enterprise],
        ),
        product(
            "all-dimensions",
            &[MaturityLevel::Player],
            &["retail"],
            &[CompanySize::Small],
        ),
    ];
    let industry = IndustryId::new("retail");

    let mut previous = usize::MAX;
    for threshold in 0..=3u8 {
        let selected = select_matches(
            &catalog,
            MaturityLevel::Player,
            &industry,
            CompanySize::Small,
            threshold,
        );
        assert!(
            selected.len() <= previous,
            "threshold {threshold} grew the selection"
        );
        // A full match survives every threshold.
        assert!(selected.iter().any(|p| p.id == "all-dimensions"));
        previous = selected.len();
    }

    let strict = select_matches(
        &catalog,
        MaturityLevel::Player,
        &industry,
        CompanySize::Small,
        3,
    );
    assert_eq!(strict.len(), 1);
}

#[test]
fn reference_products_cover_every_maturity_level() {
    let products = reference_products();
    for level in MaturityLevel::ORDERED {
        assert!(
            products
                .iter()
                .any(|p| p.target_maturity_levels.contains(&level)),
            "no product targets {level}"
        );
    }
}
