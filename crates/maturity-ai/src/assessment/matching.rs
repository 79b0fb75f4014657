use super::domain::{CompanySize, IndustryId, MaturityLevel};

/// Catalog entries eligible for multi-criteria matching expose three target
/// dimensions. Empty slices simply never match on that dimension.
pub trait CatalogMatch {
    fn target_levels(&self) -> &[MaturityLevel];
    fn target_industries(&self) -> &[IndustryId];
    fn target_sizes(&self) -> &[CompanySize];
}

/// How many of the three dimensions match the query. Set membership is
/// binary; there is no partial credit within a dimension.
pub fn match_count<T: CatalogMatch>(
    entry: &T,
    level: MaturityLevel,
    industry: &IndustryId,
    size: CompanySize,
) -> u8 {
    let level_match = entry.target_levels().contains(&level);
    let industry_match = entry.target_industries().contains(industry);
    let size_match = entry.target_sizes().contains(&size);
    [level_match, industry_match, size_match]
        .into_iter()
        .filter(|matched| *matched)
        .count() as u8
}

/// Select entries matching at least `min_match_count` of the three target
/// dimensions. Two strong signals are required by default; a single perfect
/// dimension is not enough. An empty result is a valid outcome, not an
/// error.
pub fn select_matches<'a, T: CatalogMatch>(
    entries: &'a [T],
    level: MaturityLevel,
    industry: &IndustryId,
    size: CompanySize,
    min_match_count: u8,
) -> Vec<&'a T> {
    entries
        .iter()
        .filter(|entry| match_count(*entry, level, industry, size) >= min_match_count)
        .collect()
}

/// Rank matches with maturity-level agreement as the primary key. The sort
/// is stable, so ties keep catalog order.
pub fn rank_by_level_match<'a, T: CatalogMatch>(
    mut matches: Vec<&'a T>,
    level: MaturityLevel,
) -> Vec<&'a T> {
    matches.sort_by_key(|entry| !entry.target_levels().contains(&level));
    matches
}
