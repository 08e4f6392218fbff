/// Minimum Jaro-Winkler similarity for a fuzzy recipe-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
