pub mod levenshtein;
pub mod prefix;
