/// Scan bound used when the caller does not configure one.
pub(crate) const DEFAULT_BOUND: i64 = 1000;
