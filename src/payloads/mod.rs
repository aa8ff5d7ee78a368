use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod products;
pub mod tags;

/// Maximum allowed length for category, product and tag names.
pub(crate) const NAME_MAX_LEN: u64 = 128;

/// Deserialize a nullable field so that a missing key stays `None` while an
/// explicit `null` becomes `Some(None)`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
