use serde::{Deserialize, Deserializer};

/// Deserialize a field that the upstream service may send as `null`.
///
/// Combined with `#[serde(default)]` this makes absent and `null` equivalent:
/// both decode to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Return the first candidate that is present and not empty.
pub fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.is_empty())
}
