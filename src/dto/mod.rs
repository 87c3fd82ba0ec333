use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod favourites;
pub mod products;
pub mod reviews;
pub mod styles;
pub mod users;

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`)
/// on update payloads for nullable columns.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
