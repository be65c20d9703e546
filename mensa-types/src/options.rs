//! Normalization of the `options` field.
//!
//! The backend stores options as free text, so the wire form is either a
//! comma-delimited string (`"Evet, Hayır"`) or a pre-split JSON array.
//! Both are accepted here, once, at the deserialization boundary - call
//! sites only ever see an ordered `Vec<String>` of trimmed labels.

use serde::{Deserialize, Deserializer, Serializer};

/// Split a comma-delimited option string into trimmed, non-empty labels.
pub fn split(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join option labels back into the comma-delimited wire form.
pub fn join(options: &[String]) -> String {
    options.join(", ")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptions {
    Delimited(String),
    Split(Vec<String>),
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawOptions>::deserialize(deserializer)?;
    Ok(match raw {
        None => Vec::new(),
        Some(RawOptions::Delimited(s)) => split(&s),
        Some(RawOptions::Split(items)) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

pub(crate) fn serialize<S>(options: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&join(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(split("Evet, Hayır"), vec!["Evet", "Hayır"]);
        assert_eq!(split("  a ,b,  c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(split("a,,b,"), vec!["a", "b"]);
        assert!(split("").is_empty());
    }

    #[test]
    fn round_trip() {
        let opts = split("Elma, Armut, Muz");
        assert_eq!(join(&opts), "Elma, Armut, Muz");
    }
}
