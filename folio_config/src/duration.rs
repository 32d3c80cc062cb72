use std::ops::Deref;

use serde::Deserialize;

/// A duration written as whitespace separated `<n><unit>` parts, where unit is
/// one of `s`, `m`, `h` or `d`, e.g. `"1d 2h 3m 4s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.split_whitespace()
            .try_fold(0u64, |total, part| {
                let unit = part.char_indices().last().map(|(idx, _)| part.split_at(idx));
                let (value, factor) = match unit {
                    Some((value, "s")) => (value, 1),
                    Some((value, "m")) => (value, 60),
                    Some((value, "h")) => (value, 3600),
                    Some((value, "d")) => (value, 24 * 3600),
                    _ => return None,
                };
                let value = value
                    .bytes()
                    .all(|b| b.is_ascii_digit())
                    .then(|| value.parse::<u64>().ok())
                    .flatten()?;
                total.checked_add(value.checked_mul(factor)?)
            })
            .map(|secs| Self(std::time::Duration::from_secs(secs)))
            .ok_or_else(|| serde::de::Error::custom("Invalid duration"))
    }
}
