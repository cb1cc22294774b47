use std::{
    fmt,
    fmt::Display,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};

/// An ID for a catalog resource.
///
/// IDs are normalized to lowercase alphanumeric characters, so that
/// differently-formatted display names resolve to the same resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    fn normalize(value: &str) -> String {
        value
            .chars()
            .filter_map(|c| match c {
                '0'..='9' | 'a'..='z' => Some(c),
                'A'..='Z' => Some(c.to_ascii_lowercase()),
                _ => None,
            })
            .collect()
    }

    /// The ID as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(Self::normalize(value))
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for Id {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ID string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Id::from(v))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(IdVisitor)
    }
}

/// Trait for resources that can be identified by an [`Id`].
pub trait Identifiable {
    fn id(&self) -> &Id;
}

#[cfg(test)]
mod id_test {
    use crate::Id;

    #[test]
    fn normalizes_input() {
        assert_eq!(Id::from("Flandre"), Id::from("flandre"));
        assert_eq!(Id::from("Hourai Elixir").as_str(), "houraielixir");
        assert_eq!(Id::from("item-01").as_str(), "item01");
    }

    #[test]
    fn serializes_to_string() {
        assert_eq!(
            serde_json::to_string(&Id::from("cirno")).unwrap(),
            "\"cirno\""
        );
        assert_eq!(
            serde_json::from_str::<Id>("\"Cirno\"").unwrap(),
            Id::from("cirno")
        );
    }
}
