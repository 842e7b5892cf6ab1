use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, ParseError};
use serde::{Deserialize, Serialize};

/// Calendar date of a post, written as `YYYY-MM-DD` in the frontmatter
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PostDate(pub NaiveDate);

impl PostDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl<'de> Deserialize<'de> for PostDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        // YAML 1.2 has no timestamp type, quoted and bare dates both arrive as strings
        let value = String::deserialize(deserializer)?;
        PostDate::from_str(value.trim())
            .map_err(|e| Error::custom(format!("invalid date '{}', expected YYYY-MM-DD: {}", value, e)))
    }
}

impl Serialize for PostDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl FromStr for PostDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
        Ok(Self(naive))
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
