use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DareError;

/// One player's final point total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub points: i64,
}

/// Player name to points, kept in insertion order.
///
/// Insertion order is the tie-breaker when ranking, so this is a `Vec`
/// rather than a hash map. Games have a handful of players, which keeps
/// the linear lookups cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scores {
    entries: Vec<ScoreEntry>,
}

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a player's points. An existing player keeps their position and
    /// the previous total is returned.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        points: i64,
    ) -> Result<Option<i64>, DareError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DareError::EmptyPlayerName);
        }
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            let previous = existing.points;
            existing.points = points;
            return Ok(Some(previous));
        }
        self.entries.push(ScoreEntry { name, points });
        Ok(None)
    }

    /// Build from pairs, rejecting repeated names.
    pub fn try_from_pairs<I, S>(pairs: I) -> Result<Self, DareError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut scores = Self::new();
        for (name, points) in pairs {
            let name = name.into();
            if scores.get(&name).is_some() {
                return Err(DareError::DuplicatePlayer(name));
            }
            scores.insert(name, points)?;
        }
        Ok(scores)
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.points)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.points)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Scores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoresVisitor;

        impl<'de> Visitor<'de> for ScoresVisitor {
            type Value = Scores;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of player name to integer points")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Scores, A::Error> {
                let mut scores = Scores::new();
                while let Some((name, points)) = map.next_entry::<String, i64>()? {
                    scores.insert(name, points).map_err(serde::de::Error::custom)?;
                }
                Ok(scores)
            }
        }

        deserializer.deserialize_map(ScoresVisitor)
    }
}

/// Players ordered by points, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<ScoreEntry>,
}

impl Ranking {
    /// The first-placed player, if anyone played.
    pub fn winner(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    /// Everyone after the winner.
    pub fn runners_up(&self) -> &[ScoreEntry] {
        self.entries.get(1..).unwrap_or(&[])
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }
}

impl From<Vec<ScoreEntry>> for Ranking {
    /// Wraps entries that are already in ranking order.
    fn from(entries: Vec<ScoreEntry>) -> Self {
        Self { entries }
    }
}

/// Rank players by points, descending. Equal points keep insertion order.
pub fn rank(scores: &Scores) -> Ranking {
    let mut entries: Vec<ScoreEntry> = scores.iter().cloned().collect();
    // sort_by is stable
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    Ranking { entries }
}
