//! Verb tenses and the user's tense selection

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnknownTense;

/// One of the twelve English tenses offered for practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    PresentSimple,
    PresentContinuous,
    PresentPerfectSimple,
    PresentPerfectContinuous,
    PastSimple,
    PastContinuous,
    PastPerfectSimple,
    PastPerfectContinuous,
    FutureSimple,
    FutureContinuous,
    FuturePerfectSimple,
    FuturePerfectContinuous,
}

impl Tense {
    /// Master list; display and prompt order both follow it
    pub const ALL: [Tense; 12] = [
        Tense::PresentSimple,
        Tense::PresentContinuous,
        Tense::PresentPerfectSimple,
        Tense::PresentPerfectContinuous,
        Tense::PastSimple,
        Tense::PastContinuous,
        Tense::PastPerfectSimple,
        Tense::PastPerfectContinuous,
        Tense::FutureSimple,
        Tense::FutureContinuous,
        Tense::FuturePerfectSimple,
        Tense::FuturePerfectContinuous,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tense::PresentSimple => "Present Simple",
            Tense::PresentContinuous => "Present Continuous",
            Tense::PresentPerfectSimple => "Present Perfect Simple",
            Tense::PresentPerfectContinuous => "Present Perfect Continuous",
            Tense::PastSimple => "Past Simple",
            Tense::PastContinuous => "Past Continuous",
            Tense::PastPerfectSimple => "Past Perfect Simple",
            Tense::PastPerfectContinuous => "Past Perfect Continuous",
            Tense::FutureSimple => "Future Simple",
            Tense::FutureContinuous => "Future Continuous",
            Tense::FuturePerfectSimple => "Future Perfect Simple",
            Tense::FuturePerfectContinuous => "Future Perfect Continuous",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tense {
    type Err = UnknownTense;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tense::ALL
            .into_iter()
            .find(|tense| tense.name() == s)
            .ok_or_else(|| UnknownTense(s.to_string()))
    }
}

impl Serialize for Tense {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Tense {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Which tenses are enabled. Absent entries count as disabled.
#[derive(Debug, Clone, Default)]
pub struct TenseSelection {
    enabled: HashMap<Tense, bool>,
}

impl TenseSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, tense: Tense, enabled: bool) {
        self.enabled.insert(tense, enabled);
    }

    pub fn is_enabled(&self, tense: Tense) -> bool {
        self.enabled.get(&tense).copied().unwrap_or(false)
    }

    /// Enabled tenses in master-list order, regardless of toggle order
    pub fn selected(&self) -> Vec<Tense> {
        Tense::ALL
            .into_iter()
            .filter(|&tense| self.is_enabled(tense))
            .collect()
    }

    pub fn selected_names(&self) -> Vec<&'static str> {
        self.selected().into_iter().map(Tense::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.enabled.values().any(|&on| on)
    }
}
