//! The data model of a meetup round: the five [`HealthCategory`] values and the immutable
//! [`Agent`] value that carries one.
//!
//! Categories are totally ordered from most cured to most deceased:
//!
//! ```text
//! CURE(1) < HEALTHY(2) < SICK(3) < DYING(4) < DEAD(5)
//! ```
//!
//! The ordinal is only used to name a category (e.g. in an input file). Moving between adjacent
//! categories is done with [`HealthCategory::improved`] and [`HealthCategory::worsened`], which
//! match on the variant instead of doing arithmetic on the ordinal, so neither can produce a value
//! outside the enumeration.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::MeetupError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr, strum::Display,
)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HealthCategory {
    Cure,
    Healthy,
    Sick,
    Dying,
    Dead,
}

impl HealthCategory {
    /// All categories in severity order.
    pub const ALL: [HealthCategory; 5] = [
        HealthCategory::Cure,
        HealthCategory::Healthy,
        HealthCategory::Sick,
        HealthCategory::Dying,
        HealthCategory::Dead,
    ];

    /// The 1-based position of the category in severity order.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            HealthCategory::Cure => 1,
            HealthCategory::Healthy => 2,
            HealthCategory::Sick => 3,
            HealthCategory::Dying => 4,
            HealthCategory::Dead => 5,
        }
    }

    /// One step toward `Cure`. `Cure` is a fixed point.
    #[must_use]
    pub fn improved(self) -> HealthCategory {
        match self {
            HealthCategory::Cure | HealthCategory::Healthy => HealthCategory::Cure,
            HealthCategory::Sick => HealthCategory::Healthy,
            HealthCategory::Dying => HealthCategory::Sick,
            HealthCategory::Dead => HealthCategory::Dying,
        }
    }

    /// One step toward `Dead`, or `None` when already `Dead`.
    #[must_use]
    pub fn worsened(self) -> Option<HealthCategory> {
        match self {
            HealthCategory::Cure => Some(HealthCategory::Healthy),
            HealthCategory::Healthy => Some(HealthCategory::Sick),
            HealthCategory::Sick => Some(HealthCategory::Dying),
            HealthCategory::Dying => Some(HealthCategory::Dead),
            HealthCategory::Dead => None,
        }
    }

    /// Whether an agent in this category takes part in the pairing. `Healthy` and `Dead` agents
    /// sit the round out.
    #[must_use]
    pub fn is_eligible(self) -> bool {
        !matches!(self, HealthCategory::Healthy | HealthCategory::Dead)
    }

    /// The upper-case label, e.g. `"SICK"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<u8> for HealthCategory {
    type Error = MeetupError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        HealthCategory::iter()
            .find(|category| category.ordinal() == ordinal)
            .ok_or_else(|| MeetupError::InvalidCategory(ordinal.to_string()))
    }
}

impl FromStr for HealthCategory {
    type Err = MeetupError;

    /// Accepts a label in any case (`"sick"`, `"SICK"`) or an ordinal (`"3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(category) = HealthCategory::iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
        {
            return Ok(category);
        }
        match trimmed.parse::<u8>() {
            Ok(ordinal) => HealthCategory::try_from(ordinal)
                .map_err(|_| MeetupError::InvalidCategory(s.to_string())),
            Err(_) => Err(MeetupError::InvalidCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for HealthCategory {
    type Error = MeetupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HealthCategory> for String {
    fn from(category: HealthCategory) -> Self {
        category.label().to_string()
    }
}

/// A named participant in a meetup round. Agents are values: a transition produces a new agent
/// with the same name rather than changing this one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    name: String,
    category: HealthCategory,
}

impl Agent {
    pub fn new(name: impl Into<String>, category: HealthCategory) -> Agent {
        Agent {
            name: name.into(),
            category,
        }
    }

    /// Names are opaque and need not be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> HealthCategory {
        self.category
    }

    /// A copy of this agent in `category`.
    #[must_use]
    pub fn with_category(&self, category: HealthCategory) -> Agent {
        Agent {
            name: self.name.clone(),
            category,
        }
    }
}

impl Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.name, self.category)
    }
}
