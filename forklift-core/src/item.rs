//! Crates waiting to be collected.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Cell, ItemError};

/// Identifier assigned to an item from its position in the ingested list.
///
/// Two items on the same cell keep distinct identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handling class of an item.
///
/// Perishable items are collected before standard ones whenever the
/// planner's priority rule asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Priority {
    /// Must leave the floor first.
    Perishable,
    /// Ordinary stock.
    #[default]
    Standard,
}

impl Priority {
    /// Stable lowercase label, suitable as a lookup key for presentation
    /// assets.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perishable => "perishable",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a [`Priority`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority class {0:?}; expected \"perishable\" or \"standard\"")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perishable" => Ok(Self::Perishable),
            "standard" => Ok(Self::Standard),
            _ => Err(ParsePriorityError(s.to_owned())),
        }
    }
}

/// An item as supplied by the caller, before an identifier is assigned.
///
/// # Examples
/// ```
/// use forklift_core::{Cell, ItemId, ItemSpec, Priority};
///
/// let spec = ItemSpec::new(Cell::new(1, 1), 2, Priority::Perishable);
/// let item = spec.ingest(ItemId(0))?;
/// assert_eq!(item.weight(), 2);
/// assert!(item.is_perishable());
/// # Ok::<(), forklift_core::ItemError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    /// Cell the item sits on.
    pub position: Cell,
    /// Weight in load units; must be positive.
    pub weight: u32,
    /// Handling class.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: Priority,
}

impl ItemSpec {
    /// Describe an item.
    #[must_use]
    pub const fn new(position: Cell, weight: u32, priority: Priority) -> Self {
        Self {
            position,
            weight,
            priority,
        }
    }

    /// Validate the description and attach an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::ZeroWeight`] for weightless items.
    pub const fn ingest(self, id: ItemId) -> Result<Item, ItemError> {
        if self.weight == 0 {
            return Err(ItemError::ZeroWeight { id });
        }
        Ok(Item {
            id,
            position: self.position,
            weight: self.weight,
            priority: self.priority,
        })
    }
}

/// A validated item awaiting collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: ItemId,
    position: Cell,
    weight: u32,
    priority: Priority,
}

impl Item {
    /// Identifier assigned at ingestion.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Cell the item sits on.
    #[must_use]
    pub const fn position(&self) -> Cell {
        self.position
    }

    /// Weight in load units.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Handling class.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Shorthand for `priority() == Priority::Perishable`.
    #[must_use]
    pub const fn is_perishable(&self) -> bool {
        matches!(self.priority, Priority::Perishable)
    }
}

/// Count of pending items per handling class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    /// Pending perishable items.
    pub perishable: usize,
    /// Pending standard items.
    pub standard: usize,
}

impl Inventory {
    /// Tally a collection of items.
    #[must_use]
    pub fn count<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        items
            .into_iter()
            .fold(Self::default(), |mut tally, item| {
                match item.priority() {
                    Priority::Perishable => tally.perishable = tally.perishable.saturating_add(1),
                    Priority::Standard => tally.standard = tally.standard.saturating_add(1),
                }
                tally
            })
    }

    /// Total pending items.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.perishable.saturating_add(self.standard)
    }
}
