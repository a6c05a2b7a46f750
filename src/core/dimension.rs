use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of survey items in the CEAI instrument.
pub const QUESTION_COUNT: usize = 48;

/// The five CEAI sub-scales.
///
/// Each dimension is bound at compile time to the survey item columns that
/// measure it. The five index sets partition `0..QUESTION_COUNT` exactly;
/// `tests/dimension_map_tests.rs` verifies the partition property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    ManagementSupport,
    WorkDiscretion,
    Rewards,
    TimeAvailability,
    OrganizationalBoundaries,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::ManagementSupport,
        Dimension::WorkDiscretion,
        Dimension::Rewards,
        Dimension::TimeAvailability,
        Dimension::OrganizationalBoundaries,
    ];

    /// Display name, matching the instrument's published sub-scale names.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::ManagementSupport => "Management Support",
            Dimension::WorkDiscretion => "Work Discretion (Autonomy)",
            Dimension::Rewards => "Rewards/Reinforcement",
            Dimension::TimeAvailability => "Time Availability",
            Dimension::OrganizationalBoundaries => "Organizational Boundaries",
        }
    }

    /// Zero-based survey item columns belonging to this sub-scale.
    pub fn items(self) -> &'static [usize] {
        match self {
            Dimension::ManagementSupport => &[0, 1, 2, 3, 5, 7, 8, 9],
            Dimension::WorkDiscretion => &[6, 18, 20, 21, 22, 23, 24, 25, 26, 27, 28],
            Dimension::Rewards => &[4, 10, 11, 29, 30, 31, 32, 33, 34],
            Dimension::TimeAvailability => &[12, 13, 14, 15, 16, 35, 36, 37, 38, 39, 40],
            Dimension::OrganizationalBoundaries => &[17, 19, 41, 42, 43, 44, 45, 46, 47],
        }
    }

    /// Dimension owning a given item column, if any.
    pub fn containing(column: usize) -> Option<Dimension> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.items().contains(&column))
    }

    fn ordinal(self) -> usize {
        match self {
            Dimension::ManagementSupport => 0,
            Dimension::WorkDiscretion => 1,
            Dimension::Rewards => 2,
            Dimension::TimeAvailability => 3,
            Dimension::OrganizationalBoundaries => 4,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One value per dimension, in canonical instrument order.
///
/// Serializes as a map keyed by the dimension display names, which keeps the
/// JSON output shape stable regardless of how callers index into it.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionTable<T>([T; 5]);

impl<T> DimensionTable<T> {
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        DimensionTable(std::array::from_fn(|i| f(Dimension::ALL[i])))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(Dimension, &T) -> U) -> DimensionTable<U> {
        DimensionTable(std::array::from_fn(|i| {
            f(Dimension::ALL[i], &self.0[i])
        }))
    }
}

impl<T> Index<Dimension> for DimensionTable<T> {
    type Output = T;

    fn index(&self, dim: Dimension) -> &T {
        &self.0[dim.ordinal()]
    }
}

impl<T> IndexMut<Dimension> for DimensionTable<T> {
    fn index_mut(&mut self, dim: Dimension) -> &mut T {
        &mut self.0[dim.ordinal()]
    }
}

impl<T: Serialize> Serialize for DimensionTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(5))?;
        for (dim, value) in self.iter() {
            map.serialize_entry(dim.name(), value)?;
        }
        map.end()
    }
}
