use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Cylinder count of the classic assignment disk (cylinders 0 through 299).
pub const DEFAULT_CYLINDERS: usize = 300;
/// Largest cylinder count accepted. Request files hold `i32` values, so nothing beyond
/// this could ever be requested, and head movement sums stay well inside `usize`.
pub const MAX_CYLINDERS: usize = 1 << 31;
/// Number of requests the classic request file holds.
pub const DEFAULT_REQUESTS: usize = 20;

/// Which way the head is travelling when scheduling starts.
///
/// Only the sweep algorithms (SCAN, C-SCAN, LOOK, C-LOOK) look at this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEFT" => Ok(Direction::Left),
            "RIGHT" => Ok(Direction::Right),
            other => Err(ConfigError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "LEFT"),
            Direction::Right => write!(f, "RIGHT"),
        }
    }
}

/// Physical shape of the disk: how many cylinders the head can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskGeometry {
    cylinders: usize,
}

impl DiskGeometry {
    pub fn new(cylinders: usize) -> Result<Self, ConfigError> {
        if cylinders == 0 {
            return Err(ConfigError::NoCylinders);
        }
        if cylinders > MAX_CYLINDERS {
            return Err(ConfigError::TooManyCylinders {
                cylinders,
                max: MAX_CYLINDERS,
            });
        }
        Ok(DiskGeometry { cylinders })
    }

    pub fn cylinders(&self) -> usize {
        self.cylinders
    }

    /// The outermost cylinder, used as the right-hand boundary entry.
    pub fn max_cylinder(&self) -> usize {
        self.cylinders - 1
    }

    pub fn contains(&self, cylinder: usize) -> bool {
        cylinder < self.cylinders
    }

    /// Parses an initial head position and checks it lies on this disk.
    pub fn parse_head(&self, token: &str) -> Result<usize, ConfigError> {
        token
            .parse::<usize>()
            .ok()
            .filter(|position| self.contains(*position))
            .ok_or_else(|| ConfigError::HeadOutOfRange {
                head: token.to_string(),
                max: self.max_cylinder(),
            })
    }
}

impl Default for DiskGeometry {
    fn default() -> Self {
        DiskGeometry {
            cylinders: DEFAULT_CYLINDERS,
        }
    }
}

/// Where the head starts and which way it is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head {
    pub position: usize,
    pub direction: Direction,
}

impl Head {
    pub fn new(position: usize, direction: Direction) -> Self {
        Head {
            position,
            direction,
        }
    }
}
