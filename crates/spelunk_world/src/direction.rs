//! Travel directions.

use std::fmt;

/// A direction of travel between rooms.
///
/// The twelve standard directions each have a canonical name, a short
/// alias, and (for all of them) an inverse. `Custom` directions carry an
/// arbitrary exit word such as `"downstream"` and have no inverse, so they
/// cannot participate in two-way wiring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    Up,
    Down,
    In,
    Out,
    /// A named exit peculiar to one room.
    Custom(String),
}

impl Direction {
    /// The twelve standard directions, in compass-then-vertical order.
    pub const STANDARD: [Direction; 12] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
        Direction::Up,
        Direction::Down,
        Direction::In,
        Direction::Out,
    ];

    /// The eight compass points, the directions an outdoors room funnels
    /// into its catch-all when unwired.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
    ];

    /// The canonical name of this direction.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
            Self::Custom(name) => name,
        }
    }

    /// The short alias, if this is a standard direction.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::North => Some("n"),
            Self::Northeast => Some("ne"),
            Self::East => Some("e"),
            Self::Southeast => Some("se"),
            Self::South => Some("s"),
            Self::Southwest => Some("sw"),
            Self::West => Some("w"),
            Self::Northwest => Some("nw"),
            Self::Up => Some("u"),
            Self::Down => Some("d"),
            Self::In => Some("enter"),
            Self::Out => Some("exit"),
            Self::Custom(_) => None,
        }
    }

    /// The inverse direction, or `None` for custom exits.
    #[must_use]
    pub fn opposite(&self) -> Option<Direction> {
        match self {
            Self::North => Some(Self::South),
            Self::Northeast => Some(Self::Southwest),
            Self::East => Some(Self::West),
            Self::Southeast => Some(Self::Northwest),
            Self::South => Some(Self::North),
            Self::Southwest => Some(Self::Northeast),
            Self::West => Some(Self::East),
            Self::Northwest => Some(Self::Southeast),
            Self::Up => Some(Self::Down),
            Self::Down => Some(Self::Up),
            Self::In => Some(Self::Out),
            Self::Out => Some(Self::In),
            Self::Custom(_) => None,
        }
    }

    /// Resolves a standard direction from its name or alias.
    ///
    /// Custom exit words deliberately do not resolve here; they are scoped
    /// to the room that declares them.
    #[must_use]
    pub fn named(word: &str) -> Option<Direction> {
        Self::STANDARD
            .into_iter()
            .find(|d| d.name() == word || d.alias() == Some(word))
    }

    /// True for the eight compass points.
    #[must_use]
    pub fn is_compass(&self) -> bool {
        Self::COMPASS.contains(self)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
