use serde::{Deserialize, Serialize};

/// One position in a match's player list.
///
/// Encodes the `0` / `-1` sentinels from the wire-level tournament data
/// model as a proper tagged union: [`Slot::Empty`] is a seat not yet
/// filled by propagation, [`Slot::Bye`] is a missing opponent (a
/// walkover), and [`Slot::Seed`] is an actual pre-tournament entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Seed(u32),
    Empty,
    Bye,
}

impl Slot {
    pub fn seed(n: u32) -> Self {
        Slot::Seed(n)
    }

    pub fn is_bye(self) -> bool {
        matches!(self, Slot::Bye)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn as_seed(self) -> Option<u32> {
        match self {
            Slot::Seed(n) => Some(n),
            _ => None,
        }
    }

    /// The sentinel integer form used by the data model in the original
    /// specification: a positive seed, `0` for [`Slot::Empty`], `-1` for
    /// [`Slot::Bye`].
    pub fn raw(self) -> i64 {
        match self {
            Slot::Seed(n) => n as i64,
            Slot::Empty => 0,
            Slot::Bye => -1,
        }
    }

    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Slot::Empty,
            -1 => Slot::Bye,
            n if n > 0 => Slot::Seed(n as u32),
            n => panic!("invalid slot sentinel {n}"),
        }
    }

    /// A seed greater than `np` has no real opponent to pair against and
    /// becomes a walkover marker.
    pub fn mark_walkover(seed: u32, np: u32) -> Self {
        if seed > np {
            Slot::Bye
        } else {
            Slot::Seed(seed)
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Seed(n) => write!(f, "{n}"),
            Slot::Empty => write!(f, "_"),
            Slot::Bye => write!(f, "bye"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trips() {
        for s in [Slot::Seed(7), Slot::Empty, Slot::Bye] {
            assert_eq!(Slot::from_raw(s.raw()), s);
        }
    }

    #[test]
    fn mark_walkover_keeps_real_seeds() {
        assert_eq!(Slot::mark_walkover(3, 8), Slot::Seed(3));
        assert_eq!(Slot::mark_walkover(9, 8), Slot::Bye);
    }
}
