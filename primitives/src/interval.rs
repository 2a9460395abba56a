use serde::{Deserialize, Serialize};

/// A point in the ledger's logical time.
pub type Slot = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
  Finite(Slot),
  Unbounded,
}

/// The time range within which a proposed transaction claims to be
/// evaluated. Declared by the proposer, attested by the ledger.
///
/// The campaign protocol only ever consults the lower bound: deadline
/// rules need to know the earliest moment the transaction can be valid
/// at, never the latest. A transaction with an unbounded lower bound
/// cannot prove anything about deadlines and fails every timing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
  pub lower: Bound,
  pub upper: Bound,
}

impl Interval {
  /// The interval `[slot, +inf)`.
  pub fn starting_at(slot: Slot) -> Self {
    Self {
      lower: Bound::Finite(slot),
      upper: Bound::Unbounded,
    }
  }

  /// The unbounded interval.
  pub fn always() -> Self {
    Self {
      lower: Bound::Unbounded,
      upper: Bound::Unbounded,
    }
  }

  /// The declared lower bound, if finite.
  pub fn lower_slot(&self) -> Option<Slot> {
    match self.lower {
      Bound::Finite(slot) => Some(slot),
      Bound::Unbounded => None,
    }
  }
}
