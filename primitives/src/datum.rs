use {
  crate::{Party, Slot},
  multihash::Multihash,
  serde::{de::DeserializeOwned, Deserialize, Serialize},
};

/// Lifecycle state of a campaign.
///
/// `Running` is the only non-terminal state. Accepted transitions are
/// Running -> Cancelled and Running -> Finished, nothing ever leaves a
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignState {
  Running,
  Cancelled,
  Finished,
}

/// The authoritative campaign record, co-located with exactly one unit
/// of the campaign's state token at the campaign's own address.
///
/// Only `state` ever changes after creation, goal, deadline and creator
/// are immutable for the lifetime of the campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignInfo {
  pub goal: u64,
  pub deadline: Slot,
  pub creator: Party,
  pub state: CampaignState,
}

impl CampaignInfo {
  /// The same campaign with its lifecycle state replaced.
  pub fn with_state(&self, state: CampaignState) -> Self {
    Self {
      state,
      ..self.clone()
    }
  }
}

/// The closed set of structured states a campaign-related record may
/// carry: the campaign record itself or one backer's pledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainState {
  Campaign(CampaignInfo),
  Backer(Party),
}

impl ChainState {
  /// Canonical byte encoding of a structured state.
  ///
  /// Refund batching relies on byte identity of pledge datums, so all
  /// producers and consumers must go through this one encoding.
  pub fn to_bytes(&self) -> Vec<u8> {
    rmp_serde::to_vec(self).unwrap()
  }

  pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
    rmp_serde::from_slice(bytes).ok()
  }
}

/// Structured state attachment of a ledger record.
///
/// The protocol only ever accepts the `Inline` form where a datum is
/// required, indirect attachment by hash is rejected wherever checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Datum {
  None,
  Inline(Vec<u8>),
  Hash(Multihash),
}

impl Datum {
  /// Inline attachment of a structured value in its canonical encoding.
  pub fn inline_of<T: Serialize>(value: &T) -> Self {
    Self::Inline(rmp_serde::to_vec(value).unwrap())
  }

  /// Decodes an inline attachment, `None` for absent or indirect
  /// datums and for bytes that do not decode as `T`.
  pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
    match self {
      Self::Inline(bytes) => rmp_serde::from_slice(bytes).ok(),
      _ => None,
    }
  }
}
