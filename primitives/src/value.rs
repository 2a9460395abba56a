use {
  crate::Address,
  serde::{Deserialize, Serialize},
  std::{
    collections::BTreeMap,
    fmt::{Debug, Display},
  },
};

/// Longest permitted asset name in bytes.
///
/// Reward unit names are the raw 32 bytes of the rewarded backer's
/// payment identity, so the cap must admit at least that.
pub const MAX_ASSET_NAME_LEN: usize = 32;

/// Name of a token within a policy namespace.
#[derive(
  Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AssetName(Vec<u8>);

impl AssetName {
  pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, NameTooLong> {
    let bytes = bytes.into();
    if bytes.len() > MAX_ASSET_NAME_LEN {
      return Err(NameTooLong(bytes.len()));
    }
    Ok(Self(bytes))
  }

  /// Name of the reward unit owed to a backer, derived from their
  /// payment identity. Unique per backer and traceable back to them.
  pub fn reward_for(backer: &Address) -> Self {
    Self(backer.as_ref().to_vec())
  }
}

impl AsRef<[u8]> for AssetName {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Display for AssetName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", hex::encode(&self.0))
  }
}

impl Debug for AssetName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "asset({})", hex::encode(&self.0))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTooLong(pub usize);

impl Display for NameTooLong {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "asset name of {} bytes exceeds the {MAX_ASSET_NAME_LEN} byte limit",
      self.0
    )
  }
}

impl std::error::Error for NameTooLong {}

/// Value carried by a ledger record: an amount of the native currency
/// plus arbitrary non-native tokens keyed by (policy, name).
///
/// Zero quantities are never stored, so a value with an empty token map
/// is exactly a pure native-currency amount (a "clean" value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
  coin: u64,
  assets: BTreeMap<Address, BTreeMap<AssetName, u64>>,
}

impl Value {
  /// A pure native-currency amount.
  pub fn coins(amount: u64) -> Self {
    Self {
      coin: amount,
      assets: BTreeMap::new(),
    }
  }

  /// Adds a token quantity under a policy namespace. Zero quantities
  /// are dropped rather than stored.
  pub fn with_asset(
    mut self,
    policy: Address,
    name: AssetName,
    quantity: u64,
  ) -> Self {
    if quantity > 0 {
      *self
        .assets
        .entry(policy)
        .or_default()
        .entry(name)
        .or_default() += quantity;
    }
    self
  }

  pub fn coin(&self) -> u64 {
    self.coin
  }

  /// Quantity of a specific token, zero when absent.
  pub fn asset(&self, policy: &Address, name: &AssetName) -> u64 {
    self
      .assets
      .get(policy)
      .and_then(|names| names.get(name))
      .copied()
      .unwrap_or(0)
  }

  /// True when the value is purely native currency with no other token.
  pub fn only_coin(&self) -> bool {
    self.assets.is_empty()
  }

  /// Checked merge of two values. `None` on amount overflow.
  pub fn merge(mut self, other: Value) -> Option<Value> {
    self.coin = self.coin.checked_add(other.coin)?;
    for (policy, names) in other.assets {
      for (name, quantity) in names {
        let slot = self
          .assets
          .entry(policy)
          .or_default()
          .entry(name)
          .or_default();
        *slot = slot.checked_add(quantity)?;
      }
    }
    Some(self)
  }
}
