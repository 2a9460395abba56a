use {
  crate::{
    b58::ToBase58String,
    Address,
    AssetName,
    Datum,
    Interval,
    Party,
    Value,
  },
  multihash::Multihash,
  serde::{Deserialize, Serialize},
  std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Display},
  },
};

/// Source reference of a ledger record: the transaction that produced
/// it and the output position within that transaction.
///
/// Reference equality is the nonce-matching relation used for replay
/// prevention at campaign creation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InputRef {
  pub txid: Multihash,
  pub index: u32,
}

impl InputRef {
  pub fn new(txid: Multihash, index: u32) -> Self {
    Self { txid, index }
  }
}

impl Display for InputRef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}#{}", self.txid.to_b58(), self.index)
  }
}

impl Debug for InputRef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "ref({self})")
  }
}

/// A ledger-resident unit of state: an owning address, a carried value
/// and an optional structured state attachment.
///
/// Appears both as a proposed output and as the resolved content of a
/// consumed or referenced input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  pub address: Party,
  pub value: Value,
  pub datum: Datum,
}

/// A consumed or referenced record together with its source reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
  pub reference: InputRef,
  pub record: Record,
}

/// The action a spending transaction requests against a campaign
/// record. Absence of an action is the platform clean-up path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
  Cancel,
  Finish,
  Refund,
}

/// An immutable snapshot of one proposed transaction, as handed over
/// by the host ledger. The validator never observes state outside of
/// this snapshot and never mutates it.
///
/// `signers` are declared identities whose signatures the host has
/// already verified. `mint` is the multiset of token quantities created
/// (positive) or destroyed (negative), keyed by policy namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
  pub inputs: Vec<Input>,
  pub reference_inputs: Vec<Input>,
  pub outputs: Vec<Record>,
  pub validity: Interval,
  pub signers: BTreeSet<Address>,
  pub mint: BTreeMap<Address, BTreeMap<AssetName, i64>>,
}

impl Transaction {
  /// Quantity minted (or burned, when negative) of one specific token.
  pub fn minted(&self, policy: &Address, name: &AssetName) -> i64 {
    self
      .mint
      .get(policy)
      .and_then(|names| names.get(name))
      .copied()
      .unwrap_or(0)
  }
}
