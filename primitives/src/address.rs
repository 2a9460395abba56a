use {
  ed25519_dalek::PublicKey,
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    str::FromStr,
  },
};

/// Identity of a protocol participant or of the campaign script itself.
///
/// For wallets this is the 32-byte public key controlling the funds, for
/// the campaign it is the script identity that simultaneously acts as the
/// token policy namespace of the campaign's state and reward tokens.
///
/// Signature production and verification happen in the host environment,
/// the validator only ever compares identities for equality.
#[derive(
  Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Address([u8; 32]);

impl Address {
  pub const fn new(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }
}

impl AsRef<[u8]> for Address {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", bs58::encode(self.0).into_string())
  }
}

impl Debug for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "address({})", bs58::encode(self.0).into_string())
  }
}

impl From<Address> for String {
  fn from(addr: Address) -> Self {
    bs58::encode(addr.0).into_string()
  }
}

impl FromStr for Address {
  type Err = bs58::decode::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut bytes = [0u8; 32];
    bs58::decode(s).into(&mut bytes)?;
    Ok(Self(bytes))
  }
}

impl TryFrom<&str> for Address {
  type Error = bs58::decode::Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    FromStr::from_str(value)
  }
}

impl From<PublicKey> for Address {
  fn from(p: PublicKey) -> Self {
    Self(*p.as_bytes())
  }
}

/// A payment identity with an optional stake/delegation identity.
///
/// Every ledger record is owned by a party and both campaign datum
/// variants store one: the creator in the campaign record and the
/// contributor in a backer commitment. The campaign script's own
/// address is a party without a stake part.
///
/// Matching outputs against a party compares the full pair, so funds
/// sent to the right payment key under a different delegation do not
/// count as paid to that party.
#[derive(
  Copy,
  Clone,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
  Debug,
)]
pub struct Party {
  pub payment: Address,
  pub stake: Option<Address>,
}

impl Party {
  /// A party addressed by its payment identity alone.
  pub const fn of(payment: Address) -> Self {
    Self {
      payment,
      stake: None,
    }
  }

  /// A party whose funds are delegated to a separate stake identity.
  pub const fn delegated(payment: Address, stake: Address) -> Self {
    Self {
      payment,
      stake: Some(stake),
    }
  }
}

impl Display for Party {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.stake {
      Some(stake) => write!(f, "{}/{stake}", self.payment),
      None => Display::fmt(&self.payment, f),
    }
  }
}
