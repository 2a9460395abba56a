use {
  pledge_primitives::{Address, AssetName, InputRef, Slot},
  thiserror::Error,
};

/// Every way a proposed transaction can fail the campaign predicate.
///
/// All variants are equally fatal for the transaction. The distinction
/// only tells a proposer which clause rejected their transaction, the
/// protocol itself cares solely about accept vs reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  // shape failures
  #[error("attached state does not match the requested action")]
  ShapeMismatch,

  #[error("record state must be attached inline, not by hash")]
  IndirectState,

  #[error("attached state bytes do not decode as a known variant")]
  UndecodableState,

  #[error("a structured state attachment is required but absent")]
  MissingState,

  // authorization failures
  #[error("neither the creator nor the platform authorized this transition")]
  Unauthorized,

  #[error("platform identity {0} is not among the declared signers")]
  PlatformNotSigner(Address),

  // timing failures
  #[error("campaign deadline (slot {deadline}) is not after the validity window start")]
  CampaignExpired { deadline: Slot },

  #[error("deadline (slot {deadline}) has not passed at the validity window start")]
  DeadlineNotReached { deadline: Slot },

  #[error("the validity window lower bound must be finite")]
  UnboundedValidityStart,

  // malformed creation proposals
  #[error("campaign goal must be strictly positive")]
  ZeroGoal,

  #[error("proposed campaign creator does not match the configured creator")]
  CreatorMismatch,

  #[error("a newly created campaign must start in the Running state")]
  NotCreatedRunning,

  // accounting failures
  #[error("funding goal not reached: contributed {contributed} of {goal}")]
  GoalNotReached { contributed: u64, goal: u64 },

  #[error("creator is paid {paid}, backers contributed {due}")]
  CreatorShortPaid { paid: u64, due: u64 },

  #[error("refund pays {refunded}, backer committed {committed}")]
  RefundShort { refunded: u64, committed: u64 },

  #[error("exactly one state token must be minted, found quantity {0}")]
  BadMarkerMint(i64),

  #[error("unexpected asset {0} issued under the campaign policy")]
  ForeignMint(AssetName),

  #[error("backer {backer} received {delivered} reward units, expected exactly one")]
  RewardMissing { backer: Address, delivered: u64 },

  #[error("value sum overflowed")]
  AmountOverflow,

  // continuity failures
  #[error(
    "the campaign state token is not re-sent to the campaign address with \
     the expected next state"
  )]
  BrokenContinuity,

  // replay and identity failures
  #[error("designated nonce input {0} is not consumed by this transaction")]
  NonceNotConsumed(InputRef),

  #[error("the consumed nonce input is not owned by the campaign creator")]
  ForeignNonce,

  #[error("no record carrying the campaign state token was found")]
  MarkerNotFound,

  #[error("the campaign is not in the Running state")]
  NotRunning,

  #[error("the campaign is still in the Running state")]
  StillRunning,
}
