use {
  once_cell::sync::Lazy,
  pledge_primitives::{Address, AssetName, InputRef, Party},
};

/// Name of the campaign state token, fixed for every campaign.
///
/// Uniqueness of the marker comes from the policy namespace (every
/// campaign has its own script identity), not from the name.
pub static STATE_TOKEN_NAME: Lazy<AssetName> =
  Lazy::new(|| AssetName::new(b"campaign".to_vec()).unwrap());

/// Fixed per-campaign configuration, supplied once at contract
/// instantiation time. The validator is a pure function of this
/// configuration and the transaction under scrutiny.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
  /// The platform authority. May close expired campaigns and clean up
  /// stray records of concluded ones.
  pub platform: Address,

  /// The campaign creator. Stored in the campaign record at creation
  /// and immutable afterwards.
  pub creator: Party,

  /// The one-time-spendable input whose consumption makes campaign
  /// creation unrepeatable for this (platform, creator, nonce) triple.
  pub nonce: InputRef,

  /// The campaign script's own identity. Owns the campaign and pledge
  /// records and acts as the token policy of marker and reward units.
  pub campaign: Address,
}

impl CampaignConfig {
  /// The address campaign and pledge records live at.
  pub fn script_address(&self) -> Party {
    Party::of(self.campaign)
  }
}
