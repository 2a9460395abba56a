//! Acceptance predicate for a crowdfunding campaign living as records
//! in an append-only ledger.
//!
//! The campaign's whole lifecycle is encoded as invariants over ledger
//! records: a unique state token pins the authoritative campaign record
//! at the campaign's own address, pledges are records at that same
//! address carrying a backer commitment, and every transition (create,
//! cancel, finish, refund, clean-up) is a proposed transaction that
//! this crate either ratifies or rejects.
//!
//! The validator executes nothing and stores nothing. It is consulted
//! exactly once per proposed transaction with an immutable snapshot of
//! that transaction and re-derives every rule from the snapshot alone.
//! Races between competing proposals are settled by the host ledger's
//! consumption-exclusivity rule, not here.

mod accounting;
mod checks;
mod config;
mod error;
mod mint;
mod spend;

pub use {
  config::{CampaignConfig, STATE_TOKEN_NAME},
  error::Error,
};

/// Decides whether proposed transactions are legal transitions of one
/// campaign's lifecycle.
///
/// A pure function of the per-campaign [`CampaignConfig`] and the
/// transaction under scrutiny; see [`CampaignValidator::validate_mint`]
/// and [`CampaignValidator::validate_spend`] for the two entry points
/// the host environment invokes.
#[derive(Debug, Clone)]
pub struct CampaignValidator {
  config: CampaignConfig,
}

impl CampaignValidator {
  pub fn new(config: CampaignConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &CampaignConfig {
    &self.config
  }
}
