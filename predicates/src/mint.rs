use {
  crate::{checks, CampaignValidator, Error},
  pledge_primitives::{CampaignInfo, CampaignState, Transaction},
  tracing::debug,
};

impl CampaignValidator {
  /// The mint decision: may this transaction bring a new campaign into
  /// existence?
  ///
  /// Admits exactly one well-formed creation per nonce. The proposed
  /// record must be a Running campaign owned by the configured creator
  /// with a positive goal and a deadline still ahead of the validity
  /// window, the nonce must be consumed, and exactly one freshly minted
  /// state token must be locked at the campaign address together with
  /// the proposed record.
  pub fn validate_mint(
    &self,
    proposed: &CampaignInfo,
    tx: &Transaction,
  ) -> Result<(), Error> {
    let result = self.admit_creation(proposed, tx);
    if let Err(error) = &result {
      debug!(%error, campaign = %self.config().campaign, "creation rejected");
    }
    result
  }

  fn admit_creation(
    &self,
    proposed: &CampaignInfo,
    tx: &Transaction,
  ) -> Result<(), Error> {
    let config = self.config();

    if proposed.state != CampaignState::Running {
      return Err(Error::NotCreatedRunning);
    }
    if proposed.creator != config.creator {
      return Err(Error::CreatorMismatch);
    }
    if proposed.goal == 0 {
      return Err(Error::ZeroGoal);
    }

    checks::starts_before(tx, proposed.deadline)?;
    checks::nonce_consumed(tx, &config.nonce, &config.creator)?;
    checks::marker_minted_once(tx, &config.campaign)?;
    checks::marker_continues(tx, &config.campaign, proposed)
  }
}
