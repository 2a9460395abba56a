use {
  crate::{accounting, checks, CampaignValidator, Error},
  pledge_primitives::{
    Action,
    CampaignState,
    ChainState,
    Datum,
    InputRef,
    Party,
    Slot,
    Transaction,
  },
  tracing::debug,
};

impl CampaignValidator {
  /// The spend decision: may this transaction consume a campaign-owned
  /// record?
  ///
  /// Dispatches on the consumed record's structured state and the
  /// requested action:
  ///
  /// - campaign record + Cancel / Finish run the lifecycle transitions,
  /// - a pledge + Refund pays a backer out of a concluded campaign,
  /// - a pledge + Finish is the thin side-input path of a Finish
  ///   transaction and only re-checks that the campaign is Running,
  /// - no action at all is the platform clean-up path for records
  ///   stranded at a concluded campaign,
  /// - every other combination is a shape mismatch.
  pub fn validate_spend(
    &self,
    datum: &Datum,
    action: Option<Action>,
    consumed: &InputRef,
    tx: &Transaction,
  ) -> Result<(), Error> {
    let result = self.admit_spend(datum, action, tx);
    if let Err(error) = &result {
      debug!(%error, input = %consumed, ?action, "spend rejected");
    }
    result
  }

  fn admit_spend(
    &self,
    datum: &Datum,
    action: Option<Action>,
    tx: &Transaction,
  ) -> Result<(), Error> {
    let action = match action {
      Some(action) => action,
      None => return self.reclaim(tx),
    };

    match (checks::decode_state(datum)?, action) {
      (ChainState::Campaign(_), Action::Cancel) => self.cancel(tx),
      (ChainState::Campaign(_), Action::Finish) => self.finish(tx),
      (ChainState::Backer(backer), Action::Refund) => {
        self.refund(datum, &backer, tx)
      }
      (ChainState::Backer(_), Action::Finish) => {
        // the campaign-record half of the same transaction enforces
        // goal, payout and rewards; this half only pins the lifecycle
        checks::campaign_running(&tx.inputs, &self.config().campaign)
          .map(|_| ())
      }
      _ => Err(Error::ShapeMismatch),
    }
  }

  /// Running -> Cancelled. The creator may cancel at any time, the
  /// platform only once the deadline has passed.
  ///
  /// Timing and continuity both read the consumed campaign record, the
  /// dispatched datum only selects the transition.
  fn cancel(&self, tx: &Transaction) -> Result<(), Error> {
    let current = checks::campaign_running(&tx.inputs, &self.config().campaign)?;
    self.authorized_to_close(tx, current.deadline)?;
    checks::marker_continues(
      tx,
      &self.config().campaign,
      &current.with_state(CampaignState::Cancelled),
    )
  }

  /// Running -> Finished. Same signer rule as Cancel, plus the goal
  /// must be reached, the creator paid at least the collected sum and
  /// every clean pledge rewarded.
  fn finish(&self, tx: &Transaction) -> Result<(), Error> {
    let policy = self.config().campaign;

    let current = checks::campaign_running(&tx.inputs, &policy)?;
    self.authorized_to_close(tx, current.deadline)?;
    checks::marker_continues(
      tx,
      &policy,
      &current.with_state(CampaignState::Finished),
    )?;

    let contributed = accounting::total_contributions(tx, &policy)?;
    if contributed < current.goal {
      return Err(Error::GoalNotReached {
        contributed,
        goal: current.goal,
      });
    }

    let paid = accounting::paid_to(tx, &current.creator)?;
    if paid < contributed {
      return Err(Error::CreatorShortPaid {
        paid,
        due: contributed,
      });
    }

    accounting::rewards_distributed(tx, &policy)
  }

  /// Pays a backer back out of a campaign that is no longer Running.
  /// The campaign record is read through a reference, never consumed.
  fn refund(
    &self,
    pledge: &Datum,
    backer: &Party,
    tx: &Transaction,
  ) -> Result<(), Error> {
    let policy = self.config().campaign;

    let campaign = checks::current_campaign(&tx.reference_inputs, &policy)?;
    if campaign.state == CampaignState::Running {
      return Err(Error::StillRunning);
    }

    let committed = accounting::contribution_of(tx, &policy, pledge)?;
    let refunded = accounting::paid_to(tx, backer)?;
    if refunded < committed {
      return Err(Error::RefundShort {
        refunded,
        committed,
      });
    }
    Ok(())
  }

  /// The platform's escape hatch: stray records at a concluded campaign
  /// may be reclaimed by the platform authority.
  fn reclaim(&self, tx: &Transaction) -> Result<(), Error> {
    let campaign =
      checks::current_campaign(&tx.reference_inputs, &self.config().campaign)?;
    if campaign.state == CampaignState::Running {
      return Err(Error::StillRunning);
    }
    if !checks::signed_by(tx, &self.config().platform) {
      return Err(Error::PlatformNotSigner(self.config().platform));
    }
    Ok(())
  }

  /// The shared signer branch of Cancel and Finish: the creator alone
  /// may act at any time, the platform alone only at or after the
  /// stored deadline. Both require the signer set to be exactly the
  /// acting identity.
  fn authorized_to_close(
    &self,
    tx: &Transaction,
    deadline: Slot,
  ) -> Result<(), Error> {
    if checks::signed_exactly_by(tx, &self.config().creator.payment) {
      return Ok(());
    }
    if checks::signed_exactly_by(tx, &self.config().platform) {
      return checks::starts_at_or_after(tx, deadline);
    }
    Err(Error::Unauthorized)
  }
}
