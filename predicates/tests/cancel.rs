mod common;

use {
  common::{campaign, cancel_tx, identity, marker_input, marker_record},
  pledge_predicates::Error,
  pledge_primitives::{Action, CampaignState, ChainState, Datum, Interval},
};

fn campaign_datum(c: &common::TestCampaign) -> Datum {
  Datum::inline_of(&ChainState::Campaign(c.proposed.clone()))
}

#[test]
fn creator_cancels_before_the_deadline() {
  let c = campaign(1000, 100);
  let tx = cancel_tx(&c, 10, c.config.creator.payment);
  assert_eq!(
    c.validator.validate_spend(
      &campaign_datum(&c),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Ok(())
  );
}

#[test]
fn platform_must_wait_for_the_deadline() {
  let c = campaign(1000, 100);

  let tx = cancel_tx(&c, 10, c.config.platform);
  assert_eq!(
    c.validator.validate_spend(
      &campaign_datum(&c),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Err(Error::DeadlineNotReached { deadline: 100 })
  );

  // at the deadline the platform branch opens
  let tx = cancel_tx(&c, 100, c.config.platform);
  assert_eq!(
    c.validator.validate_spend(
      &campaign_datum(&c),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Ok(())
  );
}

#[test]
fn platform_branch_needs_a_finite_window_start() {
  let c = campaign(1000, 100);
  let mut tx = cancel_tx(&c, 100, c.config.platform);
  tx.validity = Interval::always();
  assert_eq!(
    c.validator.validate_spend(
      &campaign_datum(&c),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Err(Error::UnboundedValidityStart)
  );
}

#[test]
fn timing_follows_the_consumed_campaign_record() {
  let c = campaign(1000, 100);
  let tx = cancel_tx(&c, 50, c.config.platform);

  // a dispatched datum claiming an earlier deadline must not open the
  // platform branch ahead of the consumed record's own deadline
  let mut forged = c.proposed.clone();
  forged.deadline = 5;
  assert_eq!(
    c.validator.validate_spend(
      &Datum::inline_of(&ChainState::Campaign(forged)),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Err(Error::DeadlineNotReached { deadline: 100 })
  );
}

#[test]
fn stranger_cannot_cancel() {
  let c = campaign(1000, 100);
  let tx = cancel_tx(&c, 10, identity());
  assert_eq!(
    c.validator.validate_spend(
      &campaign_datum(&c),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Err(Error::Unauthorized)
  );
}

#[test]
fn signer_set_must_be_exactly_the_acting_identity() {
  let c = campaign(1000, 100);

  // creator and platform together are not the creator alone
  let mut tx = cancel_tx(&c, 10, c.config.creator.payment);
  tx.signers.insert(c.config.platform);
  assert_eq!(
    c.validator.validate_spend(
      &campaign_datum(&c),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Err(Error::Unauthorized)
  );
}

#[test]
fn terminal_states_cannot_be_cancelled() {
  let c = campaign(1000, 100);
  let mut tx = cancel_tx(&c, 10, c.config.creator.payment);
  tx.inputs[0] = marker_input(&c, CampaignState::Cancelled);
  assert_eq!(
    c.validator.validate_spend(
      &campaign_datum(&c),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Err(Error::NotRunning)
  );
}

#[test]
fn cancel_must_rewrite_state_and_nothing_else() {
  let c = campaign(1000, 100);

  // state left Running
  let mut tx = cancel_tx(&c, 10, c.config.creator.payment);
  tx.outputs[0] = marker_record(&c, &c.proposed);
  assert_eq!(
    c.validator.validate_spend(
      &campaign_datum(&c),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Err(Error::BrokenContinuity)
  );

  // goal quietly doubled alongside the cancellation
  let mut tx = cancel_tx(&c, 10, c.config.creator.payment);
  let mut forged = c.proposed.with_state(CampaignState::Cancelled);
  forged.goal *= 2;
  tx.outputs[0] = marker_record(&c, &forged);
  assert_eq!(
    c.validator.validate_spend(
      &campaign_datum(&c),
      Some(Action::Cancel),
      &tx.inputs[0].reference,
      &tx
    ),
    Err(Error::BrokenContinuity)
  );
}
