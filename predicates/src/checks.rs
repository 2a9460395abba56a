//! Leaf predicates shared by the mint and spend decisions.
//!
//! Each check is a stateless function of the transaction snapshot and
//! explicit arguments. They compose with `?` into the transitions, the
//! first failing clause rejects the whole transaction.

use {
  crate::{config::STATE_TOKEN_NAME, Error},
  pledge_primitives::{
    Address,
    CampaignInfo,
    CampaignState,
    ChainState,
    Datum,
    Input,
    InputRef,
    Party,
    Slot,
    Transaction,
  },
};

/// Strict authorization: the declared signer set must be exactly the
/// singleton holding the required identity, a superset does not pass.
pub(crate) fn signed_exactly_by(tx: &Transaction, required: &Address) -> bool {
  tx.signers.len() == 1 && tx.signers.contains(required)
}

/// Weak membership used only by the platform clean-up path.
pub(crate) fn signed_by(tx: &Transaction, required: &Address) -> bool {
  tx.signers.contains(required)
}

/// The validity window must provably start before the deadline. Guards
/// creation against admitting an already-expired campaign.
pub(crate) fn starts_before(
  tx: &Transaction,
  deadline: Slot,
) -> Result<(), Error> {
  match tx.validity.lower_slot() {
    Some(at) if at < deadline => Ok(()),
    Some(_) => Err(Error::CampaignExpired { deadline }),
    None => Err(Error::UnboundedValidityStart),
  }
}

/// The validity window must provably start at or after the deadline.
/// Gate for the platform branch of Cancel and Finish.
pub(crate) fn starts_at_or_after(
  tx: &Transaction,
  deadline: Slot,
) -> Result<(), Error> {
  match tx.validity.lower_slot() {
    Some(at) if at >= deadline => Ok(()),
    Some(_) => Err(Error::DeadlineNotReached { deadline }),
    None => Err(Error::UnboundedValidityStart),
  }
}

/// The designated nonce must be consumed by this transaction and its
/// record owned by the creator's payment identity. This is the sole
/// replay prevention for campaign creation.
pub(crate) fn nonce_consumed(
  tx: &Transaction,
  nonce: &InputRef,
  creator: &Party,
) -> Result<(), Error> {
  for input in &tx.inputs {
    if input.reference == *nonce {
      if input.record.address.payment != creator.payment {
        return Err(Error::ForeignNonce);
      }
      return Ok(());
    }
  }
  Err(Error::NonceNotConsumed(nonce.clone()))
}

/// The campaign policy namespace of the mint multiset must be exactly
/// one unit of the state token and nothing else.
pub(crate) fn marker_minted_once(
  tx: &Transaction,
  policy: &Address,
) -> Result<(), Error> {
  let minted = match tx.mint.get(policy) {
    Some(minted) => minted,
    None => return Err(Error::BadMarkerMint(0)),
  };

  let mut marker_quantity = 0;
  for (name, quantity) in minted {
    if name == &*STATE_TOKEN_NAME {
      marker_quantity = *quantity;
    } else {
      return Err(Error::ForeignMint(name.clone()));
    }
  }

  if marker_quantity != 1 {
    return Err(Error::BadMarkerMint(marker_quantity));
  }
  Ok(())
}

/// The state token must be re-sent to the campaign's own address as
/// exactly one unit, in exactly one output, carrying `expected` as its
/// inline structured state.
pub(crate) fn marker_continues(
  tx: &Transaction,
  policy: &Address,
  expected: &CampaignInfo,
) -> Result<(), Error> {
  let expected_datum =
    Datum::inline_of(&ChainState::Campaign(expected.clone()));
  let script = Party::of(*policy);

  let mut found = false;
  for output in &tx.outputs {
    let quantity = output.value.asset(policy, &STATE_TOKEN_NAME);
    if quantity == 0 {
      continue;
    }
    if found
      || quantity != 1
      || output.address != script
      || output.datum != expected_datum
    {
      return Err(Error::BrokenContinuity);
    }
    found = true;
  }

  if found {
    Ok(())
  } else {
    Err(Error::BrokenContinuity)
  }
}

/// Decodes the structured state of a record, distinguishing the absent,
/// indirect and undecodable failure shapes.
pub(crate) fn decode_state(datum: &Datum) -> Result<ChainState, Error> {
  match datum {
    Datum::Inline(bytes) => {
      ChainState::from_bytes(bytes).ok_or(Error::UndecodableState)
    }
    Datum::Hash(_) => Err(Error::IndirectState),
    Datum::None => Err(Error::MissingState),
  }
}

/// Scans a record list for the one carrying exactly one unit of the
/// campaign's state token and returns its decoded campaign record.
///
/// Callers pass consumed inputs or referenced inputs depending on
/// whether the transition spends the campaign record or only reads it.
pub(crate) fn current_campaign(
  records: &[Input],
  policy: &Address,
) -> Result<CampaignInfo, Error> {
  for input in records {
    if input.record.value.asset(policy, &STATE_TOKEN_NAME) == 1 {
      return match decode_state(&input.record.datum)? {
        ChainState::Campaign(info) => Ok(info),
        ChainState::Backer(_) => Err(Error::UndecodableState),
      };
    }
  }
  Err(Error::MarkerNotFound)
}

/// As [`current_campaign`], additionally requiring the Running state.
pub(crate) fn campaign_running(
  records: &[Input],
  policy: &Address,
) -> Result<CampaignInfo, Error> {
  let info = current_campaign(records, policy)?;
  if info.state != CampaignState::Running {
    return Err(Error::NotRunning);
  }
  Ok(info)
}
