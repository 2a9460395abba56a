//! Value accounting over the transaction snapshot: contribution sums,
//! creator payouts, refunds and the reward-unit bijection.
//!
//! Sums are folded through the checked [`Value::merge`], an overflow in
//! any component of a sum rejects the transaction.

use {
  crate::Error,
  pledge_primitives::{
    Address,
    AssetName,
    ChainState,
    Datum,
    Party,
    Transaction,
    Value,
  },
};

/// Native-currency sum of every consumed input at the campaign address
/// whose structured state is a backer commitment, clean or not.
pub(crate) fn total_contributions(
  tx: &Transaction,
  policy: &Address,
) -> Result<u64, Error> {
  let script = Party::of(*policy);
  let mut total = Value::default();
  for input in &tx.inputs {
    if input.record.address != script {
      continue;
    }
    if let Some(ChainState::Backer(_)) = input.record.datum.decode() {
      total = total
        .merge(input.record.value.clone())
        .ok_or(Error::AmountOverflow)?;
    }
  }
  Ok(total.coin())
}

/// Native-currency sum of consumed inputs at the campaign address that
/// carry this exact pledge, compared byte for byte. Distinct backers in
/// one batched transaction never cross-credit each other.
pub(crate) fn contribution_of(
  tx: &Transaction,
  policy: &Address,
  pledge: &Datum,
) -> Result<u64, Error> {
  let script = Party::of(*policy);
  let mut total = Value::default();
  for input in &tx.inputs {
    if input.record.address == script && input.record.datum == *pledge {
      total = total
        .merge(input.record.value.clone())
        .ok_or(Error::AmountOverflow)?;
    }
  }
  Ok(total.coin())
}

/// Native-currency sum paid to a party across the proposed outputs.
pub(crate) fn paid_to(
  tx: &Transaction,
  party: &Party,
) -> Result<u64, Error> {
  let mut total = Value::default();
  for output in &tx.outputs {
    if output.address == *party {
      total = total
        .merge(output.value.clone())
        .ok_or(Error::AmountOverflow)?;
    }
  }
  Ok(total.coin())
}

/// For every clean pledge consumed from the campaign address, exactly
/// one reward unit named after its backer must land in outputs at that
/// backer's own address.
///
/// Pledges that carry any non-native token are counted toward the goal
/// but earn no reward here, a touched record must not be able to spoof
/// or double-collect reward issuance.
pub(crate) fn rewards_distributed(
  tx: &Transaction,
  policy: &Address,
) -> Result<(), Error> {
  let script = Party::of(*policy);
  for input in &tx.inputs {
    if input.record.address != script || !input.record.value.only_coin() {
      continue;
    }
    let backer = match input.record.datum.decode() {
      Some(ChainState::Backer(backer)) => backer,
      _ => continue,
    };

    let name = AssetName::reward_for(&backer.payment);
    let mut delivered = Value::default();
    for output in &tx.outputs {
      if output.address == backer {
        delivered = delivered
          .merge(output.value.clone())
          .ok_or(Error::AmountOverflow)?;
      }
    }
    let delivered = delivered.asset(policy, &name);
    if delivered != 1 {
      return Err(Error::RewardMissing {
        backer: backer.payment,
        delivered,
      });
    }
  }
  Ok(())
}
