#![allow(dead_code)]

use {
  ed25519_dalek::Keypair,
  multihash::MultihashDigest,
  pledge_predicates::{CampaignConfig, CampaignValidator, STATE_TOKEN_NAME},
  pledge_primitives::{
    Address,
    AssetName,
    CampaignInfo,
    CampaignState,
    ChainState,
    Datum,
    Input,
    InputRef,
    Interval,
    Party,
    Record,
    Slot,
    Transaction,
    Value,
  },
  std::collections::{BTreeMap, BTreeSet},
};

pub fn identity() -> Address {
  Address::from(Keypair::generate(&mut rand::thread_rng()).public)
}

pub fn party() -> Party {
  Party::of(identity())
}

pub fn input_ref(seed: &[u8], index: u32) -> InputRef {
  InputRef::new(multihash::Code::Sha3_256.digest(seed), index)
}

/// One configured campaign instance: its validator, the configuration
/// behind it and the campaign record proposed at creation.
pub struct TestCampaign {
  pub validator: CampaignValidator,
  pub config: CampaignConfig,
  pub proposed: CampaignInfo,
}

pub fn campaign(goal: u64, deadline: Slot) -> TestCampaign {
  let config = CampaignConfig {
    platform: identity(),
    creator: party(),
    nonce: input_ref(b"designated-nonce", 0),
    campaign: identity(),
  };
  let proposed = CampaignInfo {
    goal,
    deadline,
    creator: config.creator,
    state: CampaignState::Running,
  };
  TestCampaign {
    validator: CampaignValidator::new(config.clone()),
    config,
    proposed,
  }
}

pub fn empty_tx(lower: Slot) -> Transaction {
  Transaction {
    inputs: vec![],
    reference_inputs: vec![],
    outputs: vec![],
    validity: Interval::starting_at(lower),
    signers: BTreeSet::new(),
    mint: BTreeMap::new(),
  }
}

/// The designated nonce record, owned by the campaign creator.
pub fn nonce_input(c: &TestCampaign) -> Input {
  Input {
    reference: c.config.nonce.clone(),
    record: Record {
      address: c.config.creator,
      value: Value::coins(5_000_000),
      datum: Datum::None,
    },
  }
}

/// The campaign record as an output: one state token plus the record's
/// structured state, locked at the campaign's own address.
pub fn marker_record(c: &TestCampaign, info: &CampaignInfo) -> Record {
  Record {
    address: c.config.script_address(),
    value: Value::coins(2_000_000).with_asset(
      c.config.campaign,
      STATE_TOKEN_NAME.clone(),
      1,
    ),
    datum: Datum::inline_of(&ChainState::Campaign(info.clone())),
  }
}

/// The current campaign record as a consumed or referenced input.
pub fn marker_input(c: &TestCampaign, state: CampaignState) -> Input {
  Input {
    reference: input_ref(b"campaign-marker", 0),
    record: marker_record(c, &c.proposed.with_state(state)),
  }
}

pub fn pledge_datum(backer: &Party) -> Datum {
  Datum::inline_of(&ChainState::Backer(*backer))
}

/// A backer's clean pledge record at the campaign address.
pub fn pledge_input(
  c: &TestCampaign,
  backer: &Party,
  amount: u64,
  seed: &[u8],
) -> Input {
  Input {
    reference: input_ref(seed, 1),
    record: Record {
      address: c.config.script_address(),
      value: Value::coins(amount),
      datum: pledge_datum(backer),
    },
  }
}

/// A well-formed campaign creation transaction: consumes the nonce,
/// mints one state token and locks it at the campaign address together
/// with the proposed record.
pub fn creation_tx(c: &TestCampaign, lower: Slot) -> Transaction {
  let mut tx = empty_tx(lower);
  tx.inputs.push(nonce_input(c));
  tx.outputs.push(marker_record(c, &c.proposed));
  tx.mint
    .entry(c.config.campaign)
    .or_default()
    .insert(STATE_TOKEN_NAME.clone(), 1);
  tx.signers.insert(c.config.creator.payment);
  tx
}

/// A well-formed Cancel transaction signed by `signer`.
pub fn cancel_tx(c: &TestCampaign, lower: Slot, signer: Address) -> Transaction {
  let mut tx = empty_tx(lower);
  tx.inputs.push(marker_input(c, CampaignState::Running));
  tx.outputs
    .push(marker_record(c, &c.proposed.with_state(CampaignState::Cancelled)));
  tx.signers.insert(signer);
  tx
}

/// A well-formed Finish transaction: consumes the running campaign
/// record and all given pledges, pays the collected sum to the creator
/// and delivers one freshly minted reward unit to every backer.
pub fn finish_tx(
  c: &TestCampaign,
  backers: &[(Party, u64)],
  lower: Slot,
) -> Transaction {
  let mut tx = empty_tx(lower);
  tx.inputs.push(marker_input(c, CampaignState::Running));
  tx.outputs
    .push(marker_record(c, &c.proposed.with_state(CampaignState::Finished)));

  let mut collected: u64 = 0;
  for (position, (backer, amount)) in backers.iter().enumerate() {
    let seed = [b"pledge".as_slice(), &[position as u8]].concat();
    tx.inputs.push(pledge_input(c, backer, *amount, &seed));
    collected += amount;

    let reward = AssetName::reward_for(&backer.payment);
    tx.mint
      .entry(c.config.campaign)
      .or_default()
      .insert(reward.clone(), 1);
    tx.outputs.push(Record {
      address: *backer,
      value: Value::coins(1_500_000).with_asset(c.config.campaign, reward, 1),
      datum: Datum::None,
    });
  }

  tx.outputs.push(Record {
    address: c.config.creator,
    value: Value::coins(collected),
    datum: Datum::None,
  });
  tx.signers.insert(c.config.creator.payment);
  tx
}

/// A well-formed Refund transaction for one backer of a cancelled
/// campaign: reads the campaign record through a reference, consumes
/// the pledge and pays `refund` back to the backer's own address.
pub fn refund_tx(
  c: &TestCampaign,
  backer: &Party,
  committed: u64,
  refund: u64,
) -> Transaction {
  let mut tx = empty_tx(0);
  tx.reference_inputs
    .push(marker_input(c, CampaignState::Cancelled));
  tx.inputs
    .push(pledge_input(c, backer, committed, b"refunded-pledge"));
  tx.outputs.push(Record {
    address: *backer,
    value: Value::coins(refund),
    datum: Datum::None,
  });
  tx.signers.insert(backer.payment);
  tx
}
