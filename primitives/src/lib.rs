mod address;
mod b58;
mod datum;
mod interval;
mod transaction;
mod value;

pub use {
  address::{Address, Party},
  b58::ToBase58String,
  datum::{CampaignInfo, CampaignState, ChainState, Datum},
  interval::{Bound, Interval, Slot},
  transaction::{Action, Input, InputRef, Record, Transaction},
  value::{AssetName, NameTooLong, Value, MAX_ASSET_NAME_LEN},
};
