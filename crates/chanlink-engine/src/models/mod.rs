pub mod channel;

pub use channel::{ChannelInfo, ChannelNameMap, Team};
