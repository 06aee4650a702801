mod commands;
mod worker;

pub(crate) use commands::SearchCommand;
pub use worker::{ChannelDispatch, SearchWorker};
