mod arena;
mod entry;
mod handle;
mod link;
mod raw_bimap;
mod tree;

pub(crate) use link::{LinkStore, Slot};
pub(crate) use raw_bimap::RawBiMap;
