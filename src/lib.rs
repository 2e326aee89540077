#[macro_use]
extern crate serde_derive;

mod entry;
pub mod treap;
