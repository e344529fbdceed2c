extern crate serde;
extern crate serde_json;

#[macro_use]
extern crate serde_derive;

extern crate rand;
extern crate rand_xorshift;

extern crate arrayvec;

#[macro_use]
extern crate tracing;

pub mod error;
pub mod input;
pub mod engine;
pub mod strategy;
pub mod game;
