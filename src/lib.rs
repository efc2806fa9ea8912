#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod arith;
pub mod array;
pub mod config;
pub mod demo;
pub mod error;
pub mod seq;

pub use arith::{Arith, DivZeroPolicy, OverflowPolicy, add, divide, multiply, subtract};
pub use array::{diff_array, print_array, sum_array, write_array};
pub use config::FixtureConfig;
pub use demo::run_demo;
pub use error::{FixtureError, Result};
pub use seq::IntSeq;
