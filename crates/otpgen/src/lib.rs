#![doc = include_str!("../README.md")]

mod entropy;
mod error;
mod generator;
mod os_random;
mod token;

pub use crate::entropy::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::os_random::*;
pub use crate::token::*;
