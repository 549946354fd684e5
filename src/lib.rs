#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod address;
pub mod bus;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod indicator;
pub mod magnitude;
pub mod reading;
pub mod register_bus;
pub mod registers;
pub mod sensor;
#[cfg(test)]
mod testing;
