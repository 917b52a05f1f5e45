//! Unsigned integer type alias for quota capacities and demand amounts.
//!
//! This module defines `Uint` as the integer type used for every capacity
//! and admitted amount. The actual type is determined at compile time via
//! feature flags.
//!
//! # Features
//! - `amount-u64` (default): uses [`u64`] as `Uint`
//! - `amount-u128`: uses [`u128`] as `Uint`
//!   (Both features cannot be enabled at the same time.)
//! - If neither feature is enabled, `u64` is used as the default type.

#[cfg(all(feature = "amount-u64", feature = "amount-u128"))]
compile_error!("You cannot enable both `amount-u64` and `amount-u128` features at the same time");

/// Alias for the unsigned integer type used for capacities and amounts.
#[cfg(all(feature = "amount-u64", not(feature = "amount-u128")))]
pub type Uint = u64;

/// Alias for the unsigned integer type used for capacities and amounts.
#[cfg(all(feature = "amount-u128", not(feature = "amount-u64")))]
pub type Uint = u128;

/// Alias for the unsigned integer type used for capacities and amounts.
#[cfg(not(any(feature = "amount-u64", feature = "amount-u128")))]
pub type Uint = u64;
