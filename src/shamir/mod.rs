/*
 * shamirss: Shamir secret sharing over prime fields
 * Copyright (C) 2018-2022 Aleksa Sarai <cyphar@cyphar.com>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! This package implements a Shamir Secret Sharing scheme in `GF(p)` for an
//! arbitrary (caller-provided) prime `p`. Secrets, shares and the modulus are
//! all arbitrary-precision integers, so a whole key can be shared as a single
//! field element provided the prime is large enough to hold it.
//!
//! A [`Dealer`] holds the secret polynomial and hands out shares for any
//! positive index, and [`recover_secret`] interpolates the secret back out of
//! a set of shares. The two only need to agree on the modulus.
//!
//! ## Security ##
//! **This implementation is not remotely constant time (`num-bigint` makes no
//! such promises) and has not been reviewed by any cryptographers.** The
//! secrecy guarantee of the scheme only holds if the prime is larger than
//! every secret you intend to share, since secrets are reduced modulo `p`.

pub mod field;
mod dealer;
mod recover;
mod share;

pub use dealer::Dealer;
pub use recover::{recover_secret, FailureKind, LagrangeFailure};
pub use share::Share;

use itertools::Itertools;
use num_bigint::BigUint;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("modulus {modulus} is not prime")]
    InvalidModulus { modulus: BigUint },

    #[error("threshold must be at least 1")]
    InvalidThreshold,

    #[error("share index must be positive and not a multiple of the modulus (got {index})")]
    InvalidIndex { index: i64 },

    #[error("no shares were provided to recover the secret from")]
    NoShares,

    #[error(
        "lagrange interpolation failed for {} share(s): {}",
        .0.len(),
        .0.iter().join("; ")
    )]
    Reconstruction(Vec<LagrangeFailure>),

    #[error("field arithmetic failed: {0}")]
    Field(#[from] field::Error),
}
