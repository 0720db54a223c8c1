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

use crate::shamir::{field::Modulus, Error};

use std::borrow::Borrow;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Why a particular share could not be given a Lagrange coefficient.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
pub enum FailureKind {
    #[error("share index must be a positive integer")]
    NonPositiveIndex,

    #[error("share index is a multiple of the modulus (x = 0)")]
    ZeroIndex,

    #[error("index collides with index {other} modulo p (duplicate share)")]
    DuplicateIndex { other: i64 },

    #[error("difference with index {other} is not invertible (is the modulus prime?)")]
    NonInvertible { other: i64 },
}

/// A share whose Lagrange coefficient could not be computed.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
#[error("share {index}: {kind}")]
pub struct LagrangeFailure {
    pub index: i64,
    pub kind: FailureKind,
}

impl LagrangeFailure {
    fn new(index: i64, kind: FailureKind) -> Self {
        Self { index, kind }
    }
}

// Any multiple of p is the point x = 0, whose y value is the secret itself.
fn is_zero_point(modulus: &Modulus, x: i64) -> bool {
    modulus.reduce(&BigInt::from(x)).is_zero()
}

/// Compute the Lagrange basis polynomial of the `j`th point evaluated at zero,
///
///   l_j(0) = \prod_{m=0,m!=j}^{k} \frac{0-x_m}{x_j-x_m}
///
/// with the division done by multiplying with the modular inverse. Every
/// offending `x_m` is reported, not just the first one.
fn lagrange_basis(
    modulus: &Modulus,
    xs: &[i64],
    j: usize,
) -> Result<BigUint, Vec<LagrangeFailure>> {
    let x_j = xs[j];
    if x_j <= 0 {
        return Err(vec![LagrangeFailure::new(
            x_j,
            FailureKind::NonPositiveIndex,
        )]);
    }
    if is_zero_point(modulus, x_j) {
        return Err(vec![LagrangeFailure::new(x_j, FailureKind::ZeroIndex)]);
    }

    let mut failures = vec![];
    let mut basis = BigUint::one();
    for (m, &x_m) in xs.iter().enumerate() {
        // Unusable x values get their own failure, there's no point in
        // reporting them once for every other point too.
        if m == j || x_m <= 0 || is_zero_point(modulus, x_m) {
            continue;
        }

        let numerator = modulus.reduce(&-BigInt::from(x_m));
        let denominator = modulus.reduce(&(BigInt::from(x_j) - BigInt::from(x_m)));
        if denominator.is_zero() {
            failures.push(LagrangeFailure::new(
                x_j,
                FailureKind::DuplicateIndex { other: x_m },
            ));
            continue;
        }
        match modulus.inverse(&denominator) {
            Ok(denominator_inv) => {
                basis = modulus.mul(&basis, &modulus.mul(&numerator, &denominator_inv))
            }
            Err(_) => failures.push(LagrangeFailure::new(
                x_j,
                FailureKind::NonInvertible { other: x_m },
            )),
        }
    }

    if failures.is_empty() {
        Ok(basis)
    } else {
        Err(failures)
    }
}

/// Recover the secret (the constant term of the polynomial) from a set of
/// `(index, value)` shares using [Lagrange interpolation][lagrange] at `x = 0`.
///
/// Any collection of pairs works, such as a `&HashMap<i64, BigUint>`, a
/// `Vec<(i64, BigUint)>` or `shares.iter().map(Share::as_point)`. The order of
/// the shares does not matter.
///
/// If at least `threshold` valid shares from the same [`Dealer`] are given,
/// the result is the dealer's secret (modulo `modulus`). With fewer shares the
/// result is some field element which is not (in general) the secret. This
/// cannot be detected here, since the threshold is not recorded in the
/// shares.
///
/// If any shares are unusable (a non-positive index, an index that is a
/// multiple of `modulus`, two indices that are
/// equal modulo `modulus`, or a composite `modulus` producing a
/// non-invertible denominator) all of them are returned together in
/// [`Error::Reconstruction`], sorted by index.
///
/// [lagrange]: https://en.wikipedia.org/wiki/Lagrange_polynomial
/// [`Dealer`]: super::Dealer
pub fn recover_secret<I, K, V>(shares: I, modulus: &BigUint) -> Result<BigUint, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: Borrow<i64>,
    V: Borrow<BigUint>,
{
    let modulus = Modulus::new(modulus.clone())?;

    let (xs, ys): (Vec<i64>, Vec<V>) = shares
        .into_iter()
        .map(|(x, y)| (*x.borrow(), y))
        .unzip();
    if xs.is_empty() {
        return Err(Error::NoShares);
    }

    tracing::trace!(
        num_shares = xs.len(),
        modulus_bits = modulus.bits(),
        "recovering secret"
    );

    // L(0) = \sum_{j=0}^{k} y_j l_j(0)
    let mut failures = vec![];
    let mut secret = BigUint::zero();
    for (j, y_j) in ys.iter().enumerate() {
        match lagrange_basis(&modulus, &xs, j) {
            Ok(basis) => secret = modulus.add(&secret, &modulus.mul(y_j.borrow(), &basis)),
            Err(mut errs) => failures.append(&mut errs),
        }
    }

    if !failures.is_empty() {
        failures.sort();
        failures.dedup();
        tracing::debug!(
            num_failures = failures.len(),
            "lagrange interpolation failed"
        );
        return Err(Error::Reconstruction(failures));
    }
    Ok(secret)
}
