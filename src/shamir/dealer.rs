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

use crate::shamir::{field::Modulus, Error, Share};

use std::fmt;

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::Zero;
use rand::{rngs::OsRng, CryptoRng, RngCore};

/// Owner of a secret polynomial
/// `P(x) = secret + c_1 x + ... + c_{t-1} x^{t-1}` over `GF(p)`, which hands
/// out shares (points on `P`) for any positive index.
///
/// The polynomial is generated once in [`Dealer::new`] and never changes, so
/// asking for the same index twice gives the same share and a `Dealer` can be
/// shared between threads without any locking.
#[derive(Clone)]
pub struct Dealer {
    modulus: Modulus,
    threshold: u32,
    secret: BigUint,
    // Coefficients of x^1 .. x^{t-1} in increasing degree. The constant term
    // is the secret itself.
    coeffs: Vec<BigUint>,
}

// Never print the secret or the polynomial.
impl fmt::Debug for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dealer")
            .field("modulus", self.modulus.inner())
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Dealer {
    /// Create a new `Dealer` for `secret`, such that any `threshold` shares
    /// are enough to recover it. The polynomial coefficients are drawn from
    /// the operating system's CSPRNG.
    ///
    /// `modulus` must be prime (this is verified with a probabilistic test),
    /// and should be larger than any secret you care about since `secret` is
    /// reduced modulo `modulus`.
    pub fn new(secret: &BigInt, threshold: u32, modulus: BigUint) -> Result<Self, Error> {
        Self::new_with_rng(secret, threshold, modulus, &mut OsRng)
    }

    /// Identical to [`Dealer::new`], except that all randomness (both the
    /// primality test witnesses and the polynomial coefficients) is taken from
    /// `rng`.
    pub fn new_with_rng<R: CryptoRng + RngCore + ?Sized>(
        secret: &BigInt,
        threshold: u32,
        modulus: BigUint,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold);
        }

        let modulus =
            Modulus::new(modulus.clone()).map_err(|_| Error::InvalidModulus { modulus })?;
        if !modulus.is_probable_prime(rng) {
            tracing::debug!(
                modulus_bits = modulus.bits(),
                "modulus failed primality test"
            );
            return Err(Error::InvalidModulus {
                modulus: modulus.into_inner(),
            });
        }

        // Draw bits(p) random bits and reduce, rather than sampling [0, p)
        // directly, so that every coefficient is generated the same way
        // regardless of the modulus.
        let bits = modulus.bits();
        let coeffs = (1..threshold)
            .map(|_| rng.gen_biguint(bits) % modulus.inner())
            .collect::<Vec<_>>();

        tracing::debug!(
            threshold,
            modulus_bits = bits,
            "generated secret polynomial"
        );

        Ok(Self {
            secret: modulus.reduce(secret),
            modulus,
            threshold,
            coeffs,
        })
    }

    /// Returns the number of *unique* shares required to recover the secret.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Returns the prime modulus of the field the shares live in. This is the
    /// modulus that must be passed to [`recover_secret`](super::recover_secret).
    pub fn modulus(&self) -> &BigUint {
        self.modulus.inner()
    }

    /// Compute the share value `P(index) mod p`.
    ///
    /// `index` must be positive and not a multiple of `p`, as `P(0)` is the
    /// secret itself.
    pub fn share(&self, index: i64) -> Result<BigUint, Error> {
        if index <= 0 {
            return Err(Error::InvalidIndex { index });
        }
        let x = BigUint::from(index.unsigned_abs());
        if (&x % self.modulus.inner()).is_zero() {
            return Err(Error::InvalidIndex { index });
        }

        // secret + \sum_{i=1}^{t-1} c_i x^i, reducing after every step so the
        // intermediate values stay below p^2.
        Ok(self
            .coeffs
            .iter()
            .zip(1u32..)
            .fold(self.secret.clone(), |acc, (coeff, i)| {
                let x_pow_i = self.modulus.pow(&x, &BigUint::from(i));
                self.modulus.add(&acc, &self.modulus.mul(coeff, &x_pow_i))
            }))
    }

    /// Like [`Dealer::share`], but bundles the result with its index.
    pub fn share_point(&self, index: i64) -> Result<Share, Error> {
        Ok(Share::new(index, self.share(index)?))
    }

    /// Compute the shares for every index in `indices`, failing on the first
    /// invalid index.
    pub fn shares<I: IntoIterator<Item = i64>>(&self, indices: I) -> Result<Vec<Share>, Error> {
        indices
            .into_iter()
            .map(|index| self.share_point(index))
            .collect()
    }
}
