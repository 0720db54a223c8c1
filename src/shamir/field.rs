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

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("modulus must be at least 2")]
    DegenerateModulus,

    #[error("{value} has no multiplicative inverse (it shares a factor with the modulus)")]
    NotInvertible { value: BigUint },
}

/// Number of Miller-Rabin rounds used by [`Modulus::is_probable_prime`].
///
/// Each round lets a composite through with probability at most `1/4`, so 64
/// rounds bound the error at `2^-128`.
pub const PRIMALITY_ROUNDS: usize = 64;

// Trial division is much cheaper than a Miller-Rabin round, and it lets us
// assume the candidate is odd and larger than any of these afterwards.
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// The modulus `p` of the field `GF(p)`.
///
/// All of the field operations take and return canonical representatives
/// (integers in `[0, p)`) as `BigUint`s. Every operation returns a fresh
/// value, nothing is mutated in place.
///
/// A `Modulus` is only guaranteed to be at least `2`. Whether it is actually
/// prime is checked separately with [`Modulus::is_probable_prime`], because
/// recovery deliberately works with whatever modulus it is handed and reports
/// the non-invertible elements a composite modulus produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus(BigUint);

impl Modulus {
    pub fn new(p: BigUint) -> Result<Self, Error> {
        if p < BigUint::from(2u32) {
            return Err(Error::DegenerateModulus);
        }
        Ok(Self(p))
    }

    pub fn inner(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Bit length of `p`.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// Reduce an arbitrary (possibly negative) integer to its canonical
    /// representative in `[0, p)`.
    pub fn reduce(&self, value: &BigInt) -> BigUint {
        // Floored modulo with a positive divisor is never negative, so the
        // magnitude is the value itself.
        let (_, magnitude) = value.mod_floor(&BigInt::from(self.0.clone())).into_parts();
        magnitude
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.0
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.0
    }

    // NOTE: Definitely not constant-time.
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.0)
    }

    /// Compute the multiplicative inverse of `value` with the extended
    /// Euclidean algorithm.
    ///
    /// Fails if `gcd(value, p) != 1`, which for a prime `p` only happens when
    /// `value` is a multiple of `p`.
    pub fn inverse(&self, value: &BigUint) -> Result<BigUint, Error> {
        let value = value % &self.0;
        let ExtendedGcd { gcd, x, .. } =
            BigInt::from(value.clone()).extended_gcd(&BigInt::from(self.0.clone()));
        if !gcd.is_one() {
            return Err(Error::NotInvertible { value });
        }
        // x*value + y*p = 1, so x is the inverse (once made non-negative).
        Ok(self.reduce(&x))
    }

    /// Probabilistic primality test (trial division followed by
    /// [`PRIMALITY_ROUNDS`] rounds of Miller-Rabin with random witnesses drawn
    /// from `rng`).
    ///
    /// A prime always passes. A composite passes with probability at most
    /// `2^-128`.
    pub fn is_probable_prime<R: CryptoRng + RngCore + ?Sized>(&self, rng: &mut R) -> bool {
        let n = &self.0;
        for p in SMALL_PRIMES {
            let p = BigUint::from(p);
            if *n == p {
                return true;
            }
            if (n % &p).is_zero() {
                return false;
            }
        }

        // n-1 = d * 2^s with d odd.
        let two = BigUint::from(2u32);
        let n_minus_one = n - BigUint::one();
        let s = n_minus_one.trailing_zeros().unwrap_or(0);
        let d = &n_minus_one >> s;

        'witness: for _ in 0..PRIMALITY_ROUNDS {
            let a = rng.gen_biguint_range(&two, &n_minus_one);
            let mut x = a.modpow(&d, n);
            if x.is_one() || x == n_minus_one {
                continue;
            }
            for _ in 1..s {
                x = x.modpow(&two, n);
                if x == n_minus_one {
                    continue 'witness;
                }
            }
            // a is a witness to the compositeness of n.
            return false;
        }
        true
    }
}
