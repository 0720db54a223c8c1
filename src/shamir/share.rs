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

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Piece of a secret which has been split with [Shamir Secret Sharing][sss].
///
/// A share is the point `(index, P(index) mod p)` on the secret polynomial.
/// Shares only make sense together with other shares from the same
/// [`Dealer`](super::Dealer), and only with the modulus that dealer used.
///
/// [sss]: https://en.wikipedia.org/wiki/Shamir%27s_Secret_Sharing
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub(super) index: i64,
    pub(super) value: BigUint,
}

impl Share {
    pub fn new(index: i64, value: BigUint) -> Self {
        Self { index, value }
    }

    /// The x-value of the share. Two shares with the same index cannot be
    /// used together for secret recovery.
    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Borrow the share as an `(index, value)` pair, which is the form
    /// [`recover_secret`](super::recover_secret) consumes.
    pub fn as_point(&self) -> (i64, &BigUint) {
        (self.index, &self.value)
    }
}

impl From<Share> for (i64, BigUint) {
    fn from(share: Share) -> Self {
        (share.index, share.value)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Share {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            index: i64::arbitrary(g),
            value: BigUint::from_slice(&Vec::<u32>::arbitrary(g)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[quickcheck]
    fn share_json_roundtrip(share: Share) {
        let json = serde_json::to_string(&share).unwrap();
        let share2: Share = serde_json::from_str(&json).unwrap();
        assert_eq!(share, share2);
    }

    #[test]
    fn share_as_point() {
        let share = Share::new(4, BigUint::from(1337u32));
        assert_eq!(share.as_point(), (4, &BigUint::from(1337u32)));
        assert_eq!(<(i64, BigUint)>::from(share), (4, BigUint::from(1337u32)));
    }
}
