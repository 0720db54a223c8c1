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

use shamirss::{recover_secret, Dealer, Modulus, Share};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::One;
use rand::rngs::OsRng;

// 2^255 - 19
fn modulus() -> BigUint {
    (BigUint::one() << 255u32) - 19u32
}

fn random_secret() -> BigInt {
    BigInt::from(OsRng.gen_biguint(248))
}

fn benchmark_dealer_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("shamir Dealer::new");
    for threshold in (10..=40).step_by(10) {
        let secret = random_secret();
        group.bench_with_input(format!("N={:03}", threshold), &secret, |b, secret| {
            b.iter(|| Dealer::new(secret, threshold, modulus()).unwrap())
        });
    }
    group.finish()
}

fn benchmark_dealer_share(c: &mut Criterion) {
    let mut group = c.benchmark_group("shamir Dealer::share");
    for threshold in (10..=40).step_by(10) {
        let dealer = Dealer::new(&random_secret(), threshold, modulus()).unwrap();
        group.bench_with_input(format!("N={:03}", threshold), &dealer, |b, dealer| {
            b.iter(|| dealer.share(black_box(1337)).unwrap())
        });
    }
    group.finish()
}

fn benchmark_recover_secret(c: &mut Criterion) {
    let mut group = c.benchmark_group("shamir recover_secret");
    for threshold in (5..=65).step_by(10) {
        let dealer = Dealer::new(&random_secret(), threshold, modulus()).unwrap();
        let shares = dealer.shares(1..=i64::from(threshold)).unwrap();
        let prime = modulus();
        group.bench_with_input(format!("N={:03}", threshold), &shares, |b, shares| {
            b.iter(|| {
                black_box(recover_secret(shares.iter().map(Share::as_point), &prime).unwrap())
            })
        });
    }
    group.finish()
}

fn benchmark_primality(c: &mut Criterion) {
    let modulus = Modulus::new(modulus()).unwrap();
    c.bench_function("shamir Modulus::is_probable_prime 2^255-19", |b| {
        b.iter(|| modulus.is_probable_prime(&mut OsRng))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets =
        benchmark_dealer_new,
        benchmark_dealer_share,
        benchmark_recover_secret,
        benchmark_primality
}
criterion_main!(benches);
