// src/integer_math/factorization.rs

use lazy_static::lazy_static;

lazy_static! {
    /// Primes below 100. Trial division walks these before falling back to
    /// the odd-candidate loop.
    static ref SMALL_PRIMES: Vec<u128> = vec![
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61,
        67, 71, 73, 79, 83, 89, 97,
    ];
}

/// The distinct prime divisors of `n`, ascending, by trial division up to
/// √n. `n` itself appears when it is prime; 0 and 1 have none.
pub fn distinct_prime_divisors(mut n: u128) -> Vec<u128> {
    let mut divisors = Vec::new();
    if n < 2 {
        return divisors;
    }
    for &p in SMALL_PRIMES.iter() {
        if p * p > n {
            break;
        }
        if n % p == 0 {
            divisors.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
    }
    let mut d: u128 = 101;
    while d * d <= n {
        if n % d == 0 {
            divisors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 2;
    }
    if n > 1 {
        divisors.push(n);
    }
    divisors
}

/// The exponent list n/q₁, …, n/qₖ over the distinct prime divisors qᵢ of
/// `n`, as consumed by the Rabin irreducibility test. For prime `n` the
/// list is `[1]`.
pub fn rabin_exponents(n: u64) -> Vec<u64> {
    distinct_prime_divisors(n as u128)
        .into_iter()
        .map(|q| (n as u128 / q) as u64)
        .collect()
}
