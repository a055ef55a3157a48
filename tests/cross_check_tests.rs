// tests/cross_check_tests.rs
//
// The three irreducibility tests are independent algorithms; sampling
// random polynomials over several small fields and demanding agreement
// catches a defect in any one of them. Exhaustive sweeps over small
// degrees are additionally counted against the necklace formula, which
// pins all three to the mathematically correct answer.

use polyhunter::checks::{
    is_irreducible_benor, is_irreducible_berlekamp, is_irreducible_rabin,
    is_primitive_definition,
};
use polyhunter::gf::{make_gf, Gf};
use polyhunter::poly::GfPoly;

/// Walks every coefficient vector of exactly the given degree with a gear
/// counter, monic only when asked.
fn for_each_poly_of_degree(field: &Gf, degree: usize, monic: bool, mut f: impl FnMut(&GfPoly)) {
    let base = field.base();
    let lead_choices = if monic { 1 } else { base - 1 };
    let mut gear = vec![0u64; degree];
    loop {
        for lead in 0..lead_choices {
            let mut coeffs = gear.clone();
            coeffs.push(if monic { 1 } else { lead + 1 });
            f(&GfPoly::new(field, &coeffs));
        }
        let mut i = 0;
        while i < degree {
            gear[i] += 1;
            if gear[i] < base {
                break;
            }
            gear[i] = 0;
            i += 1;
        }
        if i == degree {
            return;
        }
    }
}

/// Count of monic irreducible polynomials of degree d over GF(p):
/// (1/d) Σ_{e | d} μ(e) p^{d/e}.
fn monic_irreducible_count(p: u64, d: u64) -> u64 {
    fn moebius(mut n: u64) -> i64 {
        let mut result = 1i64;
        let mut divisor = 2;
        while divisor * divisor <= n {
            if n % divisor == 0 {
                n /= divisor;
                if n % divisor == 0 {
                    return 0;
                }
                result = -result;
            }
            divisor += 1;
        }
        if n > 1 {
            result = -result;
        }
        result
    }

    let mut sum = 0i64;
    for e in 1..=d {
        if d % e == 0 {
            sum += moebius(e) * (p as i64).pow((d / e) as u32);
        }
    }
    (sum / d as i64) as u64
}

#[test]
fn test_methods_agree_on_random_samples() {
    // Degree caps keep the p^n budgets that Rabin consumes small enough
    // for a debug-build run.
    for (base, max_degree) in [(2u64, 10usize), (3, 7), (5, 5), (7, 4)] {
        let field = make_gf(base).unwrap();
        for degree in 1..=max_degree {
            for _ in 0..5 {
                let poly = GfPoly::random(&field, degree);
                let berlekamp = is_irreducible_berlekamp(&poly);
                let rabin = is_irreducible_rabin(&poly);
                let benor = is_irreducible_benor(&poly);
                assert!(
                    berlekamp == rabin && rabin == benor,
                    "disagreement on {} over GF({}): berlekamp={} rabin={} benor={}",
                    poly,
                    base,
                    berlekamp,
                    rabin,
                    benor
                );
            }
        }
    }
}

#[test]
fn test_exhaustive_counts_match_necklace_formula() {
    for (base, max_degree) in [(2u64, 6usize), (3, 4), (5, 3)] {
        let field = make_gf(base).unwrap();
        for degree in 1..=max_degree {
            let mut counts = [0u64; 3];
            for_each_poly_of_degree(&field, degree, true, |poly| {
                counts[0] += is_irreducible_berlekamp(poly) as u64;
                counts[1] += is_irreducible_rabin(poly) as u64;
                counts[2] += is_irreducible_benor(poly) as u64;
            });
            let expected = monic_irreducible_count(base, degree as u64);
            for (count, name) in counts.iter().zip(["berlekamp", "rabin", "benor"]) {
                assert_eq!(
                    *count, expected,
                    "{} finds {} monic irreducible of degree {} over GF({}), expected {}",
                    name, count, degree, base, expected
                );
            }
        }
    }
}

#[test]
fn test_primitive_counts_match_euler_formula() {
    // The number of monic primitive polynomials of degree d over GF(p) is
    // φ(p^d − 1)/d.
    fn euler_phi(mut n: u64) -> u64 {
        let mut result = n;
        let mut divisor = 2;
        while divisor * divisor <= n {
            if n % divisor == 0 {
                while n % divisor == 0 {
                    n /= divisor;
                }
                result -= result / divisor;
            }
            divisor += 1;
        }
        if n > 1 {
            result -= result / n;
        }
        result
    }

    for (base, max_degree) in [(2u64, 6usize), (3, 4), (5, 3)] {
        let field = make_gf(base).unwrap();
        for degree in 2..=max_degree {
            let mut count = 0u64;
            for_each_poly_of_degree(&field, degree, true, |poly| {
                count += is_primitive_definition(poly) as u64;
            });
            let group = base.pow(degree as u32) - 1;
            let expected = euler_phi(group) / degree as u64;
            assert_eq!(
                count, expected,
                "degree {} over GF({}): {} primitive, expected {}",
                degree, base, count, expected
            );
        }
    }
}

#[test]
fn test_primitive_implies_irreducible_on_sweep() {
    for base in [2u64, 3, 5, 7] {
        let field = make_gf(base).unwrap();
        for degree in 1..=3 {
            for_each_poly_of_degree(&field, degree, false, |poly| {
                if is_primitive_definition(poly) {
                    assert!(
                        is_irreducible_berlekamp(poly),
                        "{} over GF({}) is primitive but not irreducible",
                        poly,
                        base
                    );
                }
            });
        }
    }
}
