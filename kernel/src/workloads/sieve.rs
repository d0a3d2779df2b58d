//! Sieve kernel: classical Sieve of Eratosthenes over `[0, limit]`.

/// Primality table for `[0, limit]`: entry `i` is true iff `i` is prime.
#[must_use]
pub fn sieve(limit: usize) -> Vec<bool> {
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }

    let mut p = 2;
    while p * p <= limit {
        if is_prime[p] {
            // Smaller multiples were already struck by smaller primes.
            for j in (p * p..=limit).step_by(p) {
                is_prime[j] = false;
            }
        }
        p += 1;
    }
    is_prime
}

/// Sieve up to `limit` and count the primes found.
#[must_use]
pub fn run(limit: usize) -> usize {
    let count = sieve(limit).iter().filter(|&&prime| prime).count();
    tracing::debug!(limit, count, "sieve complete");
    count
}
