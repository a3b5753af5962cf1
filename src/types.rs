// Custom types that are widely used are defined here.

use uuid::Uuid;

// Placeholder ID types. The persistence layer may remap these to durable IDs.
pub type CategoryId = Uuid;
pub type PairId = Uuid;
pub type GroupId = Uuid;
pub type MatchId = Uuid;

// Type conversions.
pub mod convert {
    use std::fmt::Display;

    // Convert between integers.
    pub fn int<N1: Display + Copy, N2: TryFrom<N1>>(num: N1) -> N2 {
        match num.try_into() {
            Ok(n) => n,
            Err(_) => panic!("num: {num}")
        }
    }

    // Convert usize to f64.
    pub fn usize_to_f64(num: usize) -> f64 {
        if num <= (f64::MAX as usize) {
            return num as f64;
        }
        panic!("{num} is bigger than {}", f64::MAX);
    }
}
