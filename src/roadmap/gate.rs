//! Input gate for the roadmap form

/// The business field must be longer than this many characters after trimming
pub const BUSINESS_LENGTH_FLOOR: usize = 3;

/// The problem field must be longer than this many characters after trimming
pub const PROBLEM_LENGTH_FLOOR: usize = 10;

/// Whether the generate action may be enabled for the current field values.
///
/// Lengths are counted in Unicode scalar values of the trimmed text.
pub fn generate_enabled(business: &str, problem: &str) -> bool {
    business_long_enough(business) && problem_long_enough(problem)
}

pub(crate) fn business_long_enough(business: &str) -> bool {
    business.trim().chars().count() > BUSINESS_LENGTH_FLOOR
}

pub(crate) fn problem_long_enough(problem: &str) -> bool {
    problem.trim().chars().count() > PROBLEM_LENGTH_FLOOR
}
