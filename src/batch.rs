//! Parallel validation of many independent bank slip numbers.

use rayon::prelude::*;
use tracing::debug;

use crate::boleto::Boleto;
use crate::error::BoletoError;

/// Validate every input, in parallel, keeping input order.
///
/// ## Example
///
/// ```
/// use boleto::batch::validate_batch;
///
/// let results = validate_batch(&[
///     "34191090088737948710800106511017679120000010651",
///     "not a bank slip",
/// ]);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn validate_batch<S>(inputs: &[S]) -> Vec<Result<Boleto, BoletoError>>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<_> = inputs
        .par_iter()
        .map(|input| Boleto::new(input.as_ref()))
        .collect();

    let valid = results.iter().filter(|r| r.is_ok()).count();
    debug!(total = results.len(), valid, "validated batch");

    results
}
