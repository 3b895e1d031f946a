//! Resolution of polymorphic contracts to concrete implementers.

use fixture_core::{Catalog, GenerateError, TypeEntry, TypeKey};
use rand::rngs::StdRng;
use rand::Rng;

/// Pick a random generatable concrete implementer of the given contract.
///
/// The catalog is re-enumerated on every call; generation is a test-setup
/// operation, not a hot path, so the scan cost is acceptable and no
/// implementer set is cached. Fails with
/// [`GenerateError::NoImplementation`] when the filtered set is empty.
pub fn resolve<'c>(
    catalog: &'c Catalog,
    contract: TypeKey,
    rng: &mut StdRng,
) -> Result<&'c TypeEntry, GenerateError> {
    let mut candidates: Vec<&TypeEntry> = catalog
        .entries()
        .filter(|entry| entry.is_generatable())
        .filter(|entry| {
            entry
                .as_concrete()
                .is_some_and(|concrete| concrete.implements(contract.id()))
        })
        .collect();

    if candidates.is_empty() {
        return Err(GenerateError::NoImplementation(contract.name()));
    }

    // Map iteration order is arbitrary; a seeded pick needs a stable order.
    candidates.sort_by_key(|entry| entry.name());

    Ok(candidates[rng.random_range(0..candidates.len())])
}
