//! # Coordinate-driven alias enrichment
//!
//! For every coordinate resolved out of a report, the enrichment gateway
//! asks the name-resolution service which objects sit there and registers
//! their aliases in the shared store. **Every per-object failure in this
//! path is caught and ignored**: a service error or a lookup miss must never
//! abort the remaining coordinates or the surrounding parse.

use hifitime::{Epoch, Unit};
use tracing::debug;

use crate::astel_errors::AstelError;
use crate::constants::{EquatorialCoord, ALIAS_MAX_AGE_DAYS};
use crate::objects::resolver::NameResolver;
use crate::objects::{AliasStore, ObjectEntry};

/// Register or refresh every object the resolver reports near `coord`.
///
/// Failures are demoted to debug logs; this function never fails.
pub(crate) fn enrich_from_coordinate(
    store: &AliasStore,
    resolver: &dyn NameResolver,
    coord: &EquatorialCoord,
) {
    let pairs = match resolver.by_coordinate(coord) {
        Ok(pairs) => pairs,
        Err(error) => {
            debug!(%coord, %error, "cone query failed, skipping enrichment");
            return;
        }
    };

    for (object_id, alias) in pairs {
        if let Err(error) = register_alias(store, resolver, &object_id, &alias) {
            debug!(%object_id, %error, "alias registration failed, skipping object");
        }
    }
}

fn register_alias(
    store: &AliasStore,
    resolver: &dyn NameResolver,
    object_id: &str,
    alias: &str,
) -> Result<(), AstelError> {
    match store.lookup(object_id) {
        Some(entry) => refresh_if_stale(store, resolver, object_id, &entry),
        None => {
            let resolved = resolver.by_name(object_id, false)?.ok_or_else(|| {
                AstelError::ResolverError(format!("no record for {object_id}"))
            })?;
            store.insert(object_id, resolved.coord, alias);
            Ok(())
        }
    }
}

fn refresh_if_stale(
    store: &AliasStore,
    resolver: &dyn NameResolver,
    object_id: &str,
    entry: &ObjectEntry,
) -> Result<(), AstelError> {
    let now = Epoch::now().map_err(|e| AstelError::ResolverError(e.to_string()))?;
    let age_days = (now - entry.last_updated).to_unit(Unit::Day);
    if age_days <= ALIAS_MAX_AGE_DAYS {
        return Ok(());
    }

    let resolved = resolver.by_name(object_id, true)?.ok_or_else(|| {
        AstelError::ResolverError(format!("stale record {object_id} no longer resolves"))
    })?;
    store.refresh(object_id, resolved.coord);
    Ok(())
}
