//! # External name resolution
//!
//! The [`NameResolver`] trait is the seam to the astronomical name-resolution
//! service; [`SimbadResolver`] is the production implementation, speaking
//! TAP/ADQL to the SIMBAD `sim-tap/sync` endpoint and deserializing its JSON
//! table payloads.

use serde::Deserialize;

use crate::astel_errors::AstelError;
use crate::constants::{Degree, EquatorialCoord};
use crate::conversion::{valid_dec, valid_ra};
use crate::env_state::AstelEnv;

/// A canonical object returned by an identifier lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedObject {
    pub name: String,
    pub coord: EquatorialCoord,
    pub object_type: Option<String>,
}

/// Seam to the external name-resolution service.
pub trait NameResolver {
    /// Cone search around a coordinate, yielding `(object id, alias)` pairs.
    fn by_coordinate(
        &self,
        coord: &EquatorialCoord,
    ) -> Result<Vec<(String, String)>, AstelError>;

    /// Look up one identifier. `strict` requires an exact identifier match;
    /// otherwise the comparison ignores case.
    fn by_name(&self, object_id: &str, strict: bool)
        -> Result<Option<ResolvedObject>, AstelError>;
}

/// A TAP JSON table: column metadata plus row-major data.
#[derive(Debug, Deserialize)]
struct TapTable {
    metadata: Vec<TapColumn>,
    data: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct TapColumn {
    name: String,
}

impl TapTable {
    fn column(&self, name: &str) -> Result<usize, AstelError> {
        self.metadata
            .iter()
            .position(|column| column.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AstelError::ResolverError(format!("column {name} missing")))
    }
}

/// TAP/ADQL client for the SIMBAD astronomical database.
#[derive(Debug, Clone)]
pub struct SimbadResolver {
    env: AstelEnv,
    base_url: String,
    radius_deg: Degree,
}

impl SimbadResolver {
    pub fn new(env: &AstelEnv) -> Self {
        SimbadResolver {
            env: env.clone(),
            base_url: "https://simbad.cds.unistra.fr/simbad/sim-tap/sync".to_string(),
            radius_deg: 2.0 / 60.0,
        }
    }

    pub fn with_base_url(env: &AstelEnv, base_url: &str) -> Self {
        SimbadResolver {
            base_url: base_url.to_string(),
            ..Self::new(env)
        }
    }

    fn run_query(&self, adql: &str) -> Result<TapTable, AstelError> {
        let body = self.env.post_form(
            &self.base_url,
            &[
                ("request", "doQuery"),
                ("lang", "adql"),
                ("format", "json"),
                ("query", adql),
            ],
        )?;
        parse_table(&body)
    }
}

impl NameResolver for SimbadResolver {
    fn by_coordinate(
        &self,
        coord: &EquatorialCoord,
    ) -> Result<Vec<(String, String)>, AstelError> {
        let adql = format!(
            "SELECT basic.main_id, ident.id FROM basic JOIN ident ON ident.oidref = basic.oid \
             WHERE CONTAINS(POINT('ICRS', basic.ra, basic.dec), \
             CIRCLE('ICRS', {:.6}, {:.6}, {:.6})) = 1",
            coord.ra, coord.dec, self.radius_deg
        );
        identifier_pairs(&self.run_query(&adql)?)
    }

    fn by_name(
        &self,
        object_id: &str,
        strict: bool,
    ) -> Result<Option<ResolvedObject>, AstelError> {
        let ident = escape_adql(object_id);
        let filter = if strict {
            format!("ident.id = '{ident}'")
        } else {
            format!("LOWER(ident.id) = LOWER('{ident}')")
        };
        let adql = format!(
            "SELECT basic.main_id, basic.ra, basic.dec, basic.otype FROM basic \
             JOIN ident ON ident.oidref = basic.oid WHERE {filter}"
        );
        first_object(&self.run_query(&adql)?)
    }
}

fn escape_adql(value: &str) -> String {
    value.replace('\'', "''")
}

fn parse_table(body: &str) -> Result<TapTable, AstelError> {
    serde_json::from_str(body)
        .map_err(|e| AstelError::ResolverError(format!("malformed TAP response: {e}")))
}

/// Reshape a `(main_id, id)` table into `(object id, alias)` pairs; object
/// ids are lowercased canonical identifiers.
fn identifier_pairs(table: &TapTable) -> Result<Vec<(String, String)>, AstelError> {
    let main_id = table.column("main_id")?;
    let id = table.column("id")?;

    let mut pairs = Vec::new();
    for row in &table.data {
        let object_id = string_cell(row, main_id)?.to_lowercase();
        let alias = string_cell(row, id)?.to_string();
        pairs.push((object_id, alias));
    }
    Ok(pairs)
}

/// Build a [`ResolvedObject`] from the first row of a
/// `(main_id, ra, dec, otype)` table, if any.
fn first_object(table: &TapTable) -> Result<Option<ResolvedObject>, AstelError> {
    let main_id = table.column("main_id")?;
    let ra = table.column("ra")?;
    let dec = table.column("dec")?;
    let otype = table.column("otype")?;

    let Some(row) = table.data.first() else {
        return Ok(None);
    };

    let name = string_cell(row, main_id)?.to_string();
    let ra = float_cell(row, ra)?;
    let dec = float_cell(row, dec)?;
    if !valid_ra(ra) || !valid_dec(dec) {
        return Err(AstelError::ResolverError(format!(
            "out-of-range position for {name}"
        )));
    }

    let object_type = row
        .get(otype)
        .and_then(|value| value.as_str())
        .map(str::to_string);

    Ok(Some(ResolvedObject {
        name,
        coord: EquatorialCoord { ra, dec },
        object_type,
    }))
}

fn string_cell(row: &[serde_json::Value], index: usize) -> Result<&str, AstelError> {
    row.get(index)
        .and_then(|value| value.as_str())
        .ok_or_else(|| AstelError::ResolverError(format!("non-string cell at {index}")))
}

fn float_cell(row: &[serde_json::Value], index: usize) -> Result<f64, AstelError> {
    row.get(index)
        .and_then(|value| value.as_f64())
        .ok_or_else(|| AstelError::ResolverError(format!("non-numeric cell at {index}")))
}

#[cfg(test)]
mod resolver_test {
    use super::*;

    #[test]
    fn test_identifier_pairs() {
        let body = r#"{
            "metadata": [{"name": "main_id"}, {"name": "id"}],
            "data": [
                ["M 31", "2MASX J00424433+4116074"],
                ["M 31", "NGC 224"],
                ["NAME Andromeda", "Andromeda Galaxy"]
            ]
        }"#;
        let table = parse_table(body).unwrap();
        assert_eq!(
            identifier_pairs(&table).unwrap(),
            vec![
                ("m 31".to_string(), "2MASX J00424433+4116074".to_string()),
                ("m 31".to_string(), "NGC 224".to_string()),
                ("name andromeda".to_string(), "Andromeda Galaxy".to_string()),
            ]
        );
    }

    #[test]
    fn test_first_object() {
        let body = r#"{
            "metadata": [
                {"name": "main_id"}, {"name": "ra"}, {"name": "dec"}, {"name": "otype"}
            ],
            "data": [["M 31", 10.684708, 41.26875, "G"]]
        }"#;
        let table = parse_table(body).unwrap();
        assert_eq!(
            first_object(&table).unwrap(),
            Some(ResolvedObject {
                name: "M 31".to_string(),
                coord: EquatorialCoord {
                    ra: 10.684708,
                    dec: 41.26875
                },
                object_type: Some("G".to_string()),
            })
        );
    }

    #[test]
    fn test_first_object_empty_table() {
        let body = r#"{
            "metadata": [
                {"name": "main_id"}, {"name": "ra"}, {"name": "dec"}, {"name": "otype"}
            ],
            "data": []
        }"#;
        let table = parse_table(body).unwrap();
        assert_eq!(first_object(&table).unwrap(), None);
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(parse_table("<html>maintenance</html>").is_err());

        let missing_column = r#"{"metadata": [{"name": "id"}], "data": []}"#;
        let table = parse_table(missing_column).unwrap();
        assert!(identifier_pairs(&table).is_err());
    }

    #[test]
    fn test_adql_escaping() {
        assert_eq!(escape_adql("Barnard's Star"), "Barnard''s Star");
    }
}
