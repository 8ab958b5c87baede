//! Storage encoding of a history item's `types` and `data` columns.
//!
//! `types` is a JSON array so it stays readable in the database. `data` is
//! the list of `(type, bytes)` pairs in `types` order, bincode-encoded, so
//! payloads round-trip byte for byte.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};

pub fn encode_types(types: &[String]) -> Result<String> {
    serde_json::to_string(types).context("encode item types failed")
}

pub fn decode_types(raw: &str) -> Result<Vec<String>> {
    serde_json::from_str(raw).context("decode item types failed")
}

pub fn encode_data(types: &[String], data: &BTreeMap<String, Vec<u8>>) -> Result<Vec<u8>> {
    let mut pairs: Vec<(&str, &[u8])> = Vec::with_capacity(types.len());
    for type_id in types {
        let Some(bytes) = data.get(type_id) else {
            bail!("item data has no payload for type {type_id}");
        };
        pairs.push((type_id.as_str(), bytes.as_slice()));
    }
    if data.len() != types.len() {
        bail!(
            "item data has {} payloads for {} types",
            data.len(),
            types.len()
        );
    }

    bincode::serialize(&pairs).context("encode item data failed")
}

/// Decodes `raw` and checks its keys are exactly `types`.
pub fn decode_data(types: &[String], raw: &[u8]) -> Result<BTreeMap<String, Vec<u8>>> {
    let pairs: Vec<(String, Vec<u8>)> =
        bincode::deserialize(raw).context("decode item data failed")?;

    if pairs.len() != types.len()
        || pairs
            .iter()
            .zip(types)
            .any(|((type_id, _), expected)| type_id != expected)
    {
        bail!("item data keys do not match stored types");
    }

    Ok(pairs.into_iter().collect())
}
