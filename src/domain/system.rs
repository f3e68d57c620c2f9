//! Engine-facing shapes: `SystemState` in, `SystemProps` out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::molecule::Molecule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
}

/// One Engine call's worth of input: a temperature/pressure point, the
/// database to use, and the full set of molecule amounts in play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    pub temperature: f64,
    pub pressure: f64,
    pub database: Database,
    pub molecule_amounts: HashMap<String, f64>,
}

/// Opaque, Engine-defined physical property bundle. ChemistFlow forwards
/// this verbatim; it never inspects or recomputes any of its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemProps {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Client-supplied amount vectors, positionally zipped against a reaction's
/// `inboundReagents`/`outboundProducts`, truncating to the shorter side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeAmountList {
    pub inbound_reagent_amounts: Vec<f64>,
    pub outbound_product_amounts: Vec<f64>,
}

impl SystemState {
    pub fn molecule_key(molecule: &Molecule) -> String {
        molecule.molecule_name.clone()
    }
}
