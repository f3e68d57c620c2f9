//! Molecule and catalyst identifiers and shapes.

use serde::{Deserialize, Serialize};

/// Identifier minted by the Preprocessor; ChemistFlow never constructs one.
pub type MoleculeId = i64;

/// Identifier minted by the Preprocessor; ChemistFlow never constructs one.
pub type CatalystId = i64;

/// A chemical species. Opaque beyond its id and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Molecule {
    pub molecule_id: MoleculeId,
    pub molecule_name: String,
}

/// A reaction accelerant. Opaque beyond its id and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalyst {
    pub catalyst_id: CatalystId,
    pub catalyst_name: String,
}
