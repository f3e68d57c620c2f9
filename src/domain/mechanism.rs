//! Mechanism and MechanismDetails shapes, including the `Interactant` tagged
//! union.

use serde::{Deserialize, Serialize};

use super::molecule::{Catalyst, Molecule};
use super::reaction::{Accelerate, ProductFrom, Reaction, ReagentIn};

pub type MechanismId = i64;
pub type StageId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MechanismType {
    Elementary,
    Composite,
    Catalytic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mechanism {
    pub mechanism_id: MechanismId,
    pub mechanism_name: String,
    pub mechanism_type: MechanismType,
    pub activation_energy: f64,
}

/// Free-text description carried alongside a Mechanism in its context pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MechanismContext {
    pub mechanism: Mechanism,
    pub follow: Follow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub stage_id: StageId,
    pub stage_name: String,
}

/// Tagged union over the six participants a mechanism stage can involve.
/// Wire form is `{"tag": "<Variant>", "contents": <variant-specific>}`.
/// An unrecognized `tag` decodes to a JSON error, which
/// `remote::RemoteError::DecodingError` reports upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "contents")]
pub enum Interactant {
    IMolecule(Molecule),
    ICatalyst(Catalyst),
    IAccelerate(Accelerate),
    IProductFrom(ProductFrom),
    IReagentIn(ReagentIn),
    IReaction(Reaction),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageInteractants {
    pub stage: Stage,
    pub interactants: Vec<Interactant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MechanismDetails {
    pub mechanism_context: MechanismContext,
    pub stage_interactants: Vec<StageInteractants>,
}
