//! Reaction and ReactionDetails shapes.
//!
//! `conditions`' length determines exactly how many Engine calls a compute
//! request issues, never fewer and never more, so the ordering of every
//! `Vec` here is load-bearing, not cosmetic.

use serde::{Deserialize, Serialize};

use super::molecule::{Catalyst, Molecule};

/// Identifier minted by the Preprocessor; ChemistFlow never constructs one.
/// The integer form is canonical; an older variant used `String`, which we
/// do not carry forward.
pub type ReactionId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub reaction_id: ReactionId,
    pub reaction_name: String,
}

/// Amount of a molecule consumed by a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReagentIn {
    pub amount: f64,
}

/// Amount of a molecule produced by a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFrom {
    pub amount: f64,
}

/// An inbound reagent: how much of which molecule is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundReagent {
    pub reagent_in: ReagentIn,
    pub molecule: Molecule,
}

/// An outbound product: how much of which molecule is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundProduct {
    pub product_from: ProductFrom,
    pub molecule: Molecule,
}

/// Parallel arrays of temperatures and pressures a condition sweeps over.
/// Unequal lengths are not an error; `domain::zip::positional_zip` truncates
/// to the shorter of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accelerate {
    pub temperature: Vec<f64>,
    pub pressure: Vec<f64>,
}

/// A reaction condition: an accelerate profile paired with the catalyst that
/// drives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub accelerate: Accelerate,
    pub catalyst: Catalyst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionDetails {
    pub reaction: Reaction,
    pub inbound_reagents: Vec<InboundReagent>,
    pub outbound_products: Vec<OutboundProduct>,
    pub conditions: Vec<Condition>,
}

impl ReactionDetails {
    /// Number of Engine calls a compute request against this reaction must
    /// issue.
    pub fn expected_system_state_count(&self) -> usize {
        self.conditions
            .iter()
            .map(|c| c.accelerate.temperature.len().min(c.accelerate.pressure.len()))
            .sum()
    }
}
