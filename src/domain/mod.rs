//! Opaque domain value types shared across ChemistFlow.
//!
//! These types mirror the Preprocessor/Engine wire shapes. Field-level
//! semantics belong to the Preprocessor; ChemistFlow only needs enough
//! structure to cache, route, and positionally zip them (see `domain::zip`).

pub mod mechanism;
pub mod molecule;
pub mod reaction;
pub mod system;
pub mod zip;

pub use mechanism::{
    Follow, Interactant, Mechanism, MechanismContext, MechanismDetails, MechanismId,
    MechanismType, Stage, StageId, StageInteractants,
};
pub use molecule::{Catalyst, CatalystId, Molecule, MoleculeId};
pub use reaction::{
    Accelerate, Condition, InboundReagent, OutboundProduct, ProductFrom, Reaction,
    ReactionDetails, ReactionId, ReagentIn,
};
pub use system::{Database, MoleculeAmountList, SystemProps, SystemState};
