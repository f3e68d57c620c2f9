//! `ReaktoroService`: fetches a reaction, expands its conditions into
//! `SystemState`s, and dispatches them to the Engine in parallel.

use std::sync::Arc;

use futures::future::join_all;

use crate::domain::{zip::positional_zip, Database, MoleculeAmountList, ReactionId, SystemState};
use crate::remote::client::{RawResponse, RemoteTransport};
use crate::remote::{ReactionService, RemoteError, RemoteResult};

use super::ComputeError;

pub struct ReaktoroService<T: RemoteTransport> {
    reaction_service: Arc<ReactionService<T>>,
    engine_transport: T,
    engine_base_uri: String,
}

impl<T: RemoteTransport> ReaktoroService<T> {
    pub fn new(
        reaction_service: Arc<ReactionService<T>>,
        engine_transport: T,
        engine_base_uri: impl Into<String>,
    ) -> Self {
        Self { reaction_service, engine_transport, engine_base_uri: engine_base_uri.into() }
    }

    /// Fetches the reaction, zips its reagent/product amounts and each
    /// condition's temperature/pressure arrays, and dispatches one Engine
    /// call per resulting system state. Returns a vector whose length
    /// equals the total number of temperature/pressure pairs across all
    /// conditions, unless the reaction fetch itself fails with an
    /// Engine-attributable error, in which case a single-element
    /// `[Err(EngineError)]` is returned instead.
    pub async fn compute(
        &self,
        reaction_id: ReactionId,
        database: Database,
        amounts: MoleculeAmountList,
    ) -> RemoteResult<Vec<Result<serde_json::Value, ComputeError>>> {
        let reaction = match self.reaction_service.get(reaction_id).await {
            Ok(details) => details,
            Err(err @ (RemoteError::NetworkError { .. } | RemoteError::HttpError { .. })) => {
                log::warn!("reaction fetch failed during compute for {reaction_id}: {err}");
                return Ok(vec![Err(ComputeError::EngineError)]);
            }
            Err(other) => return Err(other),
        };

        let mut molecule_amounts = std::collections::HashMap::new();
        for (reagent, amount) in positional_zip(
            &reaction.inbound_reagents,
            &amounts.inbound_reagent_amounts,
            |reagent, amount| (reagent.molecule.molecule_name.clone(), *amount),
        ) {
            molecule_amounts.insert(reagent, amount);
        }
        for (product, amount) in positional_zip(
            &reaction.outbound_products,
            &amounts.outbound_product_amounts,
            |product, amount| (product.molecule.molecule_name.clone(), *amount),
        ) {
            molecule_amounts.insert(product, amount);
        }

        let mut system_states = Vec::with_capacity(reaction.expected_system_state_count());
        for condition in &reaction.conditions {
            let accelerate = &condition.accelerate;
            let states = positional_zip(&accelerate.temperature, &accelerate.pressure, |t, p| SystemState {
                temperature: *t,
                pressure: *p,
                database: database.clone(),
                molecule_amounts: molecule_amounts.clone(),
            });
            system_states.extend(states);
        }

        let calls = system_states.into_iter().map(|state| self.compute_one(state));
        let results = join_all(calls).await;
        Ok(results)
    }

    /// One Engine sub-request, isolated from its siblings: a failure here
    /// never cancels the others, and the outer `join_all` preserves
    /// positional order regardless of completion order.
    async fn compute_one(&self, state: SystemState) -> Result<serde_json::Value, ComputeError> {
        let payload = serde_json::to_vec(&state).expect("SystemState always serializes");
        let resp = self
            .engine_transport
            .post(&self.engine_base_uri, payload)
            .await
            .map_err(|err| {
                log::warn!("engine request transport failure: {err}");
                ComputeError::EngineError
            })?;
        self.decode_engine_response(resp)
    }

    fn decode_engine_response(&self, resp: RawResponse) -> Result<serde_json::Value, ComputeError> {
        match resp.status {
            200..=299 => serde_json::from_slice(&resp.body).map_err(|err| {
                log::warn!("engine response failed to decode: {err}");
                ComputeError::EngineError
            }),
            400 => Err(ComputeError::BadRequest(String::from_utf8_lossy(&resp.body).into_owned())),
            status => {
                log::warn!("engine returned unexpected status {status}");
                Err(ComputeError::EngineError)
            }
        }
    }
}
