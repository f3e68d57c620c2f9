//! Integration test for the compute fan-out's positional truncation
//! contract: unequal-length temperature/pressure arrays zip to the
//! shorter.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chemistflow::cluster::{ClusterConfig, ClusterMembership, InProcessFabric};
use chemistflow::compute::ReaktoroService;
use chemistflow::domain::{Database, MoleculeAmountList};
use chemistflow::remote::client::{RawResponse, RemoteTransport};
use chemistflow::remote::ReactionService;

struct ScriptedTransport {
    get_response: Mutex<Option<RawResponse>>,
    post_responses: Mutex<Vec<RawResponse>>,
}

#[async_trait]
impl RemoteTransport for ScriptedTransport {
    async fn get(&self, _url: &str) -> Result<RawResponse, reqwest::Error> {
        Ok(self.get_response.lock().unwrap().take().expect("single-shot mock"))
    }

    async fn post(&self, _url: &str, _body: Vec<u8>) -> Result<RawResponse, reqwest::Error> {
        Ok(self.post_responses.lock().unwrap().remove(0))
    }

    async fn delete(&self, _url: &str) -> Result<RawResponse, reqwest::Error> {
        unreachable!("not exercised")
    }
}

/// Two conditions with lengths 2 and 1, expecting 3 flattened SystemStates.
/// Here the second condition's temperature array is longer than its
/// pressure array, which must truncate rather than error.
fn reaction_with_mismatched_condition() -> Vec<u8> {
    serde_json::json!({
        "reaction": {"reactionId": 5, "reactionName": "R5"},
        "inboundReagents": [
            {"reagentIn": {"amount": 1.0}, "molecule": {"moleculeId": 1, "moleculeName": "H2"}}
        ],
        "outboundProducts": [],
        "conditions": [
            {"accelerate": {"temperature": [300.0, 310.0], "pressure": [1.0, 1.0]}, "catalyst": {"catalystId": 1, "catalystName": "A"}},
            {"accelerate": {"temperature": [400.0, 410.0, 420.0], "pressure": [2.0]}, "catalyst": {"catalystId": 2, "catalystName": "B"}}
        ]
    })
    .to_string()
    .into_bytes()
}

#[tokio::test]
async fn unequal_length_condition_arrays_truncate_to_shorter() {
    let membership = ClusterMembership::new(ClusterConfig {
        hostname: "127.0.0.1".into(),
        port: 7380,
        seed_nodes: vec![],
    });
    let reaction_transport = ScriptedTransport {
        get_response: Mutex::new(Some(RawResponse { status: 200, body: reaction_with_mismatched_condition() })),
        post_responses: Mutex::new(vec![]),
    };
    let reaction_service = Arc::new(ReactionService::new(
        reaction_transport,
        "http://preprocessor.invalid/reaction",
        Duration::from_secs(60),
        1000,
        Duration::from_millis(200),
        Duration::from_millis(200),
        InProcessFabric::new(),
        membership,
    ));

    // 2 states from the first condition plus 1 truncated state from the
    // second condition, 3 total.
    let engine_transport = ScriptedTransport {
        get_response: Mutex::new(None),
        post_responses: Mutex::new(vec![
            RawResponse { status: 200, body: b"{\"props\":1}".to_vec() },
            RawResponse { status: 200, body: b"{\"props\":2}".to_vec() },
            RawResponse { status: 200, body: b"{\"props\":3}".to_vec() },
        ]),
    };

    let service = ReaktoroService::new(reaction_service, engine_transport, "http://engine.invalid/reaction");
    let amounts = MoleculeAmountList { inbound_reagent_amounts: vec![2.5], outbound_product_amounts: vec![] };

    let results = service.compute(5, Database { name: "thermo".into() }, amounts).await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(Result::is_ok));
}
