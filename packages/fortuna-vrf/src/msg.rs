use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, StdResult, Uint256, WasmMsg};

/// Parameters of a single randomness request, as understood by the
/// VRF coordinator.
#[cw_serde]
pub struct RandomnessRequest {
    /// Consumer-chosen correlation id, echoed back in the fulfilment call.
    /// Consumers must never issue id 0.
    pub request_id: u64,
    /// Funding subscription on the coordinator.
    pub subscription_id: u64,
    /// Blocks the coordinator waits before fulfilling.
    pub request_confirmations: u32,
    /// Gas budget the coordinator attaches to the fulfilment call.
    pub callback_gas_limit: u64,
    /// Number of random words to deliver.
    pub num_words: u32,
}

/// Execute interface of the VRF coordinator contract.
#[cw_serde]
pub enum VrfExecuteMsg {
    /// Open a randomness request. The coordinator fulfils it later by
    /// executing `ConsumerExecuteMsg::FulfillRandomness` on the sender.
    RequestRandomness(RandomnessRequest),
}

/// The fulfilment interface every randomness consumer exposes to the
/// coordinator. A consumer's own `ExecuteMsg` must carry a
/// wire-compatible `fulfill_randomness` variant.
#[cw_serde]
pub enum ConsumerExecuteMsg {
    FulfillRandomness {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

/// Build the `WasmMsg` that opens a request on the coordinator.
pub fn request_randomness_msg(
    coordinator: &Addr,
    request: &RandomnessRequest,
) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: coordinator.to_string(),
        msg: to_json_binary(&VrfExecuteMsg::RequestRandomness(request.clone()))?,
        funds: vec![],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_randomness_msg() {
        let coordinator = Addr::unchecked("coordinator");
        let request = RandomnessRequest {
            request_id: 7,
            subscription_id: 42,
            request_confirmations: 3,
            callback_gas_limit: 500_000,
            num_words: 1,
        };
        let msg = request_randomness_msg(&coordinator, &request).unwrap();

        match msg {
            WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            } => {
                assert_eq!(contract_addr, "coordinator");
                assert!(funds.is_empty());
                let decoded: VrfExecuteMsg = serde_json::from_slice(msg.as_slice()).unwrap();
                assert_eq!(decoded, VrfExecuteMsg::RequestRandomness(request));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_fulfilment_wire_shape() {
        let msg = ConsumerExecuteMsg::FulfillRandomness {
            request_id: 7,
            random_words: vec![Uint256::from(123u128)],
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            json,
            r#"{"fulfill_randomness":{"request_id":7,"random_words":["123"]}}"#
        );
    }
}
