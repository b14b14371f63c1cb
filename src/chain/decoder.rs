//! Transfer-event decoding and token-id extraction
//!
//! The game's Transfer event is not ERC-721 shaped: every field is
//! non-indexed, so the whole payload decodes from the data section.

use ethers::abi::{Event, EventParam, ParamType, RawLog, Token};
use ethers::types::{Address, Log, H256, U256};

/// ABI description of `Transfer(address from, address to, uint256 wizardId)`
pub fn transfer_event() -> Event {
    Event {
        name: "Transfer".to_string(),
        inputs: vec![
            EventParam {
                name: "from".to_string(),
                kind: ParamType::Address,
                indexed: false,
            },
            EventParam {
                name: "to".to_string(),
                kind: ParamType::Address,
                indexed: false,
            },
            EventParam {
                name: "wizardId".to_string(),
                kind: ParamType::Uint(256),
                indexed: false,
            },
        ],
        anonymous: false,
    }
}

/// keccak topic of the registered Transfer signature
pub fn transfer_topic() -> H256 {
    transfer_event().signature()
}

/// One decoded Transfer event
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTransfer {
    pub from: Address,
    pub to: Address,
    pub wizard_id: U256,
}

/// Decode raw logs against the Transfer ABI, preserving log order.
///
/// Logs that do not match the registered signature are skipped, not
/// treated as an error.
pub fn decode_transfer_logs(logs: &[Log]) -> Vec<DecodedTransfer> {
    let event = transfer_event();
    logs.iter()
        .filter_map(|log| {
            let raw = RawLog {
                topics: log.topics.clone(),
                data: log.data.to_vec(),
            };
            let parsed = event.parse_log(raw).ok()?;
            transfer_from_params(parsed)
        })
        .collect()
}

fn transfer_from_params(parsed: ethers::abi::Log) -> Option<DecodedTransfer> {
    let mut from = None;
    let mut to = None;
    let mut wizard_id = None;
    for param in parsed.params {
        match (param.name.as_str(), param.value) {
            ("from", Token::Address(addr)) => from = Some(addr),
            ("to", Token::Address(addr)) => to = Some(addr),
            ("wizardId", Token::Uint(id)) => wizard_id = Some(id),
            _ => {}
        }
    }
    Some(DecodedTransfer {
        from: from?,
        to: to?,
        wizard_id: wizard_id?,
    })
}

/// Token ids transferred to `user_address`, in log order, repeats kept.
///
/// A token transferred away and back appears once per matching event.
/// The recipient match is an exact string comparison against the
/// lower-case hex rendering of the decoded address, so a checksummed
/// input matches nothing.
pub fn owned_token_ids(events: &[DecodedTransfer], user_address: &str) -> Vec<String> {
    events
        .iter()
        .filter(|ev| format!("{:#x}", ev.to) == user_address)
        .map(|ev| ev.wizard_id.to_string())
        .collect()
}
