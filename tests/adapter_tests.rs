//! Tests for the public adapter API

#[cfg(test)]
mod tests {
    use ethers::abi::{encode, Token};
    use ethers::types::{Log, U256};
    use wizmeta::chain::decoder::{decode_transfer_logs, owned_token_ids, transfer_topic};
    use wizmeta::error::MetadataError;
    use wizmeta::mapper;
    use wizmeta::marketplace::types::{AssetRecord, ContractRecord, OwnerRecord};
    use wizmeta::marketplace::{endpoint_for_network, token_ids_query};
    use wizmeta::sources::SourceKind;
    use wizmeta::types::WizardProps;

    const ALICE: &str = "0x00000000000000000000000000000000000000aa";
    const BOB: &str = "0x00000000000000000000000000000000000000bb";

    fn transfer_log(from: &str, to: &str, wizard_id: u64) -> Log {
        let data = encode(&[
            Token::Address(from.parse().unwrap()),
            Token::Address(to.parse().unwrap()),
            Token::Uint(U256::from(wizard_id)),
        ]);
        Log {
            topics: vec![transfer_topic()],
            data: data.into(),
            ..Default::default()
        }
    }

    fn wizard_asset(token_id: &str, name: Option<&str>) -> AssetRecord {
        AssetRecord {
            token_id: token_id.to_string(),
            name: name.map(str::to_string),
            asset_contract: ContractRecord {
                name: "Wizard".to_string(),
            },
            owner: OwnerRecord {
                address: "0xCc00000000000000000000000000000000000000".to_string(),
            },
            ..Default::default()
        }
    }

    // ============================================================================
    // Transfer decoding
    // ============================================================================

    #[test]
    fn test_token_ids_follow_transfer_order_with_repeats() {
        let logs = vec![
            transfer_log(ALICE, BOB, 42),
            transfer_log(BOB, ALICE, 42),
            transfer_log(ALICE, BOB, 42),
            transfer_log(ALICE, BOB, 7),
        ];
        let events = decode_transfer_logs(&logs);
        assert_eq!(owned_token_ids(&events, BOB), vec!["42", "42", "7"]);
    }

    #[test]
    fn test_unrelated_recipient_extracts_nothing() {
        let logs = vec![transfer_log(ALICE, BOB, 42)];
        let events = decode_transfer_logs(&logs);
        assert!(owned_token_ids(&events, ALICE).is_empty());
    }

    // ============================================================================
    // Merging
    // ============================================================================

    #[test]
    fn test_merge_falls_back_to_contract_name() {
        let merged = mapper::merge(&wizard_asset("42", Some("")), None);
        assert_eq!(merged.name, "Wizard - #42");
        assert_eq!(merged.color, "");
        assert!(merged.order.is_none());
    }

    #[test]
    fn test_merge_with_stats_synthesizes_description() {
        let props = WizardProps {
            power: "7".to_string(),
            affinity: "3".to_string(),
            owner: "0xDEF0000000000000000000000000000000000000".to_string(),
        };
        let merged = mapper::merge(&wizard_asset("7", Some("Stormy")), Some(&props));
        assert_eq!(merged.description, "power: 7");
        assert_eq!(
            merged.current_owner,
            "0xdef0000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_collectible_serializes_with_snake_case_fields() {
        let merged = mapper::merge(&wizard_asset("42", Some("Stormy")), None);
        let json = serde_json::to_value(&merged).unwrap();
        assert_eq!(json["token_id"], "42");
        assert_eq!(json["current_owner"], "0xCc00000000000000000000000000000000000000");
        assert!(json["order"].is_null());
    }

    // ============================================================================
    // Marketplace plumbing
    // ============================================================================

    #[test]
    fn test_query_repeats_token_ids() {
        let ids = vec!["42".to_string(), "7".to_string()];
        assert_eq!(
            token_ids_query("0x2f4bdafb22bd92aa7b7552d270376de8edccbc1e", &ids),
            "asset_contract_address=0x2f4bdafb22bd92aa7b7552d270376de8edccbc1e\
             &token_ids=42&token_ids=7"
        );
    }

    #[test]
    fn test_endpoints_known_and_unknown() {
        assert!(endpoint_for_network(1).is_ok());
        assert!(matches!(
            endpoint_for_network(42),
            Err(MetadataError::UnsupportedNetwork(42))
        ));
    }

    // ============================================================================
    // Source registry
    // ============================================================================

    #[test]
    fn test_registry_rejects_unknown_source() {
        let err = "coinbase".parse::<SourceKind>().unwrap_err();
        assert!(matches!(err, MetadataError::UnknownSource(_)));
    }

    #[test]
    fn test_registry_parses_registered_sources() {
        for (name, kind) in [
            ("opensea", SourceKind::Opensea),
            ("mocked", SourceKind::Mocked),
            ("cheezy", SourceKind::Cheezy),
        ] {
            assert_eq!(name.parse::<SourceKind>().unwrap(), kind);
        }
    }
}
