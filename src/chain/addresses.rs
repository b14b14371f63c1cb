//! Deployed contract addresses per network
//!
//! Network ids follow the marketplace endpoint table: 1 mainnet,
//! 4 rinkeby, 50 the local launch-kit chain.

use ethers::types::Address;

use crate::error::MetadataError;

/// Primary wizard collectible contract
pub fn collectible_address(network_id: u64) -> Result<Address, MetadataError> {
    let raw = match network_id {
        1 => "0x2f4bdafb22bd92aa7b7552d270376de8edccbc1e",
        4 => "0x095c75acfeb9a231fca54aa43e80e2a1c3e6f1f1",
        50 => "0x48bacb9266a570d521063ef5dd96e61686dbe788",
        other => return Err(MetadataError::UnsupportedNetwork(other)),
    };
    Ok(raw.parse().expect("valid collectible contract address"))
}

/// Tournament contract holding per-wizard affinity and power
pub fn tournament_address(network_id: u64) -> Result<Address, MetadataError> {
    let raw = match network_id {
        1 => "0xec2203e38116f09e21bc27443e063b623b01345a",
        4 => "0x35b7fd1050c4cb30fbcd0b0b0852d4e8b2e50f61",
        50 => "0x1d7022f5b17d2f8b695918fb48fa1089c9f85401",
        other => return Err(MetadataError::UnsupportedNetwork(other)),
    };
    Ok(raw.parse().expect("valid tournament contract address"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_networks_resolve() {
        for id in [1, 4, 50] {
            assert!(collectible_address(id).is_ok());
            assert!(tournament_address(id).is_ok());
        }
    }

    #[test]
    fn unknown_network_is_rejected() {
        assert!(matches!(
            collectible_address(3),
            Err(MetadataError::UnsupportedNetwork(3))
        ));
        assert!(matches!(
            tournament_address(137),
            Err(MetadataError::UnsupportedNetwork(137))
        ));
    }
}
