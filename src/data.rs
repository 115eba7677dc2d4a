use leptos::prelude::*;

use crate::components::icons::{Shield, ShieldAlert};

/// Rarity tier carried in a token's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Legendary,
    Common,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Legendary => "Legendary",
            Rarity::Common => "Common",
        }
    }
}

/// The descriptive attributes of a minted token, as a marketplace would
/// render them. Both instances below are compile-time constants; the page
/// never builds one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NftMetadata {
    pub image: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    pub power_level: u32,
    pub marketplace: &'static str,
}

/// The metadata as published at mint time.
pub const ORIGINAL_NFT: NftMetadata = NftMetadata {
    image: "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?w=600&h=600&fit=crop",
    name: "Crypto Punk #1337",
    rarity: Rarity::Legendary,
    power_level: 9000,
    marketplace: "https://opensea.io/collection/genuine-collection",
};

/// The same token after a server-side swap. Note the transposed letters in
/// the name, the downgraded rarity, and the marketplace link now pointing at
/// an attacker-controlled site.
pub const ALTERED_NFT: NftMetadata = NftMetadata {
    image: "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=600&h=600&fit=crop",
    name: "Cyrpto Punk #1337",
    rarity: Rarity::Common,
    power_level: 1,
    marketplace: "https://malicious-marketplace.example",
};

pub const LEARN_MORE_URL: &str = "https://ethereum.org/en/nft/";

pub struct StorageProfile {
    pub icon: fn() -> AnyView,
    pub title: &'static str,
    pub card_class: &'static str,
    pub points: &'static [&'static str],
}

pub fn storage_profiles() -> Vec<StorageProfile> {
    vec![
        StorageProfile {
            icon: || view! { <Shield class="w-6 h-6 text-green-500" /> }.into_any(),
            title: "Immutable Storage",
            card_class: "bg-gray-800 p-6 rounded-xl border border-green-500/20",
            points: &[
                "On-chain metadata storage",
                "Decentralized storage (IPFS with pinning)",
                "Permanent and verifiable",
                "Higher gas costs",
            ],
        },
        StorageProfile {
            icon: || view! { <ShieldAlert class="w-6 h-6 text-red-500" /> }.into_any(),
            title: "Mutable Storage",
            card_class: "bg-gray-800 p-6 rounded-xl border border-red-500/20",
            points: &[
                "Centralized servers",
                "Unpinned IPFS content",
                "Can be modified or deleted",
                "Lower initial costs",
            ],
        },
    ]
}

pub fn best_practices() -> Vec<&'static str> {
    vec![
        "Always verify the smart contract code before purchasing valuable NFTs",
        "Check if metadata is stored on-chain or uses permanent IPFS storage",
        "Use NFT verification tools to analyze metadata storage methods",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_record_matches_mint() {
        assert_eq!(ORIGINAL_NFT.name, "Crypto Punk #1337");
        assert_eq!(ORIGINAL_NFT.rarity, Rarity::Legendary);
        assert_eq!(ORIGINAL_NFT.power_level, 9000);
        assert_eq!(
            ORIGINAL_NFT.marketplace,
            "https://opensea.io/collection/genuine-collection"
        );
    }

    #[test]
    fn altered_record_differs_in_every_field() {
        assert_ne!(ALTERED_NFT.image, ORIGINAL_NFT.image);
        assert_ne!(ALTERED_NFT.name, ORIGINAL_NFT.name);
        assert_ne!(ALTERED_NFT.rarity, ORIGINAL_NFT.rarity);
        assert_ne!(ALTERED_NFT.power_level, ORIGINAL_NFT.power_level);
        assert_ne!(ALTERED_NFT.marketplace, ORIGINAL_NFT.marketplace);
    }

    #[test]
    fn altered_record_is_the_tampered_variant() {
        assert_eq!(ALTERED_NFT.name, "Cyrpto Punk #1337");
        assert_eq!(ALTERED_NFT.rarity, Rarity::Common);
        assert_eq!(ALTERED_NFT.power_level, 1);
        assert_eq!(ALTERED_NFT.marketplace, "https://malicious-marketplace.example");
    }

    #[test]
    fn rarity_labels() {
        assert_eq!(Rarity::Legendary.label(), "Legendary");
        assert_eq!(Rarity::Common.label(), "Common");
    }

    #[test]
    fn all_uris_are_absolute() {
        for uri in [
            ORIGINAL_NFT.image,
            ORIGINAL_NFT.marketplace,
            ALTERED_NFT.image,
            ALTERED_NFT.marketplace,
            LEARN_MORE_URL,
        ] {
            assert!(uri.starts_with("https://"), "not absolute: {uri}");
        }
    }
}
