//! The page's single piece of UI state: which of the two metadata records
//! is currently shown.

use crate::data::{NftMetadata, ALTERED_NFT, ORIGINAL_NFT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoState {
    pub show_altered: bool,
}

impl DemoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between the original and the altered record.
    pub fn toggle(&mut self) {
        self.show_altered = !self.show_altered;
    }

    /// The record every bound field renders from.
    pub fn current(&self) -> &'static NftMetadata {
        if self.show_altered {
            &ALTERED_NFT
        } else {
            &ORIGINAL_NFT
        }
    }

    /// Rarity badge pill: green while the metadata is genuine, red once
    /// tampered.
    pub fn badge_class(&self) -> &'static str {
        if self.show_altered {
            "px-3 py-1 rounded-full text-sm font-semibold bg-red-500"
        } else {
            "px-3 py-1 rounded-full text-sm font-semibold bg-green-500"
        }
    }

    pub fn toggle_button_class(&self) -> &'static str {
        if self.show_altered {
            "w-full py-3 rounded-lg font-semibold transition-all bg-red-500 hover:bg-red-600"
        } else {
            "w-full py-3 rounded-lg font-semibold transition-all bg-green-500 hover:bg-green-600"
        }
    }

    /// Caption for the toggle button, naming the record a click would show.
    pub fn toggle_label(&self) -> &'static str {
        if self.show_altered {
            "Show Original Metadata"
        } else {
            "Show Altered Metadata"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Rarity;

    #[test]
    fn initial_state_shows_original_record() {
        let state = DemoState::new();
        assert!(!state.show_altered);

        let nft = state.current();
        assert_eq!(nft.name, "Crypto Punk #1337");
        assert_eq!(nft.rarity, Rarity::Legendary);
        assert_eq!(nft.power_level, 9000);
        assert_eq!(nft.marketplace, "https://opensea.io/collection/genuine-collection");
    }

    #[test]
    fn one_toggle_switches_every_bound_field() {
        let mut state = DemoState::new();
        state.toggle();

        // Selection is by record, so all fields flip together.
        assert_eq!(state.current(), &ALTERED_NFT);
        assert_eq!(state.current().name, "Cyrpto Punk #1337");
        assert_eq!(state.current().rarity, Rarity::Common);
        assert_eq!(state.current().power_level, 1);
        assert_eq!(
            state.current().marketplace,
            "https://malicious-marketplace.example"
        );
    }

    #[test]
    fn two_toggles_round_trip() {
        let mut state = DemoState::new();
        state.toggle();
        state.toggle();

        assert_eq!(state, DemoState::new());
        assert_eq!(state.current(), &ORIGINAL_NFT);
    }

    #[test]
    fn badge_styling_is_a_pure_function_of_the_flag() {
        let mut state = DemoState::new();
        assert!(state.badge_class().contains("bg-green-500"));

        state.toggle();
        assert!(state.badge_class().contains("bg-red-500"));
    }

    #[test]
    fn toggle_button_tracks_the_flag() {
        let mut state = DemoState::new();
        assert_eq!(state.toggle_label(), "Show Altered Metadata");
        assert!(state.toggle_button_class().contains("bg-green-500"));

        state.toggle();
        assert_eq!(state.toggle_label(), "Show Original Metadata");
        assert!(state.toggle_button_class().contains("bg-red-500"));
    }
}
