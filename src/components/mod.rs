pub mod badge;
pub mod demo;
pub mod education;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod nft_card;
