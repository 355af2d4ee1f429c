//! Shared types for the Cardápio ordering core
//!
//! Data models (menu items, orders, receipt settings) and the unit price
//! calculator used by the checkout flow. Receipt rendering lives in
//! `cardapio-receipt`, printer transport in `cardapio-printer`.

pub mod models;
pub mod money;
pub mod pricing;

// Re-exports
pub use serde::{Deserialize, Serialize};
