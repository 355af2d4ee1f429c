//! Receipt Settings Model

use serde::{Deserialize, Serialize};

/// Restaurant display data for receipt headers (admin-managed singleton)
///
/// Pure value object; empty strings mean "not configured" and the renderer
/// omits the corresponding header line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptSettings {
    #[serde(default, alias = "nome")]
    pub name: String,
    /// Tax identification number (CNPJ)
    #[serde(default, alias = "cnpj")]
    pub tax_id: String,
    #[serde(default, alias = "rua")]
    pub street: String,
    #[serde(default, alias = "numero")]
    pub number: String,
    #[serde(default, alias = "cidade")]
    pub city: String,
    #[serde(default, alias = "telefone")]
    pub phone: String,
}
