//! Order Model

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Display label as printed on receipts (uppercased by the renderer).
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Preparing => "Em preparo",
            OrderStatus::OutForDelivery => "Saiu para entrega",
            OrderStatus::Ready => "Pronto para retirada",
            OrderStatus::Completed => "Concluído",
            OrderStatus::Cancelled => "Cancelado",
        }
    }
}

/// Order line item
///
/// Carries copies of the option labels and display titles used at order
/// time, decoupled from the live `MenuItem` so historical orders stay
/// stable when the menu changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price in currency units, fixed at checkout.
    #[serde(alias = "unitPrice")]
    pub unit_price: f64,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default, alias = "sizesTitle")]
    pub sizes_title: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default, alias = "borderTitle")]
    pub border_title: Option<String>,
    #[serde(default)]
    pub flavors: Vec<String>,
    #[serde(default, alias = "flavorsTitle")]
    pub flavors_title: Option<String>,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default, alias = "extrasTitle")]
    pub extras_title: Option<String>,
    #[serde(default)]
    pub observation: Option<String>,
}

impl OrderItem {
    /// Line subtotal (unit price x quantity), unrounded.
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Customer contact data copied onto the order at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, alias = "nome")]
    pub name: String,
    #[serde(default, alias = "telefone")]
    pub phone: String,
}

/// Canonical delivery address.
///
/// Legacy orders persisted two JSON layouts (a nested `address` object and
/// a flat record); both resolve into this struct once at the serde
/// boundary via [`DeliveryWire`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryAddress {
    #[serde(default, alias = "rua")]
    pub street: String,
    #[serde(default, alias = "numero")]
    pub number: String,
    #[serde(default, alias = "complemento")]
    pub complement: Option<String>,
    #[serde(default, alias = "bairro")]
    pub neighborhood: String,
    #[serde(default, alias = "referencia")]
    pub reference: Option<String>,
    #[serde(default, alias = "cidade")]
    pub city: Option<String>,
}

/// Delivery leg of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "DeliveryWire")]
pub struct DeliveryDetails {
    pub address: DeliveryAddress,
    /// Delivery fee in currency units.
    pub fee: f64,
    /// Free-form estimate shown on the receipt (e.g. "40-50 min").
    pub estimated_time: Option<String>,
}

/// Wire shape for [`DeliveryDetails`]: nested layout first (keyed by the
/// presence of `address`), flat layout as the fallback.
#[derive(Deserialize)]
#[serde(untagged)]
enum DeliveryWire {
    Nested {
        address: DeliveryAddress,
        #[serde(default, alias = "taxaEntrega")]
        fee: f64,
        #[serde(default, alias = "tempoEstimado", alias = "estimatedTime")]
        estimated_time: Option<String>,
    },
    Flat {
        #[serde(flatten)]
        address: DeliveryAddress,
        #[serde(default, alias = "taxaEntrega")]
        fee: f64,
        #[serde(default, alias = "tempoEstimado", alias = "estimatedTime")]
        estimated_time: Option<String>,
    },
}

impl From<DeliveryWire> for DeliveryDetails {
    fn from(wire: DeliveryWire) -> Self {
        match wire {
            DeliveryWire::Nested {
                address,
                fee,
                estimated_time,
            }
            | DeliveryWire::Flat {
                address,
                fee,
                estimated_time,
            } => Self {
                address,
                fee,
                estimated_time,
            },
        }
    }
}

/// How the order reaches the customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum Fulfillment {
    /// Counter pickup ("Retirada").
    Pickup,
    /// Courier delivery ("Entrega").
    Delivery(DeliveryDetails),
}

impl Fulfillment {
    pub fn label(&self) -> &'static str {
        match self {
            Fulfillment::Pickup => "Retirada",
            Fulfillment::Delivery(_) => "Entrega",
        }
    }

    pub fn fee(&self) -> f64 {
        match self {
            Fulfillment::Pickup => 0.0,
            Fulfillment::Delivery(d) => d.fee,
        }
    }
}

/// Payment choice made at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Method as stored ("dinheiro", "pix", "cartao", ...).
    #[serde(alias = "formaPagamento")]
    pub method: String,
    /// Change-due amount for cash payments, kept verbatim as the customer
    /// typed it (historical orders store it as a bare string like "50").
    #[serde(default, alias = "troco")]
    pub change_for: Option<String>,
}

impl Payment {
    pub fn is_cash(&self) -> bool {
        self.method.eq_ignore_ascii_case("dinheiro")
    }
}

/// Order entity (created once at checkout)
///
/// After creation only the status and the print-state flags mutate; the
/// pricing core never recomputes a stored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub customer: Customer,
    pub fulfillment: Fulfillment,
    pub payment: Payment,
    /// Total in currency units (lines + delivery fee), fixed at checkout.
    pub total: f64,
    /// General order-level observations.
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub printed: bool,
    #[serde(default, alias = "printedAt")]
    pub printed_at: Option<DateTime<FixedOffset>>,
}

impl Order {
    /// Short id printed on receipts: last 6 characters, uppercased.
    pub fn short_id(&self) -> String {
        let chars: Vec<char> = self.id.chars().collect();
        let start = chars.len().saturating_sub(6);
        chars[start..].iter().collect::<String>().to_uppercase()
    }

    /// Sum of line subtotals, before the delivery fee.
    pub fn items_subtotal(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn mark_printed(&mut self, at: DateTime<FixedOffset>) {
        self.printed = true;
        self.printed_at = Some(at);
    }
}
