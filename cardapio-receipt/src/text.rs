//! Plain-text receipt rendering
//!
//! Fixed 32-column layout for 58mm paper. The HTML and ESC/POS renderers
//! are built on the same section composition (see `layout`), so the three
//! outputs always describe the same order the same way.

use crate::layout::{self, RECEIPT_WIDTH};
use shared::models::{Order, ReceiptSettings};

/// Render an order as a plain-text receipt.
///
/// Best-effort by policy: empty settings fields and blank order fields are
/// skipped rather than rendered as empty labels, because a non-printable
/// receipt is worse than an incomplete one.
pub fn render_text(order: &Order, settings: Option<&ReceiptSettings>) -> String {
    let mut r = Receipt::new();

    // Header
    r.sep_eq();
    if let Some(settings) = settings {
        let name = settings.name.trim();
        if !name.is_empty() {
            r.push(&layout::center(name, RECEIPT_WIDTH));
        }
        for line in layout::header_lines(settings) {
            r.push(&line);
        }
    }
    r.sep_eq();

    // Metadata, customer, delivery
    for line in layout::meta_lines(order) {
        r.push(&line);
    }
    for line in layout::customer_lines(order) {
        r.push(&line);
    }
    for line in layout::fulfillment_lines(order) {
        r.push(&line);
    }

    // Items
    r.sep_eq();
    r.push(&layout::center(layout::ITEMS_HEADER, RECEIPT_WIDTH));
    r.sep_eq();
    r.push(&layout::quantity_line(order));
    r.blank();
    for item in &order.items {
        for line in layout::item_lines(item) {
            r.push(&line);
        }
        r.blank();
    }

    // Totals and payment
    r.sep_eq();
    for line in layout::totals_lines(order) {
        r.push(&line);
    }
    r.push(&layout::total_line(order));
    for line in layout::payment_lines(order) {
        r.push(&line);
    }
    for line in layout::tail_lines(order) {
        r.push(&line);
    }

    // Footer
    r.sep_eq();
    r.push(&layout::center(layout::THANK_YOU, RECEIPT_WIDTH));
    r.sep_eq();
    r.blank();
    r.blank();

    r.finish()
}

/// Append-only line buffer; keeps the renderer linear even for very large
/// orders.
struct Receipt {
    buf: String,
}

impl Receipt {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
        }
    }

    fn push(&mut self, line: &str) {
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn sep_eq(&mut self) {
        for _ in 0..RECEIPT_WIDTH {
            self.buf.push('=');
        }
        self.buf.push('\n');
    }

    fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        Customer, DeliveryAddress, DeliveryDetails, Fulfillment, OrderItem, OrderStatus, Payment,
    };

    fn settings() -> ReceiptSettings {
        ReceiptSettings {
            name: "Pastelaria João".into(),
            tax_id: "12.345.678/0001-90".into(),
            street: "Rua das Flores".into(),
            number: "123".into(),
            city: "São Paulo".into(),
            phone: "(11) 1234-5678".into(),
        }
    }

    fn delivery_order() -> Order {
        Order {
            id: "65a1b2c3d4e5f6a7b8c9dead".into(),
            items: vec![OrderItem {
                name: "Pizza Grande".into(),
                quantity: 1,
                unit_price: 45.0,
                size: Some("Grande".into()),
                sizes_title: None,
                border: None,
                border_title: None,
                flavors: vec!["Calabresa".into(), "Frango".into()],
                flavors_title: None,
                extras: vec![],
                extras_title: None,
                observation: Some("Meio a meio: Calabresa / Frango".into()),
            }],
            customer: Customer {
                name: "Maria Silva".into(),
                phone: "(11) 98888-7777".into(),
            },
            fulfillment: Fulfillment::Delivery(DeliveryDetails {
                address: DeliveryAddress {
                    street: "Av. Brasil".into(),
                    number: "900".into(),
                    complement: Some("apto 12".into()),
                    neighborhood: "Centro".into(),
                    reference: Some("perto da praça".into()),
                    city: None,
                },
                fee: 5.0,
                estimated_time: Some("40 min".into()),
            }),
            payment: Payment {
                method: "dinheiro".into(),
                change_for: Some("50".into()),
            },
            total: 50.0,
            observations: None,
            status: OrderStatus::Pending,
            created_at: "2026-08-28T19:42:00-03:00".parse().unwrap(),
            printed: false,
            printed_at: None,
        }
    }

    #[test]
    fn test_full_layout_sections_in_order() {
        let text = render_text(&delivery_order(), Some(&settings()));
        let expected_in_order = [
            "Pastelaria João",
            "CNPJ: 12.345.678/0001-90",
            "Rua das Flores, 123 - São Paulo",
            "Tel: (11) 1234-5678",
            "Data: 28/08/2026 19:42",
            "Pedido: #C9DEAD",
            "Cliente: Maria Silva",
            "Fone: (11) 98888-7777",
            "Entrega",
            "Av. Brasil, 900",
            "Compl: apto 12",
            "Bairro: Centro",
            "Ref: perto da praça",
            "Taxa de entrega: R$ 5.00",
            "Previsão: 40 min",
            "ITENS",
            "Total de itens: 1",
            "1x Pizza Grande",
            "  Tamanho: Grande",
            "  Sabores: Calabresa / Frango",
            "  Subtotal: R$ 45.00",
            "Subtotal: R$ 45.00",
            "TOTAL: R$ 50.00",
            "Pagamento: DINHEIRO",
            "Troco para: R$ 50",
            "Status: PENDENTE",
            "Obrigado pela preferência!",
        ];
        let mut from = 0;
        for needle in expected_in_order {
            let at = text[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {:?}", needle));
            from += at + needle.len();
        }
    }

    #[test]
    fn test_troco_line_for_cash_with_change() {
        let text = render_text(&delivery_order(), Some(&settings()));
        assert!(text.contains("Troco para: R$ 50"));
    }

    #[test]
    fn test_no_troco_line_for_pix() {
        let mut order = delivery_order();
        order.payment = Payment {
            method: "pix".into(),
            change_for: Some("50".into()),
        };
        let text = render_text(&order, Some(&settings()));
        assert!(!text.contains("Troco para"));
        assert!(text.contains("Pagamento: PIX"));
    }

    #[test]
    fn test_pickup_has_no_delivery_block() {
        let mut order = delivery_order();
        order.fulfillment = Fulfillment::Pickup;
        let text = render_text(&order, Some(&settings()));
        assert!(text.contains("Retirada"));
        assert!(!text.contains("Taxa de entrega"));
        assert!(!text.contains("Bairro:"));
    }

    #[test]
    fn test_renders_without_settings() {
        let text = render_text(&delivery_order(), None);
        assert!(!text.contains("CNPJ"));
        assert!(text.contains("Pedido: #C9DEAD"));
        assert!(text.contains("TOTAL: R$ 50.00"));
    }

    #[test]
    fn test_currency_two_decimals() {
        let mut order = delivery_order();
        order.total = 50.5;
        let text = render_text(&order, None);
        assert!(text.contains("TOTAL: R$ 50.50"));
    }

    #[test]
    fn test_name_centered_in_32_columns() {
        let text = render_text(&delivery_order(), Some(&settings()));
        // "Pastelaria João" is 15 chars, so (32-15)/2 = 8 leading spaces.
        assert!(text.contains("\n        Pastelaria João\n"));
    }
}
