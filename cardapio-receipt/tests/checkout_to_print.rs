//! End-to-end: price a cart, assemble the order, render all three receipt
//! forms and the cloud print payload.

use cardapio_printer::encode_cp860;
use cardapio_receipt::{PrinterProfile, render_escpos, render_html, render_text, transport};
use shared::models::{
    Customer, DeliveryAddress, DeliveryDetails, Fulfillment, Order, OrderStatus, Payment,
    HalfAndHalf, ItemSelection, MenuItem, ReceiptSettings, PIZZA_CATEGORY,
};
use shared::pricing::{build_order_item, compute_unit_price};
use std::collections::BTreeMap;

fn pizza(name: &str, base: f64, grande: f64) -> MenuItem {
    MenuItem {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        category: PIZZA_CATEGORY.to_string(),
        base_price: base,
        sizes: Some(BTreeMap::from([("Grande".to_string(), grande)])),
        flavor_options: None,
        border_options: Some(BTreeMap::from([("Catupiry".to_string(), 8.0)])),
        extra_options: Some(BTreeMap::from([("Bacon".to_string(), 4.0)])),
        sizes_title: Some("Tamanho".to_string()),
        flavors_title: Some("Sabores".to_string()),
        border_title: Some("Borda".to_string()),
        extras_title: Some("Adicionais".to_string()),
    }
}

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

fn checkout() -> Order {
    let catalog = vec![pizza("Calabresa", 30.0, 40.0), pizza("Frango", 32.0, 45.0)];

    // Half-and-half Grande: priced by the more expensive half (Frango, 45.00).
    let selection = ItemSelection {
        size: Some("Grande".into()),
        half_and_half: Some(HalfAndHalf {
            flavor_a: "Calabresa".into(),
            flavor_b: "Frango".into(),
        }),
        flavors: vec!["Calabresa".into(), "Frango".into()],
        observation: Some("bem assada".into()),
        quantity: 1,
        ..Default::default()
    };
    assert_eq!(compute_unit_price(&catalog[0], &selection, &catalog), 45.0);
    let line = build_order_item(&catalog[0], &selection, &catalog);

    let fee = 5.0;
    Order {
        id: "65a1b2c3d4e5f6a7b8c9dead".into(),
        total: line.subtotal() + fee,
        items: vec![line],
        customer: Customer {
            name: "Maria Silva".into(),
            phone: "(11) 98888-7777".into(),
        },
        fulfillment: Fulfillment::Delivery(DeliveryDetails {
            address: DeliveryAddress {
                street: "Av. Brasil".into(),
                number: "900".into(),
                complement: None,
                neighborhood: "Centro".into(),
                reference: None,
                city: None,
            },
            fee,
            estimated_time: Some("40 min".into()),
        }),
        payment: Payment {
            method: "dinheiro".into(),
            change_for: Some("50".into()),
        },
        observations: None,
        status: OrderStatus::Pending,
        created_at: "2026-08-28T19:42:00-03:00".parse().unwrap(),
        printed: false,
        printed_at: None,
    }
}

#[test]
fn text_receipt_carries_the_priced_line() {
    let text = render_text(&checkout(), Some(&settings()));
    assert!(text.contains("1x Calabresa"));
    assert!(text.contains("  Tamanho: Grande"));
    assert!(text.contains("  Sabores: Calabresa / Frango"));
    assert!(text.contains("  Subtotal: R$ 45.00"));
    assert!(text.contains("Taxa de entrega: R$ 5.00"));
    assert!(text.contains("TOTAL: R$ 50.00"));
    assert!(text.contains("Troco para: R$ 50"));
}

#[test]
fn html_wraps_text_byte_for_byte() {
    let order = checkout();
    let text = render_text(&order, Some(&settings()));
    let html = render_html(&order, Some(&settings()));
    let start = html.find("<pre>").unwrap() + "<pre>".len();
    let end = html.find("</pre>").unwrap();
    assert_eq!(&html[start..end], text);
}

#[test]
fn escpos_stream_is_printable_and_mapped() {
    let order = checkout();
    let data = render_escpos(&order, Some(&settings()), &PrinterProfile::default());

    assert_eq!(&data[..2], &[0x1B, 0x40]);
    // Accent-stripped title, CP860-mapped city ("São Paulo" -> 'S' 0x84 'o').
    assert!(data.windows(15).any(|w| w == b"Pastelaria Joao"));
    assert!(data.windows(3).any(|w| w == [b'S', 0x84, b'o']));
    let cut = [0x1D, 0x56, 0x42, 4];
    assert_eq!(&data[data.len() - 4..], &cut);
}

#[test]
fn byte_mapping_is_one_byte_per_char() {
    for s in ["Pastelaria João", "açaí às 10°", "plain ascii", ""] {
        assert_eq!(encode_cp860(s).len(), s.chars().count());
    }
}

#[test]
fn print_job_round_trips_the_stream() {
    let order = checkout();
    let data = render_escpos(&order, Some(&settings()), &PrinterProfile::default());
    let job = transport::PrintJob::raw_base64(7, format!("Pedido #{}", order.short_id()), &data);
    assert_eq!(job.title, "Pedido #C9DEAD");
    assert_eq!(transport::from_base64(&job.content).unwrap(), data);
}

#[test]
fn stored_legacy_order_json_renders() {
    // Order persisted by the previous system: flat address layout and
    // Portuguese payment keys.
    let json = r#"{
        "id": "65a1b2c3d4e5f6a7b8c9beef",
        "items": [{
            "name": "Pastel de Carne",
            "quantity": 2,
            "unitPrice": 12.5,
            "extras": ["Queijo"],
            "extrasTitle": "Adicionais"
        }],
        "customer": {"nome": "João", "telefone": "(11) 90000-0000"},
        "fulfillment": {
            "type": "delivery",
            "details": {
                "rua": "Rua A", "numero": "1", "bairro": "Centro",
                "taxaEntrega": 7.0
            }
        },
        "payment": {"formaPagamento": "dinheiro", "troco": "50"},
        "total": 32.0,
        "status": "pending",
        "createdAt": "2026-08-28T12:00:00-03:00"
    }"#;
    let order: Order = serde_json::from_str(json).unwrap();
    assert_eq!(order.items_subtotal(), 25.0);

    let text = render_text(&order, None);
    assert!(text.contains("2x Pastel de Carne"));
    assert!(text.contains("  Adicionais: Queijo"));
    assert!(text.contains("Rua A, 1"));
    assert!(text.contains("Taxa de entrega: R$ 7.00"));
    assert!(text.contains("Troco para: R$ 50"));
}
