//! Line composition shared by the text and ESC/POS renderers
//!
//! Both renderers print the same body lines in the same order; only the
//! framing differs (the ESC/POS path adds alignment, size and bold
//! commands). Keeping composition here stops the two outputs drifting
//! apart.

use chrono::{DateTime, FixedOffset};
use shared::models::{DeliveryDetails, Fulfillment, Order, OrderItem, ReceiptSettings};
use shared::money::format_brl;

/// 58mm paper: 32 printable columns.
pub const RECEIPT_WIDTH: usize = 32;

pub const ITEMS_HEADER: &str = "ITENS";
pub const THANK_YOU: &str = "Obrigado pela preferência!";

// Hard defaults when the order line carries no stored title.
const DEFAULT_SIZES_TITLE: &str = "Tamanho";
const DEFAULT_BORDER_TITLE: &str = "Borda";
const DEFAULT_FLAVORS_TITLE: &str = "Sabores";
const DEFAULT_EXTRAS_TITLE: &str = "Adicionais";

/// Center a string in a field of `width` characters.
///
/// Pads left only; strings at or over the width come back untruncated.
pub fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), s)
}

/// Local convention: day/month/year, 24h time.
pub fn format_date(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Header lines below the restaurant name: tax id, address, phone.
/// Empty settings fields produce no line at all.
pub fn header_lines(settings: &ReceiptSettings) -> Vec<String> {
    let mut lines = Vec::new();
    let tax_id = settings.tax_id.trim();
    if !tax_id.is_empty() {
        lines.push(format!("CNPJ: {}", tax_id));
    }
    if let Some(address) = settings_address_line(settings) {
        lines.push(address);
    }
    let phone = settings.phone.trim();
    if !phone.is_empty() {
        lines.push(format!("Tel: {}", phone));
    }
    lines
}

/// Street+number+city line, omitted entirely when both street and city are
/// empty after trimming.
pub fn settings_address_line(settings: &ReceiptSettings) -> Option<String> {
    let street = settings.street.trim();
    let number = settings.number.trim();
    let city = settings.city.trim();
    if street.is_empty() && city.is_empty() {
        return None;
    }
    let mut line = String::new();
    if !street.is_empty() {
        line.push_str(street);
        if !number.is_empty() {
            line.push_str(", ");
            line.push_str(number);
        }
    }
    if !city.is_empty() {
        if !line.is_empty() {
            line.push_str(" - ");
        }
        line.push_str(city);
    }
    Some(line)
}

/// Order metadata: date/time and short id.
pub fn meta_lines(order: &Order) -> Vec<String> {
    vec![
        format!("Data: {}", format_date(&order.created_at)),
        format!("Pedido: #{}", order.short_id()),
    ]
}

pub fn customer_lines(order: &Order) -> Vec<String> {
    let mut lines = Vec::new();
    let name = order.customer.name.trim();
    if !name.is_empty() {
        lines.push(format!("Cliente: {}", name));
    }
    let phone = order.customer.phone.trim();
    if !phone.is_empty() {
        lines.push(format!("Fone: {}", phone));
    }
    lines
}

/// Delivery-type label plus the address block for delivery orders.
pub fn fulfillment_lines(order: &Order) -> Vec<String> {
    let mut lines = vec![order.fulfillment.label().to_string()];
    if let Fulfillment::Delivery(details) = &order.fulfillment {
        lines.extend(delivery_lines(details));
    }
    lines
}

fn delivery_lines(details: &DeliveryDetails) -> Vec<String> {
    let mut lines = Vec::new();
    let addr = &details.address;
    let street = addr.street.trim();
    let number = addr.number.trim();
    if !street.is_empty() || !number.is_empty() {
        if number.is_empty() {
            lines.push(street.to_string());
        } else if street.is_empty() {
            lines.push(number.to_string());
        } else {
            lines.push(format!("{}, {}", street, number));
        }
    }
    if let Some(complement) = addr.complement.as_deref()
        && !complement.trim().is_empty()
    {
        lines.push(format!("Compl: {}", complement.trim()));
    }
    let neighborhood = addr.neighborhood.trim();
    if !neighborhood.is_empty() {
        lines.push(format!("Bairro: {}", neighborhood));
    }
    if let Some(reference) = addr.reference.as_deref()
        && !reference.trim().is_empty()
    {
        lines.push(format!("Ref: {}", reference.trim()));
    }
    lines.push(format!("Taxa de entrega: {}", format_brl(details.fee)));
    if let Some(eta) = details.estimated_time.as_deref()
        && !eta.trim().is_empty()
    {
        lines.push(format!("Previsão: {}", eta.trim()));
    }
    lines
}

pub fn quantity_line(order: &Order) -> String {
    format!("Total de itens: {}", order.total_quantity())
}

/// One order line: `{qty}x {name}`, conditional option lines using the
/// stored titles (or hard defaults), observation, subtotal.
pub fn item_lines(item: &OrderItem) -> Vec<String> {
    let mut lines = vec![format!("{}x {}", item.quantity, item.name)];
    if let Some(size) = item.size.as_deref() {
        let title = item.sizes_title.as_deref().unwrap_or(DEFAULT_SIZES_TITLE);
        lines.push(format!("  {}: {}", title, size));
    }
    if let Some(border) = item.border.as_deref() {
        let title = item.border_title.as_deref().unwrap_or(DEFAULT_BORDER_TITLE);
        lines.push(format!("  {}: {}", title, border));
    }
    if !item.flavors.is_empty() {
        let title = item
            .flavors_title
            .as_deref()
            .unwrap_or(DEFAULT_FLAVORS_TITLE);
        lines.push(format!("  {}: {}", title, item.flavors.join(" / ")));
    }
    if !item.extras.is_empty() {
        let title = item.extras_title.as_deref().unwrap_or(DEFAULT_EXTRAS_TITLE);
        lines.push(format!("  {}: {}", title, item.extras.join(", ")));
    }
    if let Some(obs) = item.observation.as_deref()
        && !obs.trim().is_empty()
    {
        lines.push(format!("  Obs: {}", obs.trim()));
    }
    lines.push(format!("  Subtotal: {}", format_brl(item.subtotal())));
    lines
}

/// Totals block above the TOTAL line: items subtotal and, for delivery
/// orders, the fee.
pub fn totals_lines(order: &Order) -> Vec<String> {
    let mut lines = vec![format!("Subtotal: {}", format_brl(order.items_subtotal()))];
    if matches!(order.fulfillment, Fulfillment::Delivery(_)) {
        lines.push(format!(
            "Taxa de entrega: {}",
            format_brl(order.fulfillment.fee())
        ));
    }
    lines
}

/// The TOTAL line, kept separate so the ESC/POS renderer can wrap it in
/// bold double-size commands.
pub fn total_line(order: &Order) -> String {
    format!("TOTAL: {}", format_brl(order.total))
}

pub fn payment_lines(order: &Order) -> Vec<String> {
    let mut lines = vec![format!(
        "Pagamento: {}",
        order.payment.method.to_uppercase()
    )];
    if order.payment.is_cash()
        && let Some(change_for) = order.payment.change_for.as_deref()
        && !change_for.trim().is_empty()
    {
        // Kept verbatim as stored ("50", not "50.00").
        lines.push(format!("Troco para: R$ {}", change_for.trim()));
    }
    lines
}

/// Optional order-level observations followed by the status line.
pub fn tail_lines(order: &Order) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(obs) = order.observations.as_deref()
        && !obs.trim().is_empty()
    {
        lines.push(format!("Obs: {}", obs.trim()));
    }
    lines.push(format!("Status: {}", order.status.label().to_uppercase()));
    lines
}
