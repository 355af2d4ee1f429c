//! Binary ESC/POS receipt rendering
//!
//! Mirrors the text layout section by section, with printer commands for
//! alignment, emphasis and the paper cut. Every string goes through the
//! CP860 byte mapping in `cardapio-printer`; the title alone is printed
//! with accents stripped because code-page negotiation in double-size mode
//! proved unreliable on target hardware.

use crate::layout;
use cardapio_printer::{EscPosBuilder, strip_accents};
use shared::models::{Order, ReceiptSettings};
use tracing::instrument;

/// ESC t index for PC860 (Portuguese) on Epson-compatible firmware.
pub const CODE_PAGE_PC860: u8 = 3;

/// Per-hardware printing knobs, passed explicitly so different printers can
/// be supported without code changes.
#[derive(Debug, Clone, Copy)]
pub struct PrinterProfile {
    /// ESC t character table index. Found by trial against the target
    /// hardware; never assume it is universal.
    pub code_page: u8,
    /// Paper width in characters (32 for 58mm, 48 for 80mm).
    pub width: usize,
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self {
            code_page: CODE_PAGE_PC860,
            width: layout::RECEIPT_WIDTH,
        }
    }
}

/// Render an order as a raw ESC/POS byte stream.
#[instrument(skip_all, fields(order_id = %order.id))]
pub fn render_escpos(
    order: &Order,
    settings: Option<&ReceiptSettings>,
    profile: &PrinterProfile,
) -> Vec<u8> {
    let mut b = EscPosBuilder::new(profile.width);
    b.code_page(profile.code_page);

    // Header: double-size title (accent-stripped), then normal-size
    // settings lines, all centered.
    b.center();
    if let Some(settings) = settings {
        let name = settings.name.trim();
        if !name.is_empty() {
            b.double_size();
            b.line(&strip_accents(name));
            b.reset_size();
        }
        for line in layout::header_lines(settings) {
            b.line(&line);
        }
    }

    b.left();
    b.sep_double();
    for line in layout::meta_lines(order) {
        b.line(&line);
    }
    for line in layout::customer_lines(order) {
        b.line(&line);
    }
    for line in layout::fulfillment_lines(order) {
        b.line(&line);
    }

    // Items
    b.sep_double();
    b.center();
    b.line(layout::ITEMS_HEADER);
    b.left();
    b.sep_double();
    b.line(&layout::quantity_line(order));
    b.newline();
    for item in &order.items {
        for line in layout::item_lines(item) {
            b.line(&line);
        }
        b.newline();
    }

    // Totals: TOTAL gets bold double-size emphasis.
    b.sep_double();
    for line in layout::totals_lines(order) {
        b.line(&line);
    }
    b.bold();
    b.double_size();
    b.line(&layout::total_line(order));
    b.reset_size();
    b.bold_off();
    for line in layout::payment_lines(order) {
        b.line(&line);
    }
    for line in layout::tail_lines(order) {
        b.line(&line);
    }

    // Footer
    b.sep_double();
    b.center();
    b.line(layout::THANK_YOU);
    b.sep_double();
    b.left();
    b.cut_feed(4);

    b.build()
}
