//! HTML wrapper for browser printing
//!
//! Wraps the plain-text receipt verbatim in a minimal print document sized
//! for 58mm thermal paper (48mm content width). The text is inserted
//! unescaped on purpose: receipts are printed from trusted admin screens
//! and the byte-for-byte text body is part of the contract.

use crate::text::render_text;
use shared::models::{Order, ReceiptSettings};

/// Render an order as a print-ready HTML document.
pub fn render_html(order: &Order, settings: Option<&ReceiptSettings>) -> String {
    let text = render_text(order, settings);
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Pedido #{short_id}</title>\n\
         <style>\n\
         @page {{ size: 58mm auto; margin: 0; }}\n\
         body {{ width: 48mm; margin: 0 auto; }}\n\
         pre {{ font-family: \"Courier New\", Courier, monospace; font-size: 10px; line-height: 1.2; white-space: pre; margin: 0; }}\n\
         @media print {{ body {{ width: 48mm; }} }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <pre>{text}</pre>\n\
         </body>\n\
         </html>\n",
        short_id = order.short_id(),
        text = text,
    )
}
