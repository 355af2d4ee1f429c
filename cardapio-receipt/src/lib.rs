//! # cardapio-receipt
//!
//! Receipt rendering for the Cardápio ordering system.
//!
//! One stored order renders three equivalent ways:
//! - [`render_text`]: plain text, fixed 32-column layout for 58mm paper
//! - [`render_html`]: the same text wrapped for browser printing
//! - [`render_escpos`]: binary ESC/POS stream for direct thermal printing
//!
//! All three are pure functions over the stored [`Order`] and the
//! restaurant's [`ReceiptSettings`]; nothing here touches the menu or
//! recomputes prices.
//!
//! [`Order`]: shared::models::Order
//! [`ReceiptSettings`]: shared::models::ReceiptSettings

mod escpos;
mod html;
mod layout;
mod text;
pub mod transport;

// Re-exports
pub use escpos::{CODE_PAGE_PC860, PrinterProfile, render_escpos};
pub use html::render_html;
pub use text::render_text;
