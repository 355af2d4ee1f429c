//! # cardapio-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building
//! - CP860 encoding for Portuguese thermal printers
//! - Network printing (TCP port 9100)
//!
//! Business logic (WHAT to print) stays in `cardapio-receipt`.
//!
//! ## Example
//!
//! ```ignore
//! use cardapio_printer::{EscPosBuilder, NetworkPrinter, Printer};
//!
//! let mut builder = EscPosBuilder::new(32);
//! builder.code_page(3); // ESC t 3 = PC860
//! builder.center();
//! builder.double_size();
//! builder.line("PASTELARIA JOAO");
//! builder.reset_size();
//! builder.sep_double();
//! builder.left();
//! builder.line("1x Pastel de Queijo");
//! builder.cut_feed(4);
//!
//! let printer = NetworkPrinter::new("192.168.1.100", 9100)?;
//! printer.print(&builder.build()).await?;
//! ```

mod encoding;
mod error;
mod escpos;
mod printer;

// Re-exports
pub use encoding::{
    cp860_byte, cp860_width, encode_char, encode_cp860, fold_diacritic, pad_chars, strip_accents,
    truncate_chars,
};
pub use error::{PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use printer::{NetworkPrinter, Printer};
