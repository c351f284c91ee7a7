mod document;
mod writer;

#[cfg(test)]
pub mod fixtures;

pub use document::PdfDocument;
pub use writer::PdfWriter;
