//! # smartfridge-adapter-barcode-rxing
//!
//! Driven adapter implementing the `BarcodeDecoder` port with
//! [rxing](https://docs.rs/rxing), a Rust port of `ZXing`.
//!
//! Uploaded bytes are decoded with the `image` crate, converted to 8-bit
//! luma and scanned for every barcode they contain. Decoding runs on the
//! blocking thread pool.

mod decoder;
mod error;

pub use decoder::RxingBarcodeDecoder;
pub use error::DecodeError;
