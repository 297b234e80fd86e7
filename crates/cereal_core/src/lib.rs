//! Public library API for the cereal text data-interchange format.

/// Value model, decoder, encoder, and serde conversion for cereal documents.
pub mod codec;
