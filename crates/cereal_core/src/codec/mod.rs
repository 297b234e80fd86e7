mod bytes;
mod decode;
mod encode;
mod error;
mod marker;
mod path;
mod ser;
mod value;
mod version;

/// Decoder entry points and options.
pub use decode::{DecodeOptions, decode, decode_reader, decode_with_options};
/// Encoder entry points.
pub use encode::{encode, encode_serialize};
/// Error and result aliases.
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
/// Value kinds selected by type markers.
pub use marker::{ScalarKind, TypeMarker};
/// Field path used in error locations.
pub use path::Path;
/// Serde conversion into the value model.
pub use ser::{ValueSerializer, to_value};
/// Generic value model.
pub use value::{Map, Value};
/// Grammar revision marker.
pub use version::Version;
