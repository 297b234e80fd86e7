/// JSON to cereal conversion command.
pub mod from_json;
/// Cereal to JSON conversion command.
pub mod to_json;

mod util;
