mod property_fields;
pub(crate) mod utils;
