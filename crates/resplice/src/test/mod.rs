// Test module organization
pub mod support;
pub mod test_lua;
pub mod test_properties;
pub mod test_record;
pub mod test_replace;
