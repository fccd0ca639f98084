pub mod filters;
pub mod record;
pub mod rower;
pub mod test_type;
