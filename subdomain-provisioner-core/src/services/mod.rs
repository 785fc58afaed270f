//! Provisioning pipeline: load, validate, create

mod input_loader;
mod provisioning_service;
mod record_validator;

pub use input_loader::load_input;
pub use provisioning_service::{run, ProvisioningService};
pub use record_validator::validate_record;
