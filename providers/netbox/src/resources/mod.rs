//! Resource handlers, organized by NetBox API section.
//!
//! - `ipam_aggregate`: IPAM aggregates (`netbox_ipam_aggregate`)

pub mod ipam_aggregate;
#[cfg(test)]
mod ipam_aggregate_test;

pub use ipam_aggregate::IpamAggregate;
