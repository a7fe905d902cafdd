//! Reserved field identifiers with engine-defined semantics.
//!
//! These are fixed UUIDs baked into every Strata installation, analogous to
//! system fields in other content engines. Three of them matter to the
//! standard-values subsystem:
//!
//! - [`SOURCE`] and [`SOURCE_ITEM`] never carry a standard value; queries
//!   for them short-circuit to an explicit empty default.
//! - [`STANDARD_VALUE_HOLDER`] is the synthetic key under which a resolved
//!   value map records which prototype item supplied its root.

use crate::FieldId;
use uuid::Uuid;

/// Datasource query of a rendering field. Never has a standard value.
pub const SOURCE: FieldId = FieldId::from_uuid(Uuid::from_u128(0x1620c8e4_5d2c_4357_8bd1_5a5e5fe24b4e));

/// Datasource item reference of a rendering field. Never has a standard value.
pub const SOURCE_ITEM: FieldId = FieldId::from_uuid(Uuid::from_u128(0xe39a5bf2_3f0d_4e4a_9fa4_01dc6d0e7c22));

/// Synthetic audit key: the prototype item that supplied the resolved map's
/// root, stored in string form.
pub const STANDARD_VALUE_HOLDER: FieldId =
    FieldId::from_uuid(Uuid::from_u128(0x952b4f77_1f86_4a55_8a08_a6f1d9c8e30b));
