//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Operand)]` | on struct/enum | Register operand type |
//! | `#[derive(Properties)]` | on struct | Generate property accessors |

mod operand;
mod properties;

pub use operand::expand_derive_operand;
pub use properties::expand_derive_properties;
