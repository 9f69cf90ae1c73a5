//! Compiles ACF field-group definitions into GraphQL types.
//!
//! The parser walks the field definitions attached to a content-block kind
//! and synthesizes object, enum and union types into an
//! [`acf_registry::Registry`], together with the resolver data the engine
//! crate interprets at query time.
//!
//! Given a block kind `acf/hero` carrying a text field `headline` and a
//! single-valued post reference `cta` targeting pages, the generated schema
//! surface is:
//!
//! ```text
//! type AcfHeroFields {
//!     headline: String
//!     cta: Page
//! }
//! ```
//!
//! and the block's own type gains a single `acf: AcfHeroFields` field whose
//! resolver assembles the stored values of the block instance.
//!
//! Nothing in the compiler is fatal: definitions with unusable names and
//! references without resolvable targets drop out of the schema and are
//! reported through [`Diagnostics`].

mod block;
mod config;
mod context;
mod diagnostics;
mod leaf_types;
mod names;
mod synthesize;


pub use block::extend_block_type_fields;
pub use config::ParserConfig;
pub use context::Context;
pub use diagnostics::Diagnostics;
pub use leaf_types::LeafTypes;
pub use names::{format_block_fields_type_name, format_name, is_field_name_valid};
pub use synthesize::compile_fields;
