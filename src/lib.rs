pub mod alias;
pub mod mapping;
pub mod normalizer;
pub mod pipeline;
pub mod resolve;
pub mod shared;
pub mod stage;
pub mod taxonomy;
pub mod unicode;


pub use alias::Alias;
pub use mapping::{AliasTable, create_taxonomy_mapping};
pub use normalizer::{Normalizer, NormalizerBuilder, get_tag};
pub use resolve::{ResolveError, map_to_canonical_id};
pub use shared::SharedAliasTable;
pub use taxonomy::{Taxonomy, TaxonomyNode};
