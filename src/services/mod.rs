mod collection_builder;

pub use collection_builder::CollectionBuilder;
