pub mod collection_store;
pub mod in_memory_kv;
pub mod json_file_kv;
pub mod seed;

pub use collection_store::CollectionStore;
pub use in_memory_kv::InMemoryKeyValueStore;
pub use json_file_kv::JsonFileKeyValueStore;
