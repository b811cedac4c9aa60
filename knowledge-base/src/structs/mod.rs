pub mod knowledge_base_config;
pub mod knowledge_entry;
