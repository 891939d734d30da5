pub mod collector;
pub mod deduplicator;
pub mod duplicates_group;
pub mod duplicates_result_processor;
pub mod file_info;
pub mod hasher;
pub mod scanner;
