pub mod cyclic_sequence;
pub mod logger;
