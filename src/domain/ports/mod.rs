mod dataset_port;
mod key_value_port;

pub use dataset_port::DatasetSource;
pub use key_value_port::KeyValueStore;
