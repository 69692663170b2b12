mod model;
mod persistence;

pub use model::StripConfig;
pub use persistence::{config_base_dir, load_config, save_config};
