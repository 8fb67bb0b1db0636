mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    parse_config,
};
pub use model::{AxesConfig, Config, LayoutConfig, ScalesConfig, StyleConfig, YDomainMode};
pub use validation::{MAX_TICKS, validate_config};
