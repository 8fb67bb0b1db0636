pub mod init;
pub mod render;
pub mod ticks;

pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{load_config, run_render, run_render_impl};
pub use ticks::{run_ticks, run_ticks_impl};
