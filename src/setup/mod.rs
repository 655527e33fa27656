pub mod init;
pub mod init_types;

pub use init::load_configuration;
pub use init_types::LoadedConfiguration;
