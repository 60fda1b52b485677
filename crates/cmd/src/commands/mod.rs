pub mod build;
pub mod clean;
pub mod init;
pub mod list;

pub use build::build_command;
pub use clean::clean_command;
pub use init::init_command;
pub use list::list_command;
