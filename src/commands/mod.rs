pub mod dump;
pub mod init;
