pub mod demo;
pub mod init;
