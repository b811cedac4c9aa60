pub mod chat;
pub mod init_route;
