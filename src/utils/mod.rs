pub mod cafe_network;
pub mod init_map;
pub mod layout;
pub mod plot;
pub mod text;
