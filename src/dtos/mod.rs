pub mod auth_dtos;
pub mod request_dtos;
