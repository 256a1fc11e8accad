pub mod admin_dtos;
