pub mod dto;
pub mod selector;
pub mod service;
