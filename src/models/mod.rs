pub mod api_response;
pub mod network_config;
pub mod notice;
pub mod resource;
pub mod session;
pub mod view;
