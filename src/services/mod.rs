pub mod blockchain_service;
pub mod clipboard;
pub mod connector;
pub mod network_config;
pub mod notice_service;
#[cfg(test)]
pub mod testing;
pub mod wallet_provider;
