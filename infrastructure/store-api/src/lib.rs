pub mod client;
pub mod dto;
pub mod product_gateway;
mod response;
#[cfg(test)]
mod stub_server;
pub mod vendor_gateway;
