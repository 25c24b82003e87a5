pub mod api_utils;
pub mod backend;
pub mod config;
pub mod icons;
pub mod session;
pub mod timer;

#[cfg(test)]
pub mod test_support;
