//! Remote order backend speaking JSON over HTTP.

pub mod factory;
pub mod repository;

pub use factory::HttpRepositoryFactory;
pub use repository::HttpOrderRepository;
