//! 业务逻辑服务层

mod imagery_service;

pub use imagery_service::ImageryService;
