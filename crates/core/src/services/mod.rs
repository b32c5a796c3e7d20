pub mod activity_service;
pub mod bucketizer;
pub mod indicator_service;
pub mod notification_service;
