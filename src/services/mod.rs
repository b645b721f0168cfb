pub mod background_service;
pub mod planner_client;
