//! Clients for infrastructure outside the database

pub mod storage;
