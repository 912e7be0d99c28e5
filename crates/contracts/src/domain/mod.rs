pub mod common;

pub mod a001_company;
pub mod a002_service;
pub mod a003_contract;
