pub mod api_utils;
pub mod confirm;
pub mod crud_api;
pub mod dom;
pub mod form;
pub mod format;
pub mod status;
