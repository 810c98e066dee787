pub mod into_error_context;
pub mod result_ext;
