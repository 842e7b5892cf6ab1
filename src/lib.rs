pub mod config;
pub mod content;
pub mod logger;
pub mod paginator;
pub mod post_cache;
pub mod post_list;
pub mod query_string;
pub mod server;
pub mod text_utils;
pub mod view;
mod test_data;
