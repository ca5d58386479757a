mod catalog_page;
mod config;
mod isolation;
