pub mod app_page;
