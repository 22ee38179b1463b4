pub mod url_join;
