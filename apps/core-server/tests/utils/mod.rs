pub mod context;
pub mod db_clients;
