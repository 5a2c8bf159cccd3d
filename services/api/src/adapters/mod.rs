pub mod db;

pub use db::PgLeadStore;
