//! Built-in family tables

mod common;
mod db2;
mod firebird;
mod generic;
mod h2;
mod mssql;
mod mysql;
mod oracle;
mod postgres;
mod sqlite;

use super::profile::FamilySpec;

pub use generic::FAMILY as GENERIC;

/// Families in product-name matching order
pub static ALL: &[&FamilySpec] = &[
    &db2::FAMILY,
    &oracle::FAMILY,
    &mysql::MARIADB,
    &mysql::MYSQL,
    &postgres::FAMILY,
    &mssql::FAMILY,
    &sqlite::FAMILY,
    &h2::FAMILY,
    &firebird::FAMILY,
];
