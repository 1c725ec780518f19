//! Example demonstrating sqlcraft's CREATE TABLE builder.
//!
//! Run with:
//!   cargo run --example create_table -p sqlcraft
//!
//! Optional: point at a config file to pick the flavor:
//!   SQLCRAFT_CONFIG=sqlcraft.toml

use sqlcraft::{BuildResult, BuilderConfig, ColumnType, Flavor, SqlBuilder};
use std::env;

fn main() -> BuildResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let config = match env::var("SQLCRAFT_CONFIG") {
        Ok(path) => BuilderConfig::load(path)?,
        Err(_) => BuilderConfig::default(),
    };

    let mut ctb = config.create_table("public.users");
    ctb.if_not_exists().pk_column();

    let default_role = ctb.var("member");
    ctb.define([
        "email",
        ColumnType::Varchar.with_modifiers(&["255"]).as_str(),
        "NOT NULL",
        "UNIQUE",
    ])
    .define(["role", ColumnType::Text.as_str(), "NOT NULL", "DEFAULT", default_role.as_str()])
    .created_column()
    .updated_column()
    .deleted_column();

    println!("-- {}", ctb.flavor());
    let built = ctb.build()?;
    println!("{}", built.sql);
    println!("params: {:?}", built.params);

    for flavor in [Flavor::MySql, Flavor::SqlServer, Flavor::Oracle] {
        let built = ctb.build_with_flavor(flavor, &[])?;
        println!("\n-- {flavor}\n{}", built.sql);
    }

    Ok(())
}
