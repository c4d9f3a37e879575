use crate::server::{
    data::bird::BirdRepository,
    error::{validation::FieldViolation, AppError},
    model::bird::Bird,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

/// Well-formed object id that no factory ever produces.
const UNKNOWN_ID: &str = "ffffffffffffffffffffffff";
