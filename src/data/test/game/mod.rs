use crate::{
    data::game::GameRepository,
    model::game::{CreateGameParam, SourceParam, SourceType},
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod get_releasing_on;
mod replace_sources;
mod set_release_date;

fn source(source_type: SourceType, source_id: &str) -> SourceParam {
    SourceParam {
        source_type,
        source_id: source_id.to_string(),
    }
}
