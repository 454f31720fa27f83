use crate::{data::game_source::GameSourceRepository, model::game::SourceType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_marker;
mod set_marker;
