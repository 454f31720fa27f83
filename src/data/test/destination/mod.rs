use crate::{
    data::destination::DestinationRepository,
    model::destination::{DestinationTarget, UpsertDestinationParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_subscribed_to_game;
mod subscribe;
mod upsert;
