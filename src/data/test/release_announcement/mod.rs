use crate::{
    data::release_announcement::ReleaseAnnouncementRepository, model::release::Milestone,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod claim;
