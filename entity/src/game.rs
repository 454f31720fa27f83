use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub normalized_name: String,
    pub release_date: Option<Date>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_source::Entity")]
    GameSource,
    #[sea_orm(has_many = "super::game_subscription::Entity")]
    GameSubscription,
    #[sea_orm(has_many = "super::release_announcement::Entity")]
    ReleaseAnnouncement,
}

impl Related<super::game_source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameSource.def()
    }
}

impl Related<super::game_subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameSubscription.def()
    }
}

impl Related<super::release_announcement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReleaseAnnouncement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
