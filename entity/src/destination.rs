use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "destination")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub channel_id: Option<String>,
    pub webhook_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_subscription::Entity")]
    GameSubscription,
}

impl Related<super::game_subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameSubscription.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
