use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260715_000001_create_users_table::Users, m20260715_000002_create_groups_table::Groups,
    m20260716_000004_create_events_table::Events,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscussionThreads::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscussionThreads::Id))
                    .col(string(DiscussionThreads::Title))
                    .col(string_len(DiscussionThreads::Context, 10))
                    .col(integer_null(DiscussionThreads::GroupId))
                    .col(integer_null(DiscussionThreads::EventId))
                    .col(integer(DiscussionThreads::CreatedById))
                    .col(
                        timestamp(DiscussionThreads::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discussion_thread_group_id")
                            .from(DiscussionThreads::Table, DiscussionThreads::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discussion_thread_event_id")
                            .from(DiscussionThreads::Table, DiscussionThreads::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discussion_thread_created_by_id")
                            .from(DiscussionThreads::Table, DiscussionThreads::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscussionThreads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscussionThreads {
    Table,
    Id,
    Title,
    Context,
    GroupId,
    EventId,
    CreatedById,
    CreatedAt,
}
