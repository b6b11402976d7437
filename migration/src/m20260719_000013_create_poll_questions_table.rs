use sea_orm_migration::{prelude::*, schema::*};

use super::m20260719_000012_create_polls_table::Polls;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollQuestions::Table)
                    .if_not_exists()
                    .col(pk_auto(PollQuestions::Id))
                    .col(integer(PollQuestions::PollId))
                    .col(string(PollQuestions::Question))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_question_poll_id")
                            .from(PollQuestions::Table, PollQuestions::PollId)
                            .to(Polls::Table, Polls::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollQuestions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollQuestions {
    Table,
    Id,
    PollId,
    Question,
}
