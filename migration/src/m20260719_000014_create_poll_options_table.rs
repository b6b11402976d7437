use sea_orm_migration::{prelude::*, schema::*};

use super::m20260719_000013_create_poll_questions_table::PollQuestions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollOptions::Table)
                    .if_not_exists()
                    .col(pk_auto(PollOptions::Id))
                    .col(integer(PollOptions::QuestionId))
                    .col(string(PollOptions::Label))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_option_question_id")
                            .from(PollOptions::Table, PollOptions::QuestionId)
                            .to(PollQuestions::Table, PollQuestions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollOptions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollOptions {
    Table,
    Id,
    QuestionId,
    Label,
}
