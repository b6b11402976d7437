use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260715_000001_create_users_table::Users,
    m20260719_000013_create_poll_questions_table::PollQuestions,
    m20260719_000014_create_poll_options_table::PollOptions,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollVotes::Table)
                    .if_not_exists()
                    .col(pk_auto(PollVotes::Id))
                    .col(integer(PollVotes::QuestionId))
                    .col(integer(PollVotes::OptionId))
                    .col(integer(PollVotes::VoterId))
                    .col(
                        timestamp(PollVotes::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_vote_question_id")
                            .from(PollVotes::Table, PollVotes::QuestionId)
                            .to(PollQuestions::Table, PollQuestions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_vote_option_id")
                            .from(PollVotes::Table, PollVotes::OptionId)
                            .to(PollOptions::Table, PollOptions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_vote_voter_id")
                            .from(PollVotes::Table, PollVotes::VoterId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // One vote per (question, voter); re-votes are applied as
                    // an upsert against this index.
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_poll_vote_unique")
                            .col(PollVotes::QuestionId)
                            .col(PollVotes::VoterId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollVotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollVotes {
    Table,
    Id,
    QuestionId,
    OptionId,
    VoterId,
    CreatedAt,
}
