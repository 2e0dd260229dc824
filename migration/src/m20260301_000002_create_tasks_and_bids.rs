use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // tasks
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tasks::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tasks::TaskerId).uuid().not_null())
                    .col(ColumnDef::new(Tasks::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Tasks::Description).text().not_null())
                    .col(ColumnDef::new(Tasks::Category).string_len(64).not_null())
                    .col(ColumnDef::new(Tasks::LocationAddress).text().not_null())
                    .col(ColumnDef::new(Tasks::BudgetMin).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::BudgetMax).big_integer().not_null())
                    .col(
                        ColumnDef::new(Tasks::Status)
                            .string_len(16)
                            .not_null()
                            .default("open"),
                    )
                    .col(ColumnDef::new(Tasks::AssignedHelperId).uuid().null())
                    .col(ColumnDef::new(Tasks::WinningBidId).uuid().null())
                    .col(
                        ColumnDef::new(Tasks::FaceScanVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Tasks::FaceScanAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Tasks::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Tasks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_tasker_id")
                            .from(Tasks::Table, Tasks::TaskerId)
                            .to(Users::Table, Users::Id)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_assigned_helper_id")
                            .from(Tasks::Table, Tasks::AssignedHelperId)
                            .to(Users::Table, Users::Id)
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // bids
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Bids::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bids::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bids::TaskId).uuid().not_null())
                    .col(ColumnDef::new(Bids::HelperId).uuid().not_null())
                    .col(ColumnDef::new(Bids::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Bids::EstimatedHours).double().not_null())
                    .col(ColumnDef::new(Bids::Message).text().not_null())
                    .col(
                        ColumnDef::new(Bids::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Bids::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bids_task_id")
                            .from(Bids::Table, Bids::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bids_helper_id")
                            .from(Bids::Table, Bids::HelperId)
                            .to(Users::Table, Users::Id)
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // A helper bids at most once per task
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_bids_task_helper
                ON bids (task_id, helper_id);
                "#,
            )
            .await?;

        // Browse: open tasks, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_tasks_status_created_at
                ON tasks (status, created_at DESC);
                "#,
            )
            .await?;

        // Tasker dashboard
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_tasks_tasker_id
                ON tasks (tasker_id, created_at DESC);
                "#,
            )
            .await?;

        // Helper dashboard
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_bids_helper_id
                ON bids (helper_id, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_bids_task_helper;
                DROP INDEX IF EXISTS idx_tasks_status_created_at;
                DROP INDEX IF EXISTS idx_tasks_tasker_id;
                DROP INDEX IF EXISTS idx_bids_helper_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bids::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    TaskerId,
    Title,
    Description,
    Category,
    LocationAddress,
    BudgetMin,
    BudgetMax,
    Status,
    AssignedHelperId,
    WinningBidId,
    FaceScanVerified,
    FaceScanAt,
    CompletedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Bids {
    Table,
    Id,
    TaskId,
    HelperId,
    Amount,
    EstimatedHours,
    Message,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
