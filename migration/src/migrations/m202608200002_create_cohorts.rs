use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608200002_create_cohorts"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // program_manager and lead_teacher reference users by id without a
        // foreign key constraint: user deletion must not touch cohorts.
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("cohorts"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("cohort_slug")).string().not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("cohort_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("program")).string().not_null())
                    .col(ColumnDef::new(Alias::new("format")).string().not_null())
                    .col(ColumnDef::new(Alias::new("campus")).string().not_null())
                    .col(ColumnDef::new(Alias::new("start_date")).date().not_null())
                    .col(ColumnDef::new(Alias::new("end_date")).date().not_null())
                    .col(ColumnDef::new(Alias::new("in_progress")).boolean().not_null())
                    .col(ColumnDef::new(Alias::new("program_manager")).big_integer())
                    .col(ColumnDef::new(Alias::new("lead_teacher")).big_integer())
                    .col(ColumnDef::new(Alias::new("total_hours")).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("cohorts")).to_owned())
            .await
    }
}
