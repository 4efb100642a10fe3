use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608200003_create_students"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // cohort holds a plain id, not a foreign key: deleting a cohort leaves
        // the reference dangling and reads resolve it to null.
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("students"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("first_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("last_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("email")).string().not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("phone")).string().not_null())
                    .col(ColumnDef::new(Alias::new("linkedin_url")).string().not_null())
                    .col(ColumnDef::new(Alias::new("languages")).json().not_null())
                    .col(ColumnDef::new(Alias::new("program")).string().not_null())
                    .col(ColumnDef::new(Alias::new("background")).string().not_null())
                    .col(ColumnDef::new(Alias::new("image")).string().not_null())
                    .col(ColumnDef::new(Alias::new("cohort")).big_integer())
                    .col(ColumnDef::new(Alias::new("projects")).json().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_cohort")
                    .table(Alias::new("students"))
                    .col(Alias::new("cohort"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("students")).to_owned())
            .await
    }
}
