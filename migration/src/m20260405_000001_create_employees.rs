use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    FirstName,
    MiddleName,
    LastName,
    LocationCity,
    Address,
    DateOfBirth,
    Telephone,
    PositionTitle,
    HireDate,
    Email,
    Salary,
    Status,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

// Portable builder only: the same migration runs on Postgres in deployment
// and on in-memory SQLite in the integration tests.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::FirstName).string().not_null())
                    .col(ColumnDef::new(Employees::MiddleName).string())
                    .col(ColumnDef::new(Employees::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Employees::LocationCity)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employees::Address)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Employees::Telephone).string().not_null())
                    .col(
                        ColumnDef::new(Employees::PositionTitle)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::HireDate).date().not_null())
                    .col(
                        ColumnDef::new(Employees::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::Salary).double().not_null())
                    .col(ColumnDef::new(Employees::Status).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}
