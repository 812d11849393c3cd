use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum About {
    Table,
    Id,
    Bio,
    ProfileImage,
    ResumeUrl,
    Email,
    Location,
    SocialLinks,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Skills {
    Table,
    Id,
    Name,
    Icon,
    Level,
    Category,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Image,
    Technologies,
    GithubUrl,
    LiveUrl,
    Featured,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Contacts {
    Table,
    Id,
    Name,
    Email,
    Message,
    Read,
    CreatedAt,
}

fn timestamps<T: Iden + 'static>(created: T, updated: T) -> [ColumnDef; 2] {
    [
        ColumnDef::new(created)
            .timestamp_with_time_zone()
            .not_null()
            .to_owned(),
        ColumnDef::new(updated)
            .timestamp_with_time_zone()
            .not_null()
            .to_owned(),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        let [created, updated] = timestamps(Users::CreatedAt, Users::UpdatedAt);
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("admin"),
                    )
                    .col(created)
                    .col(updated)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // about
        let [created, updated] = timestamps(About::CreatedAt, About::UpdatedAt);
        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(About::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(About::Bio).text().not_null())
                    .col(ColumnDef::new(About::ProfileImage).string().not_null())
                    .col(ColumnDef::new(About::ResumeUrl).string().null())
                    .col(ColumnDef::new(About::Email).string().not_null())
                    .col(ColumnDef::new(About::Location).string().null())
                    .col(ColumnDef::new(About::SocialLinks).json().null())
                    .col(created)
                    .col(updated)
                    .to_owned(),
            )
            .await?;

        // skills
        let [created, updated] = timestamps(Skills::CreatedAt, Skills::UpdatedAt);
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Skills::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Skills::Name).string().not_null())
                    .col(ColumnDef::new(Skills::Icon).string().not_null())
                    .col(ColumnDef::new(Skills::Level).small_integer().not_null())
                    .col(
                        ColumnDef::new(Skills::Category)
                            .string()
                            .not_null()
                            .default("other"),
                    )
                    .col(
                        ColumnDef::new(Skills::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(created)
                    .col(updated)
                    .check(Expr::col(Skills::Level).between(1, 5))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_skills_sort_order")
                    .table(Skills::Table)
                    .col(Skills::SortOrder)
                    .to_owned(),
            )
            .await?;

        // projects
        let [created, updated] = timestamps(Projects::CreatedAt, Projects::UpdatedAt);
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Projects::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Projects::Title).string().not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::Image).string().null())
                    .col(ColumnDef::new(Projects::Technologies).json().not_null())
                    .col(ColumnDef::new(Projects::GithubUrl).string().not_null())
                    .col(ColumnDef::new(Projects::LiveUrl).string().null())
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(created)
                    .col(updated)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_projects_sort_order")
                    .table(Projects::Table)
                    .col(Projects::SortOrder)
                    .to_owned(),
            )
            .await?;

        // contacts
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contacts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Contacts::Name).string().not_null())
                    .col(ColumnDef::new(Contacts::Email).string().not_null())
                    .col(ColumnDef::new(Contacts::Message).text().not_null())
                    .col(
                        ColumnDef::new(Contacts::Read)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Contacts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_contacts_created_at")
                    .table(Contacts::Table)
                    .col(Contacts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_contacts_created_at")
                    .table(Contacts::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_projects_sort_order")
                    .table(Projects::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_skills_sort_order")
                    .table(Skills::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_users_username")
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
