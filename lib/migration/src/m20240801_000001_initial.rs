use sea_orm_migration::prelude::*;

use crate::datatype::{flag, timestamp, uuid_char, uuid_char_null};

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIQUE_USER_EMAIL_INDEX: &str = "index-User-Email-Unique";
const UNIQUE_ORGANISATION_EMAIL_INDEX: &str = "index-Organisation-Email-Unique";
const UNIQUE_ROLE_NAME_IN_ORGANISATION_INDEX: &str = "index-Role-Name-OrganisationId-Unique";
const UNIQUE_MEMBER_IN_ORGANISATION_INDEX: &str =
    "index-OrganisationMember-UserId-OrganisationId-Unique";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(uuid_char(User::Id).primary_key())
                    .col(ColumnDef::new(User::FirstName).string().not_null())
                    .col(ColumnDef::new(User::LastName).string().not_null())
                    .col(ColumnDef::new(User::Email).string().not_null())
                    .col(ColumnDef::new(User::PhoneNumber).string().null())
                    .col(timestamp(User::CreatedDate, manager))
                    .col(timestamp(User::LastModified, manager))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_USER_EMAIL_INDEX)
                    .table(User::Table)
                    .col(User::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Organisation::Table)
                    .if_not_exists()
                    .col(uuid_char(Organisation::Id).primary_key())
                    .col(ColumnDef::new(Organisation::Name).string().not_null())
                    .col(ColumnDef::new(Organisation::Description).text().not_null())
                    .col(ColumnDef::new(Organisation::Email).string().not_null())
                    .col(ColumnDef::new(Organisation::Industry).string().not_null())
                    .col(
                        ColumnDef::new(Organisation::OrganisationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Organisation::Country).string().not_null())
                    .col(ColumnDef::new(Organisation::Address).string().not_null())
                    .col(ColumnDef::new(Organisation::State).string().not_null())
                    .col(uuid_char(Organisation::OwnerId))
                    .col(uuid_char(Organisation::CreatorId))
                    .col(flag(Organisation::IsDeleted))
                    .col(timestamp(Organisation::CreatedDate, manager))
                    .col(timestamp(Organisation::LastModified, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Organisation-OwnerId")
                            .from(Organisation::Table, Organisation::OwnerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Organisation-CreatorId")
                            .from(Organisation::Table, Organisation::CreatorId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_ORGANISATION_EMAIL_INDEX)
                    .table(Organisation::Table)
                    .col(Organisation::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(uuid_char(Role::Id).primary_key())
                    .col(ColumnDef::new(Role::Name).string().not_null())
                    .col(ColumnDef::new(Role::Description).text().null())
                    .col(uuid_char(Role::OrganisationId))
                    .col(timestamp(Role::CreatedDate, manager))
                    .col(timestamp(Role::LastModified, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Role-OrganisationId")
                            .from(Role::Table, Role::OrganisationId)
                            .to(Organisation::Table, Organisation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_ROLE_NAME_IN_ORGANISATION_INDEX)
                    .table(Role::Table)
                    .col(Role::Name)
                    .col(Role::OrganisationId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Permission::Table)
                    .if_not_exists()
                    .col(uuid_char(Permission::Id).primary_key())
                    .col(uuid_char(Permission::RoleId))
                    .col(flag(Permission::CanViewTransactions))
                    .col(flag(Permission::CanViewRefunds))
                    .col(flag(Permission::CanLogRefunds))
                    .col(flag(Permission::CanViewUsers))
                    .col(flag(Permission::CanCreateUsers))
                    .col(flag(Permission::CanEditUsers))
                    .col(flag(Permission::CanBlacklistWhitelistUsers))
                    .col(timestamp(Permission::CreatedDate, manager))
                    .col(timestamp(Permission::LastModified, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Permission-RoleId")
                            .from(Permission::Table, Permission::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrganisationMember::Table)
                    .if_not_exists()
                    .col(uuid_char(OrganisationMember::Id).primary_key())
                    .col(uuid_char(OrganisationMember::UserId))
                    .col(uuid_char(OrganisationMember::OrganisationId))
                    .col(uuid_char_null(OrganisationMember::RoleId))
                    .col(timestamp(OrganisationMember::CreatedDate, manager))
                    .col(timestamp(OrganisationMember::LastModified, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-OrganisationMember-UserId")
                            .from(OrganisationMember::Table, OrganisationMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-OrganisationMember-OrganisationId")
                            .from(
                                OrganisationMember::Table,
                                OrganisationMember::OrganisationId,
                            )
                            .to(Organisation::Table, Organisation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-OrganisationMember-RoleId")
                            .from(OrganisationMember::Table, OrganisationMember::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_MEMBER_IN_ORGANISATION_INDEX)
                    .table(OrganisationMember::Table)
                    .col(OrganisationMember::UserId)
                    .col(OrganisationMember::OrganisationId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrganisationMember::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Permission::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Organisation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CreatedDate,
    LastModified,
}

#[derive(Iden)]
pub enum Organisation {
    Table,
    Id,
    Name,
    Description,
    Email,
    Industry,
    OrganisationType,
    Country,
    Address,
    State,
    OwnerId,
    CreatorId,
    IsDeleted,
    CreatedDate,
    LastModified,
}

#[derive(Iden)]
pub enum Role {
    Table,
    Id,
    Name,
    Description,
    OrganisationId,
    CreatedDate,
    LastModified,
}

#[derive(Iden)]
#[allow(clippy::enum_variant_names)]
pub enum Permission {
    Table,
    Id,
    RoleId,
    CanViewTransactions,
    CanViewRefunds,
    CanLogRefunds,
    CanViewUsers,
    CanCreateUsers,
    CanEditUsers,
    CanBlacklistWhitelistUsers,
    CreatedDate,
    LastModified,
}

#[derive(Iden)]
pub enum OrganisationMember {
    Table,
    Id,
    UserId,
    OrganisationId,
    RoleId,
    CreatedDate,
    LastModified,
}
