use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

/// Ids are stored as hyphenated text
pub(crate) fn uuid_char<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).char_len(36).not_null().take()
}

pub(crate) fn uuid_char_null<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).char_len(36).null().take()
}

/// Non-null timestamp with millisecond precision where the backend supports it
pub(crate) fn timestamp<T: IntoIden>(ident: T, manager: &SchemaManager) -> ColumnDef {
    let column_type = match manager.get_database_backend() {
        DatabaseBackend::MySql => "datetime(3)",
        DatabaseBackend::Postgres => "timestamp(3)",
        DatabaseBackend::Sqlite => "datetime",
    };

    ColumnDef::new(ident)
        .custom(Alias::new(column_type))
        .not_null()
        .take()
}

pub(crate) fn flag<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident)
        .boolean()
        .not_null()
        .default(false)
        .take()
}
