use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create user_profiles table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::Username)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserProfiles::DisplayName).string_len(255))
                    .col(ColumnDef::new(UserProfiles::Bio).text())
                    .col(ColumnDef::new(UserProfiles::AvatarUrl).string_len(255))
                    .col(
                        ColumnDef::new(UserProfiles::Role)
                            .string_len(50)
                            .not_null()
                            .default("user"),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::Preferences)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(ColumnDef::new(UserProfiles::LastSeen).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(UserProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(UserProfiles::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Partial unique indexes: a tombstoned row no longer holds its
        // identity, username or email. The index names are matched by the
        // repository to report which field collided.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_user_profiles_user_id_live
                ON user_profiles (user_id)
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_user_profiles_username_live
                ON user_profiles (username)
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_user_profiles_email_live
                ON user_profiles (email)
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        // Soft-delete filtering
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_profiles_deleted_at
                ON user_profiles (deleted_at);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_user_profiles_updated_at
                BEFORE UPDATE ON user_profiles
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_user_profiles_updated_at ON user_profiles",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_user_profiles_user_id_live;
                DROP INDEX IF EXISTS idx_user_profiles_username_live;
                DROP INDEX IF EXISTS idx_user_profiles_email_live;
                DROP INDEX IF EXISTS idx_user_profiles_deleted_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    Id,
    UserId,
    Username,
    Email,
    DisplayName,
    Bio,
    AvatarUrl,
    Role,
    Preferences,
    LastSeen,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
