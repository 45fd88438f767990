//! Group data repository for database operations.
//!
//! Groups are looked up by name during roster reconciliation and listed for the
//! catalog endpoint. The repository is generic over the connection so the same
//! queries run on the pool or inside a transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::group::Group;

/// Repository providing database operations for groups.
pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `GroupRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds groups whose name is one of `names`.
    ///
    /// Results are ordered by ID ascending so callers taking the first match get the
    /// oldest row.
    ///
    /// # Arguments
    /// - `names` - Group names to match exactly
    ///
    /// # Returns
    /// - `Ok(Vec<Group>)` - Matching groups, empty when `names` is empty or nothing matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, names: &[String]) -> Result<Vec<Group>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Group::find()
            .filter(entity::group::Column::Name.is_in(names.iter().cloned()))
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Inserts a group with the given name.
    ///
    /// # Arguments
    /// - `name` - Unique group name
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(DbErr)` - Database error, including unique violations on `name`
    pub async fn create(&self, name: String) -> Result<Group, DbErr> {
        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    /// Gets a page of groups ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-based page number
    /// - `per_page` - Number of groups per page
    ///
    /// # Returns
    /// - `Ok((groups, total))` - Groups on the page and total group count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Group>, u64), DbErr> {
        let paginator = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let groups = paginator.fetch_page(page).await?;

        Ok((groups.into_iter().map(Group::from_entity).collect(), total))
    }
}
