//! Group domain models.

use crate::model::catalog::{GroupDto, PaginatedGroupsDto};

/// Study group, identified for reconciliation by its unique name.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
}

impl Group {
    /// Converts an entity model to a group domain model at the repository boundary.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the group domain model to a DTO for API responses.
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// One page of groups ordered by name.
#[derive(Debug, Clone)]
pub struct PaginatedGroups {
    pub groups: Vec<Group>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedGroups {
    pub fn into_dto(self) -> PaginatedGroupsDto {
        PaginatedGroupsDto {
            groups: self.groups.into_iter().map(Group::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
