use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Group, Student};
///
/// let test = TestBuilder::new()
///     .with_table(Group)
///     .with_table(Student)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the `unique` natural-key columns declared on the entity.
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index that the entity definitions cannot express.
    ///
    /// Composite indexes live only in the migrations; tests that depend on them
    /// must add them here.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement, run after all tables are created
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the tables holding people and their groups.
    ///
    /// Adds, in dependency order:
    /// - Group
    /// - Student
    /// - Teacher
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_people_tables(self) -> Self {
        self.with_table(Group)
            .with_table(Student)
            .with_table(Teacher)
    }

    /// Adds every table touched by a roster import.
    ///
    /// Equivalent to `with_people_tables()` followed by Exam and Debt, plus the
    /// unique index on the debt's (exam, student, teacher) triple. Use this for
    /// reconciliation and debt repository tests.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_roster_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_roster_tables(self) -> Self {
        self.with_people_tables()
            .with_table(Exam)
            .with_table(Debt)
            .with_index(debt_triple_index())
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, then the indexes added via
    /// `with_index()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

/// Same unique index as the debt table migration.
fn debt_triple_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_debts_exam_student_teacher")
        .table(Debt)
        .col(entity::debt::Column::ExamId)
        .col(entity::debt::Column::StudentUuid)
        .col(entity::debt::Column::TeacherUuid)
        .unique()
        .to_owned()
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
