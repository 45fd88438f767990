pub use super::debt::Entity as Debt;
pub use super::exam::Entity as Exam;
pub use super::group::Entity as Group;
pub use super::student::Entity as Student;
pub use super::teacher::Entity as Teacher;
