/*
[INPUT]:  API schema definitions
[OUTPUT]: Typed task data model
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;

pub use enums::TaskStatus;
pub use models::Task;
pub use requests::{CreateTask, UpdateTask};
