use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::cards;

/// Represents a task card as stored in the database
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Card {
    /// Identifier assigned by the database on insert
    id: i64,

    /// The course or subject the task belongs to
    subject: String,

    /// Short name of the task
    task_name: String,

    /// Display color chosen by the client
    color: String,

    /// Free-form deadline text, not parsed
    deadline: String,

    /// Link to the task description
    task_info_link: String,

    /// Link where the task is submitted
    task_submission_link: String,

    /// Link for enrolling in the task
    task_enrollment_link: String,
}

impl Card {
    /// Gets the card's database-assigned ID
    pub fn get_id(&self) -> i64 {
        self.id
    }

    pub fn get_subject(&self) -> &str {
        &self.subject
    }

    pub fn get_task_name(&self) -> &str {
        &self.task_name
    }

    pub fn get_color(&self) -> &str {
        &self.color
    }

    pub fn get_deadline(&self) -> &str {
        &self.deadline
    }

    pub fn get_task_info_link(&self) -> &str {
        &self.task_info_link
    }

    pub fn get_task_submission_link(&self) -> &str {
        &self.task_submission_link
    }

    pub fn get_task_enrollment_link(&self) -> &str {
        &self.task_enrollment_link
    }

    /// Returns the card's contents without its ID
    ///
    /// Useful for comparing a stored card against the values it was created from.
    pub fn to_new_card(&self) -> NewCard {
        NewCard {
            subject: self.subject.clone(),
            task_name: self.task_name.clone(),
            color: self.color.clone(),
            deadline: self.deadline.clone(),
            task_info_link: self.task_info_link.clone(),
            task_submission_link: self.task_submission_link.clone(),
            task_enrollment_link: self.task_enrollment_link.clone(),
        }
    }
}

/// A card that has not been inserted yet
///
/// The ID column is left out so SQLite assigns it.
#[derive(Insertable, Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[diesel(table_name = cards)]
pub struct NewCard {
    pub subject: String,
    pub task_name: String,
    pub color: String,
    pub deadline: String,
    pub task_info_link: String,
    pub task_submission_link: String,
    pub task_enrollment_link: String,
}
