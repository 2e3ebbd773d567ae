//! In-memory relational store
//!
//! Useful for testing and development. Data is lost when the process
//! terminates. The tables enforce the same keys and constraints as the
//! PostgreSQL schema so both backends fail the same way.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Feedback, Team, TeamMember};
use crate::domain::DomainError;

/// Rows of every table plus their ID sequences
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) team_members: BTreeMap<i64, TeamMember>,
    pub(crate) teams: BTreeMap<i64, Team>,
    /// (team_id, team_member_id) pairs; the set is the composite primary key
    pub(crate) team_assignments: BTreeSet<(i64, i64)>,
    pub(crate) feedback: BTreeMap<i64, Feedback>,
    team_member_seq: i64,
    team_seq: i64,
    feedback_seq: i64,
}

impl Tables {
    pub(crate) fn next_team_member_id(&mut self) -> i64 {
        self.team_member_seq += 1;
        self.team_member_seq
    }

    pub(crate) fn next_team_id(&mut self) -> i64 {
        self.team_seq += 1;
        self.team_seq
    }

    pub(crate) fn next_feedback_id(&mut self) -> i64 {
        self.feedback_seq += 1;
        self.feedback_seq
    }

    pub(crate) fn email_taken(&self, email: &str) -> bool {
        self.team_members.values().any(|m| m.email() == email)
    }
}

/// Thread-safe in-memory database shared by the in-memory repositories
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
}

impl InMemoryDatabase {
    /// Creates a new empty database
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DomainError> {
        self.tables
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DomainError> {
        self.tables
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}
