//! Display implementations for domain models.

use std::fmt;

use crate::models::Department;

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Department {id}: {}, {}>", self.name, self.location),
            None => write!(f, "<Department None: {}, {}>", self.name, self.location),
        }
    }
}
