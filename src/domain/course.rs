//! Course reference entity.

use super::id::Id;

/// An offered course. Reference data, seeded once and never mutated.
#[derive(Debug, Clone)]
pub struct Course {
    id: Id<Course>,
    name: String,
    credits: u32,
}

impl Course {
    pub fn new(id: Id<Course>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            id,
            name: name.into(),
            credits,
        }
    }

    pub fn id(&self) -> Id<Course> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }
}

// Entity equality: two courses are the same course iff they share an id.
impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_goes_by_id() {
        let a = Course::new(Id::new(1), "Calculus", 5);
        let b = Course::new(Id::new(1), "Calculus (renamed)", 4);
        let c = Course::new(Id::new(2), "Calculus", 5);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
