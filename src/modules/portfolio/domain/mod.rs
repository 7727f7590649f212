pub mod entities;
pub mod enums;
pub mod validation;

pub use entities::{
    Blog, Contact, Experience, Feature, Portfolio, Profile, Project, Skill, TechStack, Tool,
};
pub use enums::{JobType, Priority, ProgrammingLevel, ProgrammingRole, ProjectType};
pub use validation::ValidationError;
