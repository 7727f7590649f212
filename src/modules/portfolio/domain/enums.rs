use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Raised when a persisted string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// Closed string sets shared by persistence and the wire format. The literal is both the
// serde name and the stored column value.
macro_rules! closed_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => $literal:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

closed_enum!(
    /// Role held during an experience entry.
    ProgrammingRole, "role", {
        FullStack => "FullStack",
        Frontend => "Frontend",
        Backend => "Backend",
        Mobile => "Mobile",
    }
);

closed_enum!(
    ProgrammingLevel, "level", {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
        Expert => "Expert",
    }
);

closed_enum!(
    JobType, "job_type", {
        FullTime => "Full_Time",
        PartTime => "Part_Time",
        Contract => "Contract",
        Freelance => "Freelance",
    }
);

closed_enum!(
    /// Whether a technology is a main or a side skill.
    Priority, "priority", {
        Main => "main",
        Side => "side",
    }
);

closed_enum!(
    /// Tech-stack category. Also the grouping key of the "Tech Stack Details" export.
    ProjectType, "type", {
        Frontend => "Frontend",
        Mobile => "Mobile",
        Fullstack => "Fullstack",
        Backend => "Backend",
    }
);
