use serde::{Deserialize, Serialize};

use crate::models::alunos::entities::Aluno;
use crate::models::coordenadores::entities::Coordenador;
use crate::models::professores::entities::Professor;

// User role
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,       // full access
    Coordenador, // school coordination
    Professor,   // teaching staff
    Aluno,       // student
}

impl Role {
    pub const ADMIN: &'static str = "ADMIN";
    pub const COORDENADOR: &'static str = "COORDENADOR";
    pub const PROFESSOR: &'static str = "PROFESSOR";
    pub const ALUNO: &'static str = "ALUNO";

    pub fn admin_roles() -> &'static [Role] {
        &[Role::Admin]
    }
    pub fn coordenacao_roles() -> &'static [Role] {
        &[Role::Admin, Role::Coordenador]
    }
    pub fn docencia_roles() -> &'static [Role] {
        &[Role::Admin, Role::Coordenador, Role::Professor]
    }
    pub fn all_roles() -> &'static [Role] {
        &[Role::Admin, Role::Coordenador, Role::Professor, Role::Aluno]
    }

    pub fn is_aluno(&self) -> bool {
        *self == Role::Aluno
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Role::ADMIN => Ok(Role::Admin),
            Role::COORDENADOR => Ok(Role::Coordenador),
            Role::PROFESSOR => Ok(Role::Professor),
            Role::ALUNO => Ok(Role::Aluno),
            _ => Err(serde::de::Error::custom(format!(
                "invalid role: '{s}'. expected one of: ADMIN, COORDENADOR, PROFESSOR, ALUNO"
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", Role::ADMIN),
            Role::Coordenador => write!(f, "{}", Role::COORDENADOR),
            Role::Professor => write!(f, "{}", Role::PROFESSOR),
            Role::Aluno => write!(f, "{}", Role::ALUNO),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "COORDENADOR" => Ok(Role::Coordenador),
            "PROFESSOR" => Ok(Role::Professor),
            "ALUNO" => Ok(Role::Aluno),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

// Authenticated user, optionally linked to a staff or student record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_professor: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_coordenador: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_aluno: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<Professor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordenador: Option<Coordenador>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aluno: Option<Aluno>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Coordenador).unwrap(), "\"COORDENADOR\"");
        let role: Role = serde_json::from_str("\"ALUNO\"").unwrap();
        assert_eq!(role, Role::Aluno);
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!(serde_json::from_str::<Role>("\"DIRETOR\"").is_err());
        assert!(Role::from_str("aluno").is_err());
    }

    #[test]
    fn test_role_sets() {
        assert!(Role::coordenacao_roles().contains(&Role::Coordenador));
        assert!(!Role::coordenacao_roles().contains(&Role::Professor));
        assert!(Role::docencia_roles().contains(&Role::Professor));
        assert_eq!(Role::all_roles().len(), 4);
    }

    #[test]
    fn test_is_aluno() {
        assert!(Role::Aluno.is_aluno());
        assert!(!Role::Professor.is_aluno());
    }
}
