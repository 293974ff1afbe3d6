use serde::{Deserialize, Serialize};

/// Pass/fail classification of a student's average against the minimum
/// passing average of the school/year.
///
/// A zero average means no grade has been recorded yet, so the term is
/// still in progress rather than failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Situacao {
    Aprovado,
    Reprovado,
    EmAndamento,
}

impl Situacao {
    /// Classify a weighted average against the minimum passing average.
    /// The boundary is inclusive: media == minima counts as Aprovado.
    pub fn classificar(media_geral: f64, media_minima: f64) -> Situacao {
        if media_geral >= media_minima {
            Situacao::Aprovado
        } else if media_geral > 0.0 {
            Situacao::Reprovado
        } else {
            Situacao::EmAndamento
        }
    }

    /// Wire value used by the backend in class reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Situacao::Aprovado => "Aprovado",
            Situacao::Reprovado => "Reprovado",
            Situacao::EmAndamento => "Em andamento",
        }
    }

    /// Short label shown on the boletim screen.
    pub fn label_curto(&self) -> &'static str {
        match self {
            Situacao::Aprovado => "Aprovado",
            Situacao::Reprovado => "Reprovado",
            Situacao::EmAndamento => "Em Curso",
        }
    }
}

impl Serialize for Situacao {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Situacao {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Aprovado" => Ok(Situacao::Aprovado),
            "Reprovado" => Ok(Situacao::Reprovado),
            // The boletim screen historically spelled the in-progress state
            // differently from the class report
            "Em andamento" | "Em curso" | "Em Curso" => Ok(Situacao::EmAndamento),
            _ => Err(serde::de::Error::custom(format!(
                "invalid situacao: '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for Situacao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cosmetic color bucket for displaying averages and single grades.
///
/// Deliberately a separate scale from [`Situacao`]: the pass/fail rule
/// compares against the configurable minimum (default 6.0), while display
/// buckets are fixed at 7 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaixaMedia {
    Alta,
    Media,
    Baixa,
}

impl FaixaMedia {
    pub fn classificar(valor: f64) -> FaixaMedia {
        if valor >= 7.0 {
            FaixaMedia::Alta
        } else if valor >= 5.0 {
            FaixaMedia::Media
        } else {
            FaixaMedia::Baixa
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FaixaMedia::Alta => "alta",
            FaixaMedia::Media => "media",
            FaixaMedia::Baixa => "baixa",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classificar_boundary_is_inclusive() {
        assert_eq!(Situacao::classificar(6.0, 6.0), Situacao::Aprovado);
    }

    #[test]
    fn test_classificar_over_range() {
        // For all media/minima in [0,10]: Aprovado iff media >= minima > 0,
        // EmAndamento iff media == 0, otherwise Reprovado
        for media10 in 0..=100 {
            for minima10 in 1..=100 {
                let media = f64::from(media10) / 10.0;
                let minima = f64::from(minima10) / 10.0;
                let got = Situacao::classificar(media, minima);
                if media >= minima {
                    assert_eq!(got, Situacao::Aprovado, "media={media} minima={minima}");
                } else if media == 0.0 {
                    assert_eq!(got, Situacao::EmAndamento, "media={media} minima={minima}");
                } else {
                    assert_eq!(got, Situacao::Reprovado, "media={media} minima={minima}");
                }
            }
        }
    }

    #[test]
    fn test_classificar_zero_is_em_andamento() {
        assert_eq!(Situacao::classificar(0.0, 6.0), Situacao::EmAndamento);
    }

    #[test]
    fn test_situacao_wire_values() {
        assert_eq!(serde_json::to_string(&Situacao::EmAndamento).unwrap(), "\"Em andamento\"");
        let s: Situacao = serde_json::from_str("\"Em Curso\"").unwrap();
        assert_eq!(s, Situacao::EmAndamento);
    }

    #[test]
    fn test_faixa_uses_its_own_cutoffs() {
        // 6.5 passes the default rule but is not the high bucket
        assert_eq!(Situacao::classificar(6.5, 6.0), Situacao::Aprovado);
        assert_eq!(FaixaMedia::classificar(6.5), FaixaMedia::Media);
        assert_eq!(FaixaMedia::classificar(7.0), FaixaMedia::Alta);
        assert_eq!(FaixaMedia::classificar(4.9), FaixaMedia::Baixa);
        assert_eq!(FaixaMedia::classificar(5.0), FaixaMedia::Media);
    }
}
