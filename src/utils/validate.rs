use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// Grade values live in [0, 10].
pub fn validate_nota(nota: f64) -> Result<(), &'static str> {
    if !nota.is_finite() || !(0.0..=10.0).contains(&nota) {
        return Err("Nota must be between 0 and 10");
    }
    Ok(())
}

/// Minimum passing averages use the same scale as grades.
pub fn validate_media_minima(media: f64) -> Result<(), &'static str> {
    if !media.is_finite() || !(0.0..=10.0).contains(&media) {
        return Err("Media minima must be between 0 and 10");
    }
    Ok(())
}

/// Evaluation weights must be positive.
pub fn validate_peso(peso: f64) -> Result<(), &'static str> {
    if !peso.is_finite() || peso <= 0.0 {
        return Err("Peso must be greater than zero");
    }
    Ok(())
}

pub fn validate_required(value: &str, field: &'static str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}
