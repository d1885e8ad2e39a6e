use std::path::Path;

use dare_eye_core::score::Scores;

use crate::error::AppError;

/// Load final scores from a JSON object or a TOML table of `name = points`.
pub fn load_scores(path: &Path) -> Result<Scores, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Scores(format!("{}: {e}", path.display())))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let scores = if is_json {
        serde_json::from_str::<Scores>(&content)
            .map_err(|e| AppError::Scores(format!("{}: {e}", path.display())))?
    } else {
        toml::from_str::<Scores>(&content)
            .map_err(|e| AppError::Scores(format!("{}: {e}", path.display())))?
    };
    tracing::info!(players = scores.len(), path = %path.display(), "Loaded scores");
    Ok(scores)
}

/// Parse one `name=points` line typed during setup.
pub fn parse_score_line(line: &str) -> Result<(String, i64), AppError> {
    let (name, points) = line
        .rsplit_once('=')
        .ok_or_else(|| AppError::Scores(format!("expected name=points, got `{line}`")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Scores("player name must not be empty".to_string()));
    }
    let points = points
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::Scores(format!("`{}` is not a whole number", points.trim())))?;
    Ok((name.to_string(), points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn order(scores: &Scores) -> Vec<(&str, i64)> {
        scores.iter().map(|e| (e.name.as_str(), e.points)).collect()
    }

    #[test]
    fn loads_toml_in_document_order() {
        let path = write_temp("scores.toml", "Cy = 2\nAnn = 5\n\"Bo B\" = 5\n");
        let scores = load_scores(&path).unwrap();
        assert_eq!(order(&scores), vec![("Cy", 2), ("Ann", 5), ("Bo B", 5)]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn loads_json() {
        let path = write_temp("scores.json", r#"{"Ann": 5, "Bo": -1}"#);
        let scores = load_scores(&path).unwrap();
        assert_eq!(order(&scores), vec![("Ann", 5), ("Bo", -1)]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_a_scores_error() {
        let err = load_scores(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, AppError::Scores(_)));
    }

    #[test]
    fn score_lines() {
        assert_eq!(parse_score_line("Ann=5").unwrap(), ("Ann".to_string(), 5));
        assert_eq!(parse_score_line(" Mary Jo = -3 ").unwrap(), ("Mary Jo".to_string(), -3));
        assert!(parse_score_line("Ann").is_err());
        assert!(parse_score_line("=4").is_err());
        assert!(parse_score_line("Ann=five").is_err());
    }
}
